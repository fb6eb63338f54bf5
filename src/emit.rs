//! CSV output of visits.
//!
//! Each visit becomes one row with five columns:
//!
//! ```text
//! timestart,timeend,durationHours,locationname,locationaddress
//! 2022-03-01 10:00:00,2022-03-01 12:00:00,2.000000,Cafe,123 Main St
//! ```
//!
//! Times are written in the offset the export recorded, without the offset
//! itself. Durations are hours with six decimals.

use std::io::{self, Write};

use crate::error::Result;
use crate::timeline::{Timestamp, Visit};

/// Column names, in output order.
pub const HEADER: [&str; 5] = [
    "timestart",
    "timeend",
    "durationHours",
    "locationname",
    "locationaddress",
];

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS` in its own offset.
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.format(DATE_TIME_FORMAT).to_string()
}

/// Render fractional hours with six decimals.
pub fn format_hours(hours: f64) -> String {
    format!("{:.6}", hours)
}

/// The five output fields of a visit.
pub fn visit_record(visit: &Visit) -> [String; 5] {
    [
        format_timestamp(&visit.duration.start),
        format_timestamp(&visit.duration.end),
        format_hours(visit.duration_hours()),
        visit.location.name.clone(),
        visit.location.address.clone(),
    ]
}

/// Buffered CSV writer for visits.
pub struct CsvEmitter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvEmitter<W> {
    /// Wrap `output` and write the header row.
    pub fn new(output: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(output);
        writer.write_record(HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_visit(&mut self, visit: &Visit) -> Result<()> {
        self.writer.write_record(visit_record(visit))?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far, header excluded.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().map_err(csv::Error::from)?;
        self.writer
            .into_inner()
            .map_err(|err| {
                let cause = err.error();
                csv::Error::from(io::Error::new(cause.kind(), cause.to_string())).into()
            })
    }
}
