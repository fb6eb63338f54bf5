//! Date-range filtering of visits.
//!
//! Both bounds of a [`DateRange`] are exclusive: a visit starting exactly on
//! either bound is dropped.

use chrono::{DateTime, Datelike};

use crate::error::{ExtractError, Result};
use crate::timeline::{Timestamp, Visit};

pub use crate::timeline::zero_instant;

/// Exclusive `(start, end)` bound on visit start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DateRange {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Build a range from optional RFC 3339 strings.
    ///
    /// A missing or empty bound becomes [`zero_instant`], for the end bound as
    /// well as the start. An omitted end therefore yields an empty range
    /// rather than an open one.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        Ok(Self {
            start: parse_bound("start", start)?,
            end: parse_bound("end", end)?,
        })
    }

    /// True if `instant` lies strictly between the bounds.
    pub fn contains(&self, instant: &Timestamp) -> bool {
        *instant > self.start && *instant < self.end
    }

    /// Calendar years of the two bounds, used to pre-select files by name.
    pub fn year_bounds(&self) -> (i32, i32) {
        (self.start.year(), self.end.year())
    }
}

fn parse_bound(flag: &'static str, value: Option<&str>) -> Result<Timestamp> {
    match value {
        None | Some("") => Ok(zero_instant()),
        Some(text) => {
            DateTime::parse_from_rfc3339(text).map_err(|source| ExtractError::InvalidTimestamp {
                flag,
                value: text.to_string(),
                source,
            })
        }
    }
}

/// Keep the visits whose start lies strictly inside `range`, preserving order.
pub fn filter_visits(visits: Vec<Visit>, range: &DateRange) -> Vec<Visit> {
    visits
        .into_iter()
        .filter(|visit| range.contains(&visit.start()))
        .collect()
}
