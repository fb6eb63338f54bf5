//! CLI definitions for placevisits
//!
//! This module contains the clap CLI structure, separated from main.rs so it
//! can be accessed by xtask for documentation generation (man page, markdown).

use std::fs;
use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser};
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::extract::ExtractOptions;
use crate::filter::DateRange;

/// Build clap styles for help and error output.
///
/// - Green: headers, usage, flag names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "placevisits")]
#[command(about = "Extract place visits from a location-history export as CSV")]
#[command(
    long_about = "Extract place visits from a location-history export as CSV.

Searches a directory of monthly timeline JSON files, or a .zip export, for
files named <year>_<month>.json whose year lies between the years of --start
and --end. Every place visit that starts strictly after --start and strictly
before --end is written to stdout as one CSV row:

    timestart,timeend,durationHours,locationname,locationaddress

Timestamps use RFC 3339, e.g. 2022-01-01T00:00:00Z. An omitted --start or
--end falls back to 0001-01-01T00:00:00Z, so an omitted --end selects nothing.

EXAMPLES:
    placevisits --source ~/Takeout/Semantic\\ Location\\ History \\
        --start 2022-01-01T00:00:00Z --end 2022-12-31T23:59:59Z
    placevisits --source takeout.zip --start 2021-06-01T00:00:00+02:00 \\
        --end 2021-09-01T00:00:00+02:00 > summer.csv"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Directory or .zip archive to search
    #[arg(long, value_name = "PATH")]
    pub source: PathBuf,

    /// Only visits starting after this RFC 3339 timestamp
    #[arg(long, value_name = "TIMESTAMP")]
    pub start: Option<String>,

    /// Only visits starting before this RFC 3339 timestamp
    #[arg(long, value_name = "TIMESTAMP")]
    pub end: Option<String>,

    /// Skip files that fail to parse and list them at the end
    #[arg(long)]
    pub skip_malformed: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validate arguments and build the options for a run.
    ///
    /// Checks, in order, that `--start` and `--end` parse and that `--source`
    /// exists.
    pub fn options(&self) -> Result<ExtractOptions> {
        let range = DateRange::parse(self.start.as_deref(), self.end.as_deref())?;
        if self.end_is_unset() {
            debug!("--end is unset; it defaults to the start of year 1 and matches nothing");
        }

        fs::metadata(&self.source).map_err(|source| ExtractError::SourceNotFound {
            path: self.source.clone(),
            source,
        })?;

        Ok(ExtractOptions::new(&self.source, range).skip_malformed(self.skip_malformed))
    }

    /// True when `--end` was omitted or given as an empty string.
    pub fn end_is_unset(&self) -> bool {
        self.end.as_deref().map_or(true, str::is_empty)
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
