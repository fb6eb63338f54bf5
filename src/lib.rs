//! placevisits library
//!
//! Extracts place visits from a location-history export (a directory of
//! monthly timeline JSON files, or a zip archive of them), keeps the visits
//! inside a date window, and writes them as CSV.

pub mod cli;
pub mod emit;
pub mod error;
pub mod extract;
pub mod filter;
pub mod source;
pub mod timeline;

pub use emit::CsvEmitter;
pub use error::{ExtractError, Result};
pub use extract::{run, walk, ExtractOptions, ExtractSummary};
pub use filter::{filter_visits, DateRange};
pub use source::{is_candidate, CandidateSource, Source};
pub use timeline::{parse_visits, TimelineDocument, TimelineEntry, Visit};
