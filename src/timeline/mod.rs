//! Timeline document model and parser
//!
//! Location-history exports store one JSON timeline document per month.
//! This module decodes those documents into [`Visit`] records.
//!
//! # Structure
//!
//! - `types` - Document, entry, and visit types
//! - `reader` - Parsing documents from readers and strings

mod reader;
mod types;

pub use reader::parse_visits;
pub use types::{
    zero_instant, Location, TimelineDocument, TimelineEntry, Timestamp, Visit, VisitDuration,
};
