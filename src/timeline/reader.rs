//! Timeline document parser.
//!
//! Decodes a timeline document from any reader or a string.
//! Only the first JSON value in the input is decoded; anything after it is
//! ignored, so exports with trailing garbage still load. A top-level `null`
//! is an empty document.
//!
//! # Error Handling
//!
//! Parsing returns `serde_json::Error` for syntax errors, fields holding an
//! incompatible value, and empty input. Callers attach the file name.
//!
//! # Example
//!
//! ```
//! use placevisits::timeline::TimelineDocument;
//!
//! let doc = TimelineDocument::parse_str(r#"{"timelineObjects": []}"#)?;
//! assert_eq!(doc.visits().count(), 0);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::io::{BufReader, Read};

use serde::de::Error as _;

use super::types::{TimelineDocument, Visit};

impl TimelineDocument {
    /// Parse a timeline document from any reader.
    ///
    /// The reader is buffered internally.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is empty or only whitespace
    /// - The first JSON value is not a valid timeline document
    /// - Reading from the underlying stream fails
    pub fn parse_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        let mut stream = serde_json::Deserializer::from_reader(BufReader::new(reader))
            .into_iter::<Option<Self>>();

        match stream.next() {
            Some(document) => document.map(Option::unwrap_or_default),
            None => Err(serde_json::Error::custom("empty timeline document")),
        }
    }

    /// Parse a timeline document from a string.
    ///
    /// Convenience wrapper around [`parse_reader`](Self::parse_reader).
    pub fn parse_str(content: &str) -> serde_json::Result<Self> {
        Self::parse_reader(content.as_bytes())
    }
}

/// Decode a timeline document and return its place visits in document order.
pub fn parse_visits<R: Read>(reader: R) -> serde_json::Result<Vec<Visit>> {
    TimelineDocument::parse_reader(reader).map(TimelineDocument::into_visits)
}
