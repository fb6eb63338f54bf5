//! Extraction errors.

use std::path::PathBuf;

/// Errors that can occur while extracting visits.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Could not inspect source path {path:?}: {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file extension: {extension:?} (expected a directory or a .zip archive)")]
    UnsupportedExtension { extension: String },

    #[error("Invalid {flag} date {value:?}: {source}")]
    InvalidTimestamp {
        flag: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk source directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read zip archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Failed to parse timeline document {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write CSV output: {0}")]
    Csv(#[from] csv::Error),
}

impl ExtractError {
    /// Whether the error came from a document that failed to decode.
    pub fn is_parse(&self) -> bool {
        matches!(self, ExtractError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
