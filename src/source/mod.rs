//! Candidate file sources
//!
//! A source enumerates the files of an export, keeps those whose name carries
//! a year prefix inside the requested range, and hands each one to a visitor
//! as a byte stream. Directories and zip archives are interchangeable here;
//! everything downstream only sees `(name, reader)` pairs.
//!
//! # Structure
//!
//! - `select` - Year-prefix file selection
//! - `directory` - Recursive filesystem walk
//! - `archive` - Zip archive entry walk

mod archive;
mod directory;
pub mod select;

pub use archive::ArchiveSource;
pub use directory::DirectorySource;
pub use select::{is_candidate, YearRange};

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{ExtractError, Result};

/// Archive extension accepted by [`Source::open`].
pub const ZIP_EXTENSION: &str = "zip";

/// Callback receiving a candidate's display name and content stream.
pub type CandidateVisitor<'a> = dyn FnMut(&str, &mut dyn Read) -> Result<()> + 'a;

/// Anything that can enumerate candidate files.
pub trait CandidateSource {
    /// Call `visitor` for every file whose year prefix lies in `years`.
    ///
    /// Stops at, and returns, the first error from the walk, from opening an
    /// entry, or from the visitor itself.
    fn for_each_candidate(
        &mut self,
        years: YearRange,
        visitor: &mut CandidateVisitor<'_>,
    ) -> Result<()>;
}

/// Source chosen from the kind of the root path.
pub enum Source {
    Directory(DirectorySource),
    Archive(ArchiveSource<BufReader<File>>),
}

impl Source {
    /// Inspect `root` and open the matching source.
    ///
    /// Directories are walked recursively; files must carry a `.zip`
    /// extension. Anything else is rejected before any entry is read.
    pub fn open(root: &Path) -> Result<Self> {
        let metadata = fs::metadata(root).map_err(|source| ExtractError::SourceNotFound {
            path: root.to_path_buf(),
            source,
        })?;

        if metadata.is_dir() {
            debug!(root = %root.display(), "using directory source");
            return Ok(Source::Directory(DirectorySource::new(root)));
        }

        match root.extension().and_then(|ext| ext.to_str()) {
            Some(ZIP_EXTENSION) => {
                debug!(root = %root.display(), "using zip archive source");
                Ok(Source::Archive(ArchiveSource::open(root)?))
            }
            other => Err(ExtractError::UnsupportedExtension {
                extension: other.map(|ext| format!(".{}", ext)).unwrap_or_default(),
            }),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Source::Directory(_) => "directory",
            Source::Archive(_) => "zip",
        }
    }
}

impl CandidateSource for Source {
    fn for_each_candidate(
        &mut self,
        years: YearRange,
        visitor: &mut CandidateVisitor<'_>,
    ) -> Result<()> {
        match self {
            Source::Directory(source) => source.for_each_candidate(years, visitor),
            Source::Archive(source) => source.for_each_candidate(years, visitor),
        }
    }
}
