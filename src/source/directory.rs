//! Filesystem subtree source.

use std::fs::File;
use std::path::PathBuf;

use tracing::{debug, trace};
use walkdir::WalkDir;

use super::select::YearRange;
use super::{CandidateSource, CandidateVisitor};
use crate::error::{ExtractError, Result};

/// Walks every file below a root directory in file-name order.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CandidateSource for DirectorySource {
    fn for_each_candidate(
        &mut self,
        years: YearRange,
        visitor: &mut CandidateVisitor<'_>,
    ) -> Result<()> {
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !years.is_candidate(&name) {
                trace!(path = %entry.path().display(), "skipping non-candidate file");
                continue;
            }

            let path = entry.path();
            debug!(path = %path.display(), "reading candidate file");
            let mut file = File::open(path).map_err(|source| ExtractError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            visitor(&path.display().to_string(), &mut file)?;
        }
        Ok(())
    }
}
