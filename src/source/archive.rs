//! Zip archive source.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use tracing::{debug, trace};
use zip::ZipArchive;

use super::select::YearRange;
use super::{CandidateSource, CandidateVisitor};
use crate::error::{ExtractError, Result};

/// Walks the entries of a zip archive in listing order.
pub struct ArchiveSource<R> {
    archive: ZipArchive<R>,
}

impl ArchiveSource<BufReader<File>> {
    /// Open a zip archive on disk and read its central directory.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> ArchiveSource<R> {
    pub fn new(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        debug!(entries = archive.len(), "opened zip archive");
        Ok(Self { archive })
    }
}

impl<R: Read + Seek> CandidateSource for ArchiveSource<R> {
    fn for_each_candidate(
        &mut self,
        years: YearRange,
        visitor: &mut CandidateVisitor<'_>,
    ) -> Result<()> {
        for index in 0..self.archive.len() {
            let mut entry = self.archive.by_index(index)?;
            if entry.is_dir() {
                continue;
            }

            let name = entry.name().to_string();
            if !years.is_candidate(&name) {
                trace!(entry = %name, "skipping non-candidate entry");
                continue;
            }

            debug!(entry = %name, "reading candidate entry");
            visitor(&name, &mut entry)?;
        }
        Ok(())
    }
}
