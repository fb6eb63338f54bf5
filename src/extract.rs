//! Extraction pipeline.
//!
//! Ties the pieces together for one run:
//!
//! 1. [`Source::open`] picks a directory or zip source for the root path
//! 2. the source yields each candidate file whose year prefix is in range
//! 3. the file is parsed into visits and filtered by [`DateRange`]
//! 4. every retained visit goes to the caller's callback
//!
//! [`run`] drives the pipeline into a [`CsvEmitter`].

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::emit::CsvEmitter;
use crate::error::{ExtractError, Result};
use crate::filter::{filter_visits, DateRange};
use crate::source::{CandidateSource, Source, YearRange};
use crate::timeline::{parse_visits, Visit};

/// Settings for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory or `.zip` archive to search.
    pub source: PathBuf,
    /// Exclusive bound on visit start times.
    pub range: DateRange,
    /// Skip documents that fail to parse instead of aborting.
    pub skip_malformed: bool,
}

impl ExtractOptions {
    pub fn new(source: impl Into<PathBuf>, range: DateRange) -> Self {
        Self {
            source: source.into(),
            range,
            skip_malformed: false,
        }
    }

    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.skip_malformed = skip;
        self
    }
}

/// A candidate file that was skipped because it failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub name: String,
    pub reason: String,
}

/// Counters collected during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Candidate files read.
    pub files: usize,
    /// Visits passed to the callback.
    pub visits: usize,
    /// Files skipped as malformed (only with `skip_malformed`).
    pub skipped: Vec<SkippedFile>,
}

/// Walk `root` and call `on_visit` for every visit inside `range`.
///
/// Aborts on the first error of any kind.
pub fn walk<F>(root: &Path, range: &DateRange, on_visit: F) -> Result<ExtractSummary>
where
    F: FnMut(&Visit) -> Result<()>,
{
    let mut source = Source::open(root)?;
    walk_source(&mut source, range, false, on_visit)
}

/// Run the parse/filter/callback chain over an already opened source.
///
/// With `skip_malformed`, documents that fail to decode are logged and
/// recorded in the summary instead of aborting. Read errors always abort.
pub fn walk_source<S, F>(
    source: &mut S,
    range: &DateRange,
    skip_malformed: bool,
    mut on_visit: F,
) -> Result<ExtractSummary>
where
    S: CandidateSource + ?Sized,
    F: FnMut(&Visit) -> Result<()>,
{
    let years = YearRange::from(range.year_bounds());
    debug!(start_year = years.start, end_year = years.end, "selecting files");

    let mut summary = ExtractSummary::default();
    source.for_each_candidate(years, &mut |name, reader| {
        summary.files += 1;

        let visits = match parse_visits(reader) {
            Ok(visits) => visits,
            Err(err) if err.is_io() => {
                return Err(ExtractError::Io {
                    path: PathBuf::from(name),
                    source: err.into(),
                });
            }
            Err(err) if skip_malformed => {
                warn!(file = name, error = %err, "skipping malformed timeline document");
                summary.skipped.push(SkippedFile {
                    name: name.to_string(),
                    reason: err.to_string(),
                });
                return Ok(());
            }
            Err(source) => {
                return Err(ExtractError::Parse {
                    name: name.to_string(),
                    source,
                });
            }
        };

        let total = visits.len();
        let kept = filter_visits(visits, range);
        debug!(file = name, total, kept = kept.len(), "filtered visits");

        for visit in &kept {
            on_visit(visit)?;
            summary.visits += 1;
        }
        Ok(())
    })?;

    Ok(summary)
}

/// Extract visits per `options` and write them to `output` as CSV.
///
/// The source is opened before anything is written, so an unusable source
/// leaves `output` untouched.
pub fn run<W: Write>(options: &ExtractOptions, output: W) -> Result<ExtractSummary> {
    let mut source = Source::open(&options.source)?;
    let mut emitter = CsvEmitter::new(output)?;

    let summary = walk_source(
        &mut source,
        &options.range,
        options.skip_malformed,
        |visit| emitter.write_visit(visit),
    )?;
    let rows = emitter.rows();
    emitter.finish()?;

    info!(
        source = source.kind(),
        files = summary.files,
        rows,
        skipped = summary.skipped.len(),
        "extraction finished"
    );
    Ok(summary)
}
