//! Year-prefix file selection.
//!
//! Exports name their monthly documents `<year>_<MONTH>.json`. A file is a
//! candidate when the token before the first `_` of its base name parses as
//! a year inside the requested range. Names without a numeric prefix are
//! never candidates.

/// Inclusive range of calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Check a file name (bare or `/`-separated path) against the range.
    pub fn is_candidate(&self, filename: &str) -> bool {
        leading_year(filename).is_some_and(|year| self.contains(year))
    }
}

impl From<(i32, i32)> for YearRange {
    fn from((start, end): (i32, i32)) -> Self {
        Self::new(start, end)
    }
}

/// Check whether `filename` carries a year prefix in `[start_year, end_year]`.
pub fn is_candidate(filename: &str, start_year: i32, end_year: i32) -> bool {
    YearRange::new(start_year, end_year).is_candidate(filename)
}

/// Last `/`-separated component of a path-like name, ignoring trailing `/`.
pub fn base_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// The base-10 integer before the first `_` of the base name, if any.
pub fn leading_year(filename: &str) -> Option<i32> {
    base_name(filename).split('_').next()?.parse().ok()
}
