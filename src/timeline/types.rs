//! Type definitions for the timeline document format.
//!
//! A timeline document is a single JSON object whose `timelineObjects` array
//! holds one entry per recorded event. Each entry carries exactly one event
//! kind as a keyed object; only place visits are decoded here.
//!
//! # Example
//!
//! ```text
//! {
//!   "timelineObjects": [
//!     { "activitySegment": { ... } },
//!     { "placeVisit": {
//!         "location": { "name": "Cafe", "address": "123 Main St" },
//!         "duration": {
//!           "startTimestamp": "2022-03-01T10:00:00Z",
//!           "endTimestamp": "2022-03-01T12:00:00Z"
//!         }
//!     } }
//!   ]
//! }
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// A timezone-aware instant as written in the source document.
///
/// The offset from the source text is kept so output can be rendered in the
/// same local time the export recorded.
pub type Timestamp = DateTime<FixedOffset>;

const NANOS_PER_HOUR: i64 = 3_600_000_000_000;

/// `0001-01-01T00:00:00Z`, the value of any timestamp the export leaves out.
pub fn zero_instant() -> Timestamp {
    let midnight = NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc).fixed_offset()
}

/// Decode `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Timestamp>::deserialize(deserializer)?.unwrap_or_else(zero_instant))
}

// ============================================================================
// Document
// ============================================================================

/// Root of one decoded timeline file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimelineDocument {
    /// Timeline entries in document order.
    #[serde(
        rename = "timelineObjects",
        default,
        deserialize_with = "null_as_default"
    )]
    pub timeline_objects: Vec<TimelineEntry>,
}

impl TimelineDocument {
    /// Iterate the place visits in document order, skipping other entries.
    pub fn visits(&self) -> impl Iterator<Item = &Visit> {
        self.timeline_objects.iter().filter_map(TimelineEntry::as_visit)
    }

    /// Consume the document, keeping only its place visits.
    pub fn into_visits(self) -> Vec<Visit> {
        self.timeline_objects
            .into_iter()
            .filter_map(TimelineEntry::into_visit)
            .collect()
    }
}

// ============================================================================
// Entries
// ============================================================================

/// One element of the `timelineObjects` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Option<RawEntry>")]
pub enum TimelineEntry {
    /// A stay at a place (`placeVisit`).
    PlaceVisit(Visit),
    /// Movement between places (`activitySegment`). Its payload is not read.
    ActivitySegment,
    /// Any other event kind, or a `null` element.
    Other,
}

impl TimelineEntry {
    pub fn as_visit(&self) -> Option<&Visit> {
        match self {
            TimelineEntry::PlaceVisit(visit) => Some(visit),
            _ => None,
        }
    }

    pub fn into_visit(self) -> Option<Visit> {
        match self {
            TimelineEntry::PlaceVisit(visit) => Some(visit),
            _ => None,
        }
    }
}

/// Wire shape of an entry: every event kind is an optional key.
#[derive(Deserialize)]
struct RawEntry {
    #[serde(rename = "placeVisit")]
    place_visit: Option<Visit>,
    #[serde(rename = "activitySegment")]
    activity_segment: Option<IgnoredAny>,
}

impl From<Option<RawEntry>> for TimelineEntry {
    fn from(raw: Option<RawEntry>) -> Self {
        match raw {
            Some(RawEntry {
                place_visit: Some(visit),
                ..
            }) => TimelineEntry::PlaceVisit(visit),
            Some(RawEntry {
                activity_segment: Some(_),
                ..
            }) => TimelineEntry::ActivitySegment,
            _ => TimelineEntry::Other,
        }
    }
}

// ============================================================================
// Visits
// ============================================================================

/// A recorded stay at a place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Visit {
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: VisitDuration,
}

impl Visit {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        start: Timestamp,
        end: Timestamp,
    ) -> Self {
        Self {
            location: Location {
                name: name.into(),
                address: address.into(),
            },
            duration: VisitDuration { start, end },
        }
    }

    pub fn start(&self) -> Timestamp {
        self.duration.start
    }

    pub fn end(&self) -> Timestamp {
        self.duration.end
    }

    /// Length of the stay. Negative when the export has `end < start`.
    pub fn elapsed(&self) -> TimeDelta {
        self.duration.end - self.duration.start
    }

    /// Length of the stay in fractional hours.
    ///
    /// The span is counted in `i64` nanoseconds and saturates at roughly
    /// ±292 years (±2562047.788015 hours), which a zero timestamp on one
    /// side will hit.
    pub fn duration_hours(&self) -> f64 {
        let nanos = self.elapsed().num_nanoseconds().unwrap_or(
            if self.duration.end > self.duration.start {
                i64::MAX
            } else {
                i64::MIN
            },
        );
        let hours = nanos / NANOS_PER_HOUR;
        let rest = nanos % NANOS_PER_HOUR;
        hours as f64 + rest as f64 / NANOS_PER_HOUR as f64
    }
}

/// Human-readable place description. Either field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

/// Start and end of a stay.
///
/// A missing or `null` timestamp decodes to [`zero_instant`]. Older exports
/// carry `startTimestampMs` instead, so their visits start at the zero
/// instant and fall outside every date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VisitDuration {
    #[serde(
        rename = "startTimestamp",
        default = "zero_instant",
        deserialize_with = "null_as_zero"
    )]
    pub start: Timestamp,
    #[serde(
        rename = "endTimestamp",
        default = "zero_instant",
        deserialize_with = "null_as_zero"
    )]
    pub end: Timestamp,
}

impl Default for VisitDuration {
    fn default() -> Self {
        Self {
            start: zero_instant(),
            end: zero_instant(),
        }
    }
}
