//! Unit tests for the timeline parser

use super::helpers::load_fixture;

use chrono::DateTime;
use placevisits::timeline::{TimelineDocument, TimelineEntry};
use placevisits::parse_visits;

#[test]
fn fixture_document_entries() {
    let doc = TimelineDocument::parse_str(&load_fixture("2022_MARCH.json")).unwrap();

    assert_eq!(doc.timeline_objects.len(), 4);
    assert_eq!(doc.timeline_objects[0], TimelineEntry::ActivitySegment);
    assert_eq!(doc.visits().count(), 3);
}

#[test]
fn fixture_visits_in_document_order() {
    let content = load_fixture("2022_MARCH.json");
    let visits = parse_visits(content.as_bytes()).unwrap();

    let names: Vec<_> = visits.iter().map(|v| v.location.name.as_str()).collect();
    assert_eq!(names, vec!["Cafe", "Joe's \"Diner\"", ""]);
    assert_eq!(visits[2].location.address, "Unnamed Lane");
}

#[test]
fn fixture_timestamps_keep_offsets() {
    let content = load_fixture("2022_MARCH.json");
    let visits = parse_visits(content.as_bytes()).unwrap();

    let diner = &visits[1];
    assert_eq!(diner.start().offset().local_minus_utc(), 3600);
    assert_eq!(
        diner.start(),
        DateTime::parse_from_rfc3339("2022-03-14T18:15:00.512Z").unwrap()
    );
}

#[test]
fn malformed_fixture_fails() {
    let content = load_fixture("malformed.json");
    assert!(parse_visits(content.as_bytes()).is_err());
}
