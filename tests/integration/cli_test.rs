//! End-to-end tests for the placevisits binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{cafe_document, temp_export_dir, write_zip, HEADER_LINE};

const CAFE_ROW: &str = "2022-03-01 10:00:00,2022-03-01 12:00:00,2.000000,Cafe,123 Main St";

/// Helper to build a placevisits invocation with logging quiet
fn placevisits() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_placevisits"));
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn cafe_export() -> TempDir {
    let cafe = cafe_document();
    temp_export_dir(&[("2022_01.json", cafe.as_str())])
}

// ============================================================================
// Extraction scenarios
// ============================================================================

#[test]
fn directory_source_emits_matching_visit() {
    let export = cafe_export();

    placevisits()
        .arg("--source")
        .arg(export.path())
        .args(["--start", "2022-01-01T00:00:00Z", "--end", "2022-12-31T23:59:59Z"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", HEADER_LINE, CAFE_ROW));
}

#[test]
fn range_excluding_visit_emits_header_only() {
    let export = cafe_export();

    placevisits()
        .arg("--source")
        .arg(export.path())
        .args(["--start", "2022-03-01T10:00:00Z", "--end", "2022-12-31T23:59:59Z"])
        .assert()
        .success()
        .stdout(format!("{}\n", HEADER_LINE));
}

#[test]
fn zip_source_matches_directory_output() {
    let archive_dir = TempDir::new().unwrap();
    let cafe = cafe_document();
    let archive = write_zip(
        archive_dir.path(),
        "takeout.zip",
        &[("Takeout/Location History/2022/2022_01.json", cafe.as_str())],
    );

    placevisits()
        .arg("--source")
        .arg(&archive)
        .args(["--start", "2022-01-01T00:00:00Z", "--end", "2022-12-31T23:59:59Z"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", HEADER_LINE, CAFE_ROW));
}

#[test]
fn unsupported_extension_fails_without_output() {
    let export = temp_export_dir(&[("takeout.tar", "")]);

    placevisits()
        .arg("--source")
        .arg(export.path().join("takeout.tar"))
        .args(["--start", "2022-01-01T00:00:00Z", "--end", "2022-12-31T23:59:59Z"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Unsupported file extension"));
}

#[test]
fn malformed_file_aborts_run() {
    let cafe = cafe_document();
    let export = temp_export_dir(&[
        ("2022_01.json", cafe.as_str()),
        ("2022_02.json", "{\"timelineObjects\": [{"),
        ("2022_03.json", cafe.as_str()),
    ]);

    let assert = placevisits()
        .arg("--source")
        .arg(export.path())
        .args(["--start", "2022-01-01T00:00:00Z", "--end", "2022-12-31T23:59:59Z"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("2022_02.json"));

    // Rows from 2022_03.json must never appear.
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.matches("Cafe").count() <= 1);
}

#[test]
fn skip_malformed_continues_and_reports() {
    let cafe = cafe_document();
    let export = temp_export_dir(&[
        ("2022_01.json", cafe.as_str()),
        ("2022_02.json", "{\"timelineObjects\": [{"),
        ("2022_03.json", cafe.as_str()),
    ]);

    placevisits()
        .arg("--source")
        .arg(export.path())
        .args(["--start", "2022-01-01T00:00:00Z", "--end", "2022-12-31T23:59:59Z"])
        .arg("--skip-malformed")
        .assert()
        .success()
        .stdout(format!("{}\n{}\n{}\n", HEADER_LINE, CAFE_ROW, CAFE_ROW))
        .stderr(predicate::str::contains("Skipped 1 malformed file(s)"));
}

#[test]
fn omitted_end_selects_nothing() {
    let export = cafe_export();

    placevisits()
        .arg("--source")
        .arg(export.path())
        .args(["--start", "2022-01-01T00:00:00Z"])
        .assert()
        .success()
        .stdout(format!("{}\n", HEADER_LINE));
}

// ============================================================================
// Argument validation
// ============================================================================

#[test]
fn missing_source_flag_is_usage_error() {
    placevisits()
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("--source"));
}

#[test]
fn nonexistent_source_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    placevisits()
        .arg("--source")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Could not inspect source path"));
}

#[test]
fn malformed_start_is_usage_error() {
    let export = cafe_export();

    placevisits()
        .arg("--source")
        .arg(export.path())
        .args(["--start", "2022-01-01"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid start date"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn malformed_end_is_usage_error() {
    let export = cafe_export();

    placevisits()
        .arg("--source")
        .arg(export.path())
        .args(["--end", "tomorrow"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid end date"));
}

#[test]
fn help_exits_successfully() {
    placevisits()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("--skip-malformed"));
}
