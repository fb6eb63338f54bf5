//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// CSV header written before any data row.
pub const HEADER_LINE: &str = "timestart,timeend,durationHours,locationname,locationaddress";

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Timeline document with a single two-hour visit to "Cafe" on 2022-03-01.
pub fn cafe_document() -> String {
    load_fixture("cafe_visit.json")
}

/// Create a temporary export directory holding `(relative path, content)` files
pub fn temp_export_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        let path = temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create export subdirectory");
        }
        fs::write(&path, content).expect("Failed to write export file");
    }
    temp_dir
}

/// Write a zip archive named `archive_name` into `dir` with the given entries
pub fn write_zip(dir: &Path, archive_name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(archive_name);
    let file = fs::File::create(&path).expect("Failed to create zip file");
    let mut zip = zip::ZipWriter::new(file);
    let options: zip::write::FileOptions<'_, ()> = zip::write::FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (name, content) in entries {
        zip.start_file(*name, options)
            .expect("Failed to start zip entry");
        zip.write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }
    zip.finish().expect("Failed to finish zip");
    path
}
