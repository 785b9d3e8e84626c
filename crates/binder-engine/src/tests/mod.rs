//! Shared helpers for unit tests.

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}

pub fn test_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 5, 6)
        .and_then(|d| d.and_hms_opt(7, 8, 9))
        .expect("valid test timestamp")
}
