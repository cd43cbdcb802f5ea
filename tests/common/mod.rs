// Shared test helpers for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Creates an empty media directory.
pub fn setup_media_dir() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Creates a media directory containing the given (empty) files.
pub fn setup_media_dir_with(files: &[&str]) -> TempDir {
    let temp_dir = setup_media_dir();
    for name in files {
        touch(temp_dir.path(), name);
    }
    temp_dir
}

/// Creates an empty file named `name` in `dir` and returns its path.
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"").expect("Failed to create media file");
    path
}

/// Returns the file names of `paths`, in order.
pub fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

/// A fixed generation time: 2026-10-17 09:30:15.
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 17)
        .unwrap()
        .and_hms_opt(9, 30, 15)
        .unwrap()
}
