//! Shared fixtures for the end-to-end suite.

use std::fs;
use tempfile::TempDir;

/// Folder with `a.txt` (2 lines, 6 words) and `b.txt` (1 line, 4 words).
pub fn two_file_corpus() -> TempDir {
    folder_with(&[
        ("a.txt", "The cat sat.\nA dog ran.\n"),
        ("b.txt", "Cats and dogs play.\n"),
    ])
}

/// Folder containing the given (name, contents) files.
pub fn folder_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}
