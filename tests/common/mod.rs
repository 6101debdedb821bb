//! Shared integration test helpers for privfont.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::font_dir;
//! ```

#![allow(dead_code)]

use std::fs;

use privfont_fonts::testing;
use tempfile::TempDir;

/// Temp directory holding the given `(file name, bytes)` pairs.
///
/// Keep the `TempDir` alive until the provider has been read.
pub fn font_dir(files: &[(&str, Vec<u8>)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for (file_name, data) in files {
        fs::write(temp_dir.path().join(file_name), data).expect("Failed to write font file");
    }
    temp_dir
}

/// Regular, bold and italic faces of `family`, named like a shipped font set.
pub fn family_files(family: &str) -> Vec<(String, Vec<u8>)> {
    vec![
        (format!("{family}-Bold.ttf"), testing::bold_font(family)),
        (format!("{family}-Italic.ttf"), testing::italic_font(family)),
        (format!("{family}-Regular.ttf"), testing::regular_font(family)),
    ]
}
