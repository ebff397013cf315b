/*!
 * Common test utilities for the fanyi test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Inputs that tend to break naive string templating
pub const AWKWARD_INPUTS: &[&str] = &[
    "",
    "你好",
    "He said \"hi\" and left.",
    "{\"translation\": \"fake\"}",
    "{text} {language}",
    "line one\nline two\r\nline three",
    "```json\n{}\n```",
    "$& $1 \\n \\",
    "  leading and trailing spaces  ",
    "emoji 😀 and IPA /ˈhɛloʊ/",
];

/// Route library logging to the test harness
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}
