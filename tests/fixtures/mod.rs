//! Test fixtures for report pipeline tests

use std::path::{Path, PathBuf};

/// Failure collection as a bare JSON array
pub fn failures_json_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/failures.json")
}

/// Failure collection in the generated script form
pub fn failures_script_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/failures.js")
}
