// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn collector_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("content-collector"))
}

/// Creates a file (and its parent directories) below `dir_path`.
#[allow(dead_code)]
pub fn create_file(dir_path: &Path, relative_path: &str, content: &str) -> std::io::Result<()> {
    let file_path = dir_path.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)
}
