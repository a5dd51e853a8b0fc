// src/config/validation.rs

use crate::errors::{ConfigError, Result};
use std::path::Path;

/// Checks that the base directory exists and is a directory.
pub(super) fn validate_base_directory(base_directory: &Path) -> Result<()> {
    if !base_directory.is_dir() {
        return Err(ConfigError::InvalidValue {
            option: "--base".to_string(),
            reason: format!("'{}' is not a directory", base_directory.display()),
        }
        .into());
    }
    Ok(())
}

/// Checks that the label can serve as the first segment of every output path.
pub(super) fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            option: "--label".to_string(),
            reason: "must not be empty".to_string(),
        }
        .into());
    }
    if label.contains('/') || label.contains('\\') {
        return Err(ConfigError::InvalidValue {
            option: "--label".to_string(),
            reason: "must not contain path separators".to_string(),
        }
        .into());
    }
    Ok(())
}
