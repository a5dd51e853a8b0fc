// src/config/path_resolve.rs

use crate::constants::DEFAULT_PROJECT_LABEL;
use crate::errors::{ConfigError, Result};
use std::path::{Component, Path, PathBuf};

/// Makes `input` absolute against the current directory.
///
/// The result is normalized lexically: `.` components are dropped and each
/// `..` removes the component before it. Symlinks are left unresolved so the
/// traversal still sees and skips them.
pub fn resolve_path(input: &str) -> Result<PathBuf> {
    let absolute = std::path::absolute(input).map_err(|source| ConfigError::InvalidPath {
        path: input.to_string(),
        source,
    })?;
    Ok(fold_parent_dirs(&absolute))
}

/// Lexically removes `.` and `..` components from an absolute path.
/// `..` directly below the root stays at the root.
fn fold_parent_dirs(path: &Path) -> PathBuf {
    let mut folded = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(folded.components().next_back(), Some(Component::Normal(_))) {
                    folded.pop();
                }
            }
            other => folded.push(other.as_os_str()),
        }
    }
    folded
}

/// Derives the output label from the base directory's final component.
pub fn default_label(base_directory: &Path) -> String {
    base_directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROJECT_LABEL.to_string())
}
