// src/filtering/path.rs

use crate::errors::{Error, Result};
use std::path::{Component, Path};

/// Replaces every `\` with `/`.
///
/// Exclusion rules are always authored and compared in forward-slash form,
/// whatever the host separator is.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Expresses `target` relative to `base` as a forward-slash string.
///
/// `target == base` yields an empty string. Fails with
/// [`Error::NotUnderBase`] when no relative form exists (mixed absolute and
/// relative inputs, different roots) or when the relative form would have to
/// climb out of `base` through `..`.
///
/// # Examples
///
/// ```
/// use content_collector::filtering::relativize;
/// use std::path::Path;
///
/// let rel = relativize(Path::new("/proj"), Path::new("/proj/src/main.rs")).unwrap();
/// assert_eq!(rel, "src/main.rs");
///
/// assert!(relativize(Path::new("/proj"), Path::new("/other/file.txt")).is_err());
/// ```
pub fn relativize(base: &Path, target: &Path) -> Result<String> {
    let not_under_base = || Error::NotUnderBase {
        base: base.display().to_string(),
        target: target.display().to_string(),
    };

    let relative = pathdiff::diff_paths(target, base).ok_or_else(not_under_base)?;
    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
    {
        return Err(not_under_base());
    }

    Ok(normalize_separators(&relative.to_string_lossy()))
}
