// src/filtering/extension.rs

use std::collections::BTreeSet;
use std::path::Path;

/// Checks if a file passes the extension allow-list.
///
/// An empty `extension_filter` accepts every file. Otherwise the file must have
/// an extension whose lowercase form is in the set; files without one are
/// rejected. The set itself is expected to hold lowercase entries.
///
/// The extension is the text after the last `.` of the file name, so a
/// dotfile such as `.env` has the extension `env`.
///
/// # Examples
///
/// ```
/// use content_collector::filtering::passes_extension_filter;
/// use std::collections::BTreeSet;
/// use std::path::Path;
///
/// let md_only: BTreeSet<String> = ["md".to_string()].into_iter().collect();
/// assert!(passes_extension_filter(Path::new("README.MD"), &md_only));
/// assert!(!passes_extension_filter(Path::new("notes.txt"), &md_only));
/// assert!(passes_extension_filter(Path::new("Makefile"), &BTreeSet::new()));
///
/// let env_only: BTreeSet<String> = ["env".to_string()].into_iter().collect();
/// assert!(passes_extension_filter(Path::new(".env"), &env_only));
/// ```
pub fn passes_extension_filter(path: &Path, extension_filter: &BTreeSet<String>) -> bool {
    if extension_filter.is_empty() {
        return true;
    }

    file_extension(path)
        .map(|s| s.to_lowercase()) // Compare case-insensitively
        .is_some_and(|ext| extension_filter.contains(&ext))
}

/// Text after the last `.` of the file name. Unlike [`Path::extension`],
/// a leading dot counts.
fn file_extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.rfind('.').map(|dot| &name[dot + 1..])
}
