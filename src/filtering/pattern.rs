// src/filtering/pattern.rs

use super::path::normalize_separators;

/// Checks a normalized relative path against one gitignore-style pattern.
///
/// Only a small wildcard subset is understood:
///
/// * `*text*` matches when the path contains `text`.
/// * `*text` matches when the path ends with `text`.
/// * `text*` matches when the path starts with `text`.
/// * `text` matches the path itself or anything below it (`text/...`).
///
/// There is no support for `**`, character classes, `?` or negation (`!`).
/// A pattern using them is compared literally and will usually never match.
/// Backslashes in the pattern are read as `/`.
///
/// # Examples
///
/// ```
/// use content_collector::filtering::pattern_matches;
///
/// assert!(pattern_matches("logs/app.log", "*.log"));
/// assert!(pattern_matches("sub/foo/bar.txt", "sub/foo"));
/// assert!(!pattern_matches("sub/foobar", "sub/foo"));
/// ```
pub fn pattern_matches(relative_path: &str, pattern: &str) -> bool {
    let pattern = normalize_separators(pattern);
    let leading = pattern.starts_with('*');
    let trailing = pattern.ends_with('*');

    match (leading, trailing) {
        (true, true) => {
            // A lone `*` has an empty middle and matches everything.
            let middle = if pattern.len() >= 2 {
                &pattern[1..pattern.len() - 1]
            } else {
                ""
            };
            relative_path.contains(middle)
        }
        (true, false) => relative_path.ends_with(&pattern[1..]),
        (false, true) => relative_path.starts_with(&pattern[..pattern.len() - 1]),
        (false, false) => {
            relative_path == pattern
                || relative_path
                    .strip_prefix(pattern.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        }
    }
}
