// src/config/parsing.rs

/// Normalizes extension entries: trims, drops a leading `.`, lowercases and
/// removes empties. Each entry may itself be a comma-separated list.
///
/// `["rs, .TOML", ""]` becomes `["rs", "toml"]`.
pub fn normalize_extensions<I, S>(exts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    exts.into_iter()
        .flat_map(|entry| {
            entry
                .as_ref()
                .split(',')
                .map(|s| {
                    let s = s.trim();
                    s.strip_prefix('.').unwrap_or(s).to_lowercase()
                })
                .collect::<Vec<_>>()
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits a newline-separated exclude list, trimming entries and dropping
/// blank lines.
pub fn split_exclude_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims exclude entries given one per argument and drops blank ones.
pub fn normalize_excludes<I, S>(excludes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    excludes
        .into_iter()
        .flat_map(|e| split_exclude_list(e.as_ref()))
        .collect()
}
