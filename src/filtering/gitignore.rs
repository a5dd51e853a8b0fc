// src/filtering/gitignore.rs

//! Loads `.gitignore` patterns for a base directory and caches them.
//!
//! Every `.gitignore` found under the base directory contributes its lines to
//! one flat set. Lines are prefixed with the directory the file lives in, so
//! `foo` inside `sub/.gitignore` becomes `sub/foo`, while `/bar` in the same
//! file becomes the base-anchored `bar`. Directory scoping beyond that prefix
//! is not kept.

use super::path::{normalize_separators, relativize};
use crate::constants::GITIGNORE_FILE_NAME;
use log::{debug, trace, warn};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};
use walkdir::WalkDir;

/// Flat set of normalized gitignore patterns for one base directory.
pub type GitignorePatterns = HashSet<String>;

/// Scans `base_directory` for `.gitignore` files and returns their patterns.
///
/// Unreadable files and walk errors are logged and skipped.
pub fn load_gitignore_patterns(base_directory: &Path) -> GitignorePatterns {
    let mut patterns = GitignorePatterns::new();

    let gitignore_files = WalkDir::new(base_directory)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping entry while scanning for .gitignore files: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == GITIGNORE_FILE_NAME);

    for entry in gitignore_files {
        let prefix = match entry
            .path()
            .parent()
            .map(|dir| relativize(base_directory, dir))
        {
            Some(Ok(dir)) if dir.is_empty() => String::new(),
            Some(Ok(dir)) => format!("{}/", dir),
            Some(Err(e)) => {
                warn!("Ignoring {}: {}", entry.path().display(), e);
                continue;
            }
            None => String::new(),
        };

        let content = match fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read {}: {}", entry.path().display(), e);
                continue;
            }
        };

        let before = patterns.len();
        patterns.extend(parse_gitignore(&content, &prefix));
        trace!(
            "Loaded {} pattern(s) from {}",
            patterns.len() - before,
            entry.path().display()
        );
    }

    debug!(
        "Loaded {} gitignore pattern(s) under {}",
        patterns.len(),
        base_directory.display()
    );
    patterns
}

/// Turns the lines of one `.gitignore` file into prefixed patterns.
///
/// `dir_prefix` is the containing directory relative to the base, with a
/// trailing `/`, or empty for the base itself.
pub fn parse_gitignore(content: &str, dir_prefix: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.strip_prefix('/') {
            Some(anchored) => normalize_separators(anchored),
            None => normalize_separators(&format!("{}{}", dir_prefix, line)),
        })
        .collect()
}

/// Caches gitignore patterns per base directory.
///
/// Entries are loaded on first use and kept until [`GitignoreCache::invalidate`]
/// or [`GitignoreCache::clear`] is called. Concurrent first use of the same key
/// may scan twice, but only the first inserted set is kept and returned.
#[derive(Debug, Default)]
pub struct GitignoreCache {
    entries: RwLock<HashMap<String, Arc<GitignorePatterns>>>,
}

impl GitignoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the patterns for `base_directory`, scanning it if not cached yet.
    pub fn get_or_load(&self, base_directory: &Path) -> Arc<GitignorePatterns> {
        let key = cache_key(base_directory);

        if let Some(patterns) = self.read_entries().get(&key) {
            trace!("Gitignore cache hit for {}", key);
            return Arc::clone(patterns);
        }

        debug!("Gitignore cache miss for {}, scanning", key);
        let loaded = Arc::new(load_gitignore_patterns(base_directory));

        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(entries.entry(key).or_insert(loaded))
    }

    /// Drops the cached patterns of one base directory.
    pub fn invalidate(&self, base_directory: &Path) -> bool {
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.remove(&cache_key(base_directory)).is_some()
    }

    pub fn clear(&self) {
        match self.entries.write() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<GitignorePatterns>>> {
        match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn cache_key(base_directory: &Path) -> String {
    normalize_separators(&base_directory.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let content = "# build output\n\n   \n*.log\n  tmp  \n";
        let patterns = parse_gitignore(content, "");
        assert_eq!(patterns, vec!["*.log".to_string(), "tmp".to_string()]);
    }

    #[test]
    fn test_parse_prefixes_relative_lines() {
        let patterns = parse_gitignore("foo\n/bar\nbaz\\qux\n", "sub/");
        assert_eq!(
            patterns,
            vec![
                "sub/foo".to_string(),
                "bar".to_string(),
                "sub/baz/qux".to_string()
            ]
        );
    }

    #[test]
    fn test_load_collects_nested_gitignores() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gitignore"), "*.log\n")?;
        fs::create_dir_all(temp.path().join("sub/deeper"))?;
        fs::write(temp.path().join("sub/.gitignore"), "foo\n/bar\n")?;
        fs::write(temp.path().join("sub/deeper/.gitignore"), "# only a comment\ncache\n")?;

        let patterns = load_gitignore_patterns(temp.path());

        let mut sorted: Vec<_> = patterns.into_iter().collect();
        sorted.sort();
        assert_eq!(sorted, vec!["*.log", "bar", "sub/deeper/cache", "sub/foo"]);
        Ok(())
    }

    #[test]
    fn test_load_without_gitignore_is_empty() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.txt"), "hi")?;
        assert!(load_gitignore_patterns(temp.path()).is_empty());
        Ok(())
    }

    #[test]
    fn test_cache_does_not_rescan() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gitignore"), "first\n")?;

        let cache = GitignoreCache::new();
        let first = cache.get_or_load(temp.path());
        assert!(first.contains("first"));

        // The cached set wins until invalidated.
        fs::write(temp.path().join(".gitignore"), "second\n")?;
        let again = cache.get_or_load(temp.path());
        assert!(Arc::ptr_eq(&first, &again));
        assert!(!again.contains("second"));

        assert!(cache.invalidate(temp.path()));
        let fresh = cache.get_or_load(temp.path());
        assert!(fresh.contains("second"));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }

    #[test]
    fn test_cache_concurrent_population_returns_same_set() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gitignore"), "*.tmp\nsecret\n")?;
        let cache = Arc::new(GitignoreCache::new());
        let base = temp.path().to_path_buf();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let base = base.clone();
                thread::spawn(move || cache.get_or_load(&base))
            })
            .collect();

        let results: Vec<Arc<GitignorePatterns>> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();

        for result in &results {
            assert!(Arc::ptr_eq(result, &results[0]));
        }
        assert_eq!(cache.len(), 1);
        Ok(())
    }
}
