// src/filtering/exclusion.rs

use super::gitignore::{GitignoreCache, GitignorePatterns};
use super::path::normalize_separators;
use super::pattern::pattern_matches;
use crate::constants::DEFAULT_EXCLUDES;
use crate::core_types::TraversalRequest;
use log::trace;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::instrument;

/// The fixed set of top-level directory names that are always skipped.
pub static DEFAULT_EXCLUDE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DEFAULT_EXCLUDES.iter().copied().collect());

/// Decides whether a relative path should be skipped.
///
/// The checks run in this order and the first hit wins:
///
/// 1.  The first path segment is in `default_excludes`. Only the top-level
///     segment is inspected, so a nested `src/build` is not caught here.
/// 2.  The path starts with one of `user_excludes` (backslashes read as `/`).
///     This is a plain prefix test: `doc` also skips `docs/`. Empty entries
///     are ignored.
/// 3.  `gitignore` is given and one of its patterns matches (see
///     [`super::pattern_matches`]).
///
/// All three are "skip" rules; none can force a path back in.
///
/// # Examples
///
/// ```
/// use content_collector::filtering::{should_skip, DEFAULT_EXCLUDE_SET};
///
/// let excludes = vec!["docs/".to_string()];
/// assert!(should_skip("node_modules/x.js", &excludes, &DEFAULT_EXCLUDE_SET, None));
/// assert!(should_skip("docs/guide.md", &excludes, &DEFAULT_EXCLUDE_SET, None));
/// assert!(!should_skip("src/build/x.rs", &excludes, &DEFAULT_EXCLUDE_SET, None));
/// ```
#[instrument(level = "trace", skip(user_excludes, default_excludes, gitignore))]
pub fn should_skip(
    relative_path: &str,
    user_excludes: &[String],
    default_excludes: &HashSet<&str>,
    gitignore: Option<&GitignorePatterns>,
) -> bool {
    let first_segment = relative_path.split('/').next().unwrap_or(relative_path);
    if default_excludes.contains(first_segment) {
        trace!("'{}' is under default-excluded '{}'", relative_path, first_segment);
        return true;
    }

    if user_excludes
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .any(|prefix| relative_path.starts_with(&normalize_separators(prefix)))
    {
        trace!("'{}' matches a user exclude", relative_path);
        return true;
    }

    if let Some(patterns) = gitignore {
        if let Some(pattern) = patterns.iter().find(|p| pattern_matches(relative_path, p)) {
            trace!("'{}' matches gitignore pattern '{}'", relative_path, pattern);
            return true;
        }
    }

    false
}

/// The exclusion rules of one traversal, resolved once up front.
///
/// User excludes are normalized here and the gitignore set is fetched from
/// the cache only when the request enables it.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    user_excludes: Vec<String>,
    gitignore: Option<Arc<GitignorePatterns>>,
}

impl ExclusionRules {
    pub fn new(user_excludes: &[String], gitignore: Option<Arc<GitignorePatterns>>) -> Self {
        Self {
            user_excludes: user_excludes
                .iter()
                .map(|e| normalize_separators(e))
                .filter(|e| !e.is_empty())
                .collect(),
            gitignore,
        }
    }

    /// Builds the rules for `request`, loading gitignore patterns through `cache`.
    pub fn for_request(request: &TraversalRequest, cache: &GitignoreCache) -> Self {
        let gitignore = request
            .use_gitignore
            .then(|| cache.get_or_load(&request.base_directory));
        Self::new(&request.user_excludes, gitignore)
    }

    pub fn should_skip(&self, relative_path: &str) -> bool {
        should_skip(
            relative_path,
            &self.user_excludes,
            &DEFAULT_EXCLUDE_SET,
            self.gitignore.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> GitignorePatterns {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_excludes_always_win() {
        for name in DEFAULT_EXCLUDES {
            let top = name.to_string();
            let nested = format!("{}/deep/file.txt", name);
            assert!(should_skip(&top, &[], &DEFAULT_EXCLUDE_SET, None));
            assert!(should_skip(&nested, &[], &DEFAULT_EXCLUDE_SET, None));
            assert!(should_skip(
                &nested,
                &["unrelated".to_string()],
                &DEFAULT_EXCLUDE_SET,
                Some(&patterns(&["other"]))
            ));
        }
    }

    #[test]
    fn test_default_excludes_only_check_top_segment() {
        assert!(!should_skip("src/build/gen.rs", &[], &DEFAULT_EXCLUDE_SET, None));
        assert!(!should_skip("builds/x.txt", &[], &DEFAULT_EXCLUDE_SET, None));
    }

    #[test]
    fn test_user_excludes_are_plain_prefixes() {
        let excludes = vec!["doc".to_string()];
        assert!(should_skip("doc/a.md", &excludes, &DEFAULT_EXCLUDE_SET, None));
        assert!(should_skip("docs/a.md", &excludes, &DEFAULT_EXCLUDE_SET, None));
        assert!(!should_skip("src/doc.rs", &excludes, &DEFAULT_EXCLUDE_SET, None));
    }

    #[test]
    fn test_user_excludes_normalize_backslashes() {
        let excludes = vec![r"src\generated".to_string()];
        assert!(should_skip(
            "src/generated/api.rs",
            &excludes,
            &DEFAULT_EXCLUDE_SET,
            None
        ));
    }

    #[test]
    fn test_empty_user_exclude_is_ignored() {
        let excludes = vec![String::new()];
        assert!(!should_skip("src/main.rs", &excludes, &DEFAULT_EXCLUDE_SET, None));
    }

    #[test]
    fn test_gitignore_only_applies_when_given() {
        let set = patterns(&["*.log", "sub/foo"]);
        assert!(should_skip("app.log", &[], &DEFAULT_EXCLUDE_SET, Some(&set)));
        assert!(should_skip("sub/foo/x", &[], &DEFAULT_EXCLUDE_SET, Some(&set)));
        assert!(!should_skip("foo", &[], &DEFAULT_EXCLUDE_SET, Some(&set)));
        assert!(!should_skip("app.log", &[], &DEFAULT_EXCLUDE_SET, None));
    }

    #[test]
    fn test_rules_struct_matches_free_function() {
        let set = Arc::new(patterns(&["secret*"]));
        let rules = ExclusionRules::new(&[r"vendor\".to_string()], Some(set));
        assert!(rules.should_skip("target/debug"));
        assert!(rules.should_skip("vendor/lib.rs"));
        assert!(rules.should_skip("secret.txt"));
        assert!(!rules.should_skip("src/lib.rs"));
    }

    #[test]
    fn test_custom_default_set() {
        let custom: HashSet<&str> = ["third_party"].into_iter().collect();
        assert!(should_skip("third_party/x.c", &[], &custom, None));
        assert!(!should_skip("build/x.c", &[], &custom, None));
    }
}
