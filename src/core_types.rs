//! Defines core data structures used throughout a collection run.
//!
//! `TraversalRequest` describes one call of the traversal engine and is never
//! mutated by it. `VisitedSet` is the per-call guard that keeps a node from
//! being emitted twice.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// The immutable parameters of one traversal call.
///
/// Paths are expected to be absolute; [`crate::config::ConfigBuilder`] takes
/// care of that for command-line input.
///
/// # Examples
///
/// ```
/// use content_collector::core_types::TraversalRequest;
/// use std::path::PathBuf;
///
/// let request = TraversalRequest::new("/proj", "proj")
///     .with_roots(vec![PathBuf::from("/proj/src")])
///     .with_extensions(["rs", "toml"]);
///
/// assert_eq!(request.roots.len(), 1);
/// assert!(request.extension_filter.contains("rs"));
/// assert!(request.use_gitignore);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalRequest {
    /// Starting points, visited in this order.
    pub roots: Vec<PathBuf>,
    /// Lowercase extensions to accept. Empty accepts every file.
    pub extension_filter: BTreeSet<String>,
    /// Path prefixes (relative to the base directory) to skip.
    pub user_excludes: Vec<String>,
    /// Whether `.gitignore` patterns found under the base directory apply.
    pub use_gitignore: bool,
    /// The directory every node is relativized against.
    pub base_directory: PathBuf,
    /// Top-level prefix of every displayed path.
    pub project_label: String,
    /// Sort each directory's children by name before descending.
    pub sort_entries: bool,
}

impl TraversalRequest {
    /// Creates a request with no roots, no filters and gitignore enabled.
    pub fn new(base_directory: impl Into<PathBuf>, project_label: impl Into<String>) -> Self {
        Self {
            roots: Vec::new(),
            extension_filter: BTreeSet::new(),
            user_excludes: Vec::new(),
            use_gitignore: true,
            base_directory: base_directory.into(),
            project_label: project_label.into(),
            sort_entries: false,
        }
    }

    pub fn with_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.roots = roots;
        self
    }

    /// Adds extensions to the filter, lowercased.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extension_filter
            .extend(extensions.into_iter().map(|e| e.as_ref().to_lowercase()));
        self
    }

    pub fn with_user_excludes(mut self, excludes: Vec<String>) -> Self {
        self.user_excludes = excludes;
        self
    }

    pub fn with_gitignore(mut self, use_gitignore: bool) -> Self {
        self.use_gitignore = use_gitignore;
        self
    }

    pub fn with_sorted_entries(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }
}

/// Absolute paths already seen during one traversal call.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<PathBuf>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `path` as visited. Returns `false` if it had been visited before.
    pub fn mark(&mut self, path: &Path) -> bool {
        self.seen.insert(path.to_path_buf())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
