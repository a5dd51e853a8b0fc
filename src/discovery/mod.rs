//! Walks file-system trees and collects the contents of accepted files.
//!
//! The walk is single-threaded, synchronous and depth-first. Every node goes
//! through the same steps: the visited-set guard, the symlink check,
//! relativization against the base directory, exclusion rules, and then
//! either descent (directories) or the extension filter and emission (files).
//! Nothing a single node does can abort the walk.
use crate::core_types::{TraversalRequest, VisitedSet};
use crate::filtering::{ExclusionRules, GitignoreCache};
use crate::fs::{FileSystem, LocalFs};
use crate::output::OutputBuffer;
use log::debug;

mod walker;

use walker::Walk;

/// A collection session: a file-system source plus the gitignore cache shared
/// by every traversal run through it.
///
/// Each [`Collector::collect`] call gets its own visited set and output
/// buffer, so one `Collector` can serve concurrent calls. Only the gitignore
/// cache is shared.
///
/// # Examples
///
/// ```
/// use content_collector::{Collector, TraversalRequest};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.txt"), "hi").unwrap();
/// fs::create_dir(dir.path().join("build")).unwrap();
/// fs::write(dir.path().join("build/x.txt"), "ignored").unwrap();
///
/// let request = TraversalRequest::new(dir.path(), "proj")
///     .with_roots(vec![dir.path().to_path_buf()]);
/// let output = Collector::new().collect(&request);
///
/// assert_eq!(output, "Path: proj/a.txt\nhi\n---\n");
/// ```
#[derive(Debug, Default)]
pub struct Collector<F: FileSystem = LocalFs> {
    fs: F,
    gitignore_cache: GitignoreCache,
}

impl Collector<LocalFs> {
    /// Creates a session over the local disk with an empty cache.
    pub fn new() -> Self {
        Self::with_fs(LocalFs)
    }
}

impl<F: FileSystem> Collector<F> {
    /// Creates a session over a custom [`FileSystem`].
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            gitignore_cache: GitignoreCache::new(),
        }
    }

    /// The gitignore cache used by this session.
    pub fn gitignore_cache(&self) -> &GitignoreCache {
        &self.gitignore_cache
    }

    /// Walks every root of `request` and returns the concatenated file blocks.
    ///
    /// Roots share one visited set, so a path reachable from several roots is
    /// emitted once. The result is untrimmed and may be empty.
    pub fn collect(&self, request: &TraversalRequest) -> String {
        let rules = ExclusionRules::for_request(request, &self.gitignore_cache);
        let mut walk = Walk {
            fs: &self.fs,
            request,
            rules: &rules,
            visited: VisitedSet::new(),
            output: OutputBuffer::new(),
        };

        for root in &request.roots {
            walk.visit(root);
        }

        debug!(
            "Traversal complete. Visited {} node(s), emitted {} file(s).",
            walk.visited.len(),
            walk.output.len()
        );
        walk.output.into_string()
    }
}
