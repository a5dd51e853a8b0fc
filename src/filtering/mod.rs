// src/filtering/mod.rs

//! Provides standalone functions for path normalization and exclusion logic.
//!
//! These are used by the traversal engine to decide which nodes are pruned and
//! which files are emitted. They are exposed publicly so the rules can be
//! checked on their own.

mod exclusion;
mod extension;
mod gitignore;
mod path;
mod pattern;

pub use exclusion::{should_skip, ExclusionRules, DEFAULT_EXCLUDE_SET};
pub use extension::passes_extension_filter;
pub use gitignore::{load_gitignore_patterns, parse_gitignore, GitignoreCache, GitignorePatterns};
pub use path::{normalize_separators, relativize};
pub use pattern::pattern_matches;
