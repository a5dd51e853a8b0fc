//! The `content-collector` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types and functions, so a
//! single glob import is enough to build a request and collect it.
//!
//! # Example
//!
//! ```
//! use content_collector::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("notes.md"), "todo").unwrap();
//!
//! let request = TraversalRequest::new(dir.path(), "notes")
//!     .with_roots(vec![dir.path().to_path_buf()]);
//! let output = Collector::new().collect(&request);
//! assert!(output.starts_with("Path: notes/notes.md\n"));
//!
//! let config = ConfigBuilder::new()
//!     .base_directory(dir.path().to_str().unwrap())
//!     .build()?;
//! assert_eq!(config.request.roots, vec![config.request.base_directory.clone()]);
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder, OutputDestination, Preset, PresetStore};
pub use crate::core_types::{TraversalRequest, VisitedSet};
pub use crate::discovery::Collector;
pub use crate::errors::{Error, Result};
pub use crate::filtering::{
    normalize_separators, passes_extension_filter, pattern_matches, relativize, should_skip,
    ExclusionRules, GitignoreCache,
};
pub use crate::fs::{FileSystem, LocalFs};
pub use crate::output::{format_file_block, trim_trailing_newlines};
pub use crate::{collect, run};
