//! `content-collector` is a library and command-line tool that concatenates the
//! text of a project's files into a single labeled buffer.
//!
//! Each accepted file becomes one block:
//!
//! ```text
//! Path: <label>/<path relative to the base directory>
//! <file content>
//! ---
//! ```
//!
//! Directories such as `.git`, `node_modules` or `target` are always skipped.
//! On top of that a traversal honors user exclude prefixes, the patterns of
//! every `.gitignore` below the base directory, and an optional extension
//! allow-list. Symbolic links are never followed and a file reachable from
//! several starting points is emitted once.
//!
//! # Example: Library Usage
//!
//! ```
//! use content_collector::{Collector, TraversalRequest};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
//! fs::write(dir.path().join("README.md"), "# Demo").unwrap();
//!
//! let request = TraversalRequest::new(dir.path(), "demo")
//!     .with_roots(vec![dir.path().join("src")])
//!     .with_extensions(["rs"]);
//!
//! let collector = Collector::new();
//! let output = collector.collect(&request);
//! assert_eq!(output, "Path: demo/src/main.rs\nfn main() {}\n---\n");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod fs;
pub mod output;
pub mod prelude;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, OutputDestination};
pub use core_types::TraversalRequest;
pub use discovery::Collector;

use crate::errors::{Error, Result};
use crate::output::{trim_trailing_newlines, writer};

/// Collects `request` with a fresh [`Collector`] over the local disk.
///
/// Gitignore patterns are loaded anew on every call. Keep a `Collector`
/// around to reuse them across calls.
pub fn collect(request: &TraversalRequest) -> String {
    Collector::new().collect(request)
}

/// Executes one command-line run: collect, trim and deliver the output.
///
/// Trailing newlines are stripped from the collected text and a single
/// newline is written after it.
///
/// # Returns
/// `Err(Error::NoFilesFound)` when no file was emitted. Nothing is written
/// in that case, so an `--output` file is left untouched.
pub fn run(config: &Config) -> Result<()> {
    run_with(&Collector::new(), config)
}

/// Like [`run`], with a caller-provided [`Collector`].
pub fn run_with<F: fs::FileSystem>(collector: &Collector<F>, config: &Config) -> Result<()> {
    let collected = collector.collect(&config.request);
    let output = trim_trailing_newlines(&collected);
    if output.is_empty() {
        return Err(Error::NoFilesFound);
    }

    let mut writer = writer::setup_output_writer(&config.output_destination)?;
    writer::write_output(&mut writer, output, &config.output_destination)
}
