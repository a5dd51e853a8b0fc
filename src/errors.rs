//! Defines application-specific error types.
//!
//! Per-file conditions met during a traversal never reach these types: they
//! are either skipped silently or rendered inline in the output. The variants
//! here cover caller-level problems such as a bad base directory, an unknown
//! preset or an unwritable output file.

use std::path::Path;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by `content_collector`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A node could not be expressed relative to the base directory.
    #[error("Path '{target}' is not under base directory '{base}'")]
    NotUnderBase {
        /// The base directory used for relativization.
        base: String,
        /// The node that fell outside of it.
        target: String,
    },

    /// Invalid configuration settings or combinations.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Preset lookup or (de)serialization failure.
    #[error(transparent)]
    Preset(#[from] PresetError),

    /// The traversal produced no output at all.
    #[error("No files found matching the specified criteria.")]
    NoFilesFound,
}

/// Errors raised while building a [`crate::config::Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option has a value that cannot be used.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The option name, as shown on the command line.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A path could not be resolved to an absolute location.
    #[error("Failed to resolve path '{path}': {source}")]
    InvalidPath {
        /// The path as given by the caller.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the preset store.
#[derive(Error, Debug)]
pub enum PresetError {
    /// No preset with this name exists.
    #[error("Preset '{0}' not found")]
    NotFound(String),

    /// A preset document could not be parsed.
    #[error("Could not parse preset: {0}")]
    Parse(#[source] serde_json::Error),

    /// The preset list could not be serialized.
    #[error("Could not serialize presets: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
