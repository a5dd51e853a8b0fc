//! Defines the `Config` struct and related types for application configuration.
//!
//! This module turns command-line input (optionally seeded by a stored preset)
//! into a validated [`TraversalRequest`] plus an output destination.

use crate::core_types::TraversalRequest;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
pub use presets::{Preset, PresetStore};
mod builder;
pub mod parsing;
pub mod path_resolve;
pub mod presets;
mod validation;

/// Everything one run of the binary needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The traversal parameters.
    pub request: TraversalRequest,
    /// Where the collected text goes.
    pub output_destination: OutputDestination,
}

/// Represents the destination for the generated output.
#[derive(Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Write to standard output.
    Stdout,
    /// Write to the specified file path.
    File(PathBuf),
}
