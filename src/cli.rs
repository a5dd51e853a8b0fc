// src/cli.rs

use clap::{Parser, Subcommand};

/// Concatenates the text of a project's files into one labeled buffer.
///
/// content-collector walks the given paths below a base directory, skips
/// default noise directories (`.git`, `node_modules`, `target`, ...), user
/// exclude prefixes and `.gitignore` patterns, and prints every remaining
/// file as a `Path: <label>/<relative path>` header, its content, and a `---`
/// separator. The result is meant to be pasted into a prompt or a document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Files or directories to collect. Defaults to the base directory.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Directory that output paths and exclusion rules are relative to.
    /// Defaults to the current directory.
    #[arg(short = 'b', long = "base", value_name = "DIR")]
    pub base_directory: Option<String>,

    /// Top-level prefix of every output path. Defaults to the base directory's name.
    #[arg(short = 'l', long, value_name = "NAME")]
    pub label: Option<String>,

    // --- Filtering Options ---
    /// Include only files with these extensions (case-insensitive, repeatable, comma-separated).
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Skip paths starting with these prefixes, relative to the base directory (repeatable).
    #[arg(short = 'x', long = "exclude", value_name = "PREFIX", num_args = 1..)]
    pub excludes: Option<Vec<String>>,

    /// Do not apply patterns from .gitignore files under the base directory.
    #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
    pub no_gitignore: bool,

    /// Visit directory entries in name order instead of filesystem order.
    #[arg(short = 's', long, action = clap::ArgAction::SetTrue)]
    pub sort: bool,

    // --- Presets ---
    /// Start from the settings of a stored preset. --ext and --exclude add to it,
    /// --no-gitignore overrides it.
    #[arg(short = 'P', long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Presets file to use instead of the one in the user config directory.
    #[arg(long, value_name = "FILE", global = true)]
    pub presets_file: Option<String>,

    // --- Output Destination ---
    /// Write output to the specified file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,
}

/// Subcommands of the binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage stored presets.
    Presets {
        #[command(subcommand)]
        action: PresetAction,
    },
}

/// Operations on the presets store.
#[derive(Subcommand, Debug)]
pub enum PresetAction {
    /// List stored presets.
    List,
    /// Show one preset as JSON.
    Show {
        name: String,
    },
    /// Create or replace a preset.
    Add {
        name: String,
        /// Comma-separated extensions, e.g. "rs,toml".
        #[arg(short = 'e', long = "ext", value_name = "EXTS", default_value = "")]
        extensions: String,
        /// Exclude prefixes (repeatable).
        #[arg(short = 'x', long = "exclude", value_name = "PREFIX", num_args = 1..)]
        excludes: Vec<String>,
        #[arg(short = 'd', long, value_name = "TEXT", default_value = "")]
        description: String,
        /// Store the preset with .gitignore patterns disabled.
        #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
        no_gitignore: bool,
    },
    /// Create an empty preset under a fresh name and print the name.
    New,
    /// Rename a preset, keeping its settings.
    Rename {
        from: String,
        to: String,
    },
    /// Delete a preset.
    Remove {
        name: String,
    },
    /// Print a preset as shareable JSON.
    Export {
        name: String,
    },
    /// Store a preset from JSON (argument, or stdin when omitted).
    Import {
        json: Option<String>,
    },
}
