// src/constants.rs

/// Top-level directory names that are always skipped.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    ".idea",
    ".gradle",
    "node_modules",
    "build",
    "out",
    "target",
    "dist",
    "generated",
    "venv",
];

/// Name of the files scanned for ignore patterns.
pub const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Prefix of the header line written before each file's content.
pub const PATH_HEADER_PREFIX: &str = "Path: ";

/// Line written after each file block.
pub const BLOCK_SEPARATOR: &str = "---";

/// Prefix of the inline marker written in place of unreadable content.
pub const READ_ERROR_PREFIX: &str = "[ERROR] Could not read";

/// Label used when the base directory has no usable final component.
pub const DEFAULT_PROJECT_LABEL: &str = "project";

/// Name used for freshly created presets.
pub const NEW_PRESET_NAME: &str = "New preset";

/// File name of the presets store inside the config directory.
pub const PRESETS_FILE_NAME: &str = "presets.json";
