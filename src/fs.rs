//! The file-system operations the traversal engine relies on.
//!
//! The engine only needs to list children, tell links and directories apart,
//! and read raw bytes. Keeping that behind a trait lets callers plug in other
//! sources and lets tests inject read failures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A source of directory listings and file contents.
///
/// All methods take absolute paths and are blocking.
pub trait FileSystem: Send + Sync {
    /// Lists the direct children of a directory, in enumeration order.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
    /// Whether the node itself is a symbolic link (the link is not followed).
    fn is_symlink(&self, path: &Path) -> bool;
    /// Whether the node is a directory.
    fn is_dir(&self, path: &Path) -> bool;
    /// Reads the whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// [`FileSystem`] backed by the local disk through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|md| md.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|md| md.is_dir())
            .unwrap_or(false)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
