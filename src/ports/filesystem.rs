//! Filesystem port for file I/O operations.

use std::io;
use std::path::{Path, PathBuf};

/// Locking discipline for a full-file overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteLock {
    /// Hold an advisory exclusive lock on the file while it is rewritten.
    #[default]
    Exclusive,
    /// Write without locking, for storage that cannot honor advisory locks.
    None,
}

/// Provides filesystem access for the discovery pipeline.
///
/// Abstracting the filesystem lets the pipeline run against an in-memory
/// tree in tests, the same way it runs against the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replaces the contents of a file, creating it and its parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, lock failure).
    fn write(&self, path: &Path, contents: &str, lock: WriteLock) -> io::Result<()>;

    /// Returns `true` if `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Recursively lists every regular file below `root`, following symlinks.
    ///
    /// Entries come back child-first; no order is promised between siblings.
    /// A missing `root` yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry below an existing `root` cannot be read.
    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>>;
}
