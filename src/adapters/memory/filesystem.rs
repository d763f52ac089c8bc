//! In-memory filesystem adapter.
//!
//! Stands in for a virtual filesystem: it has no notion of advisory locks,
//! so the lock mode of each write is only recorded, never honored.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::ports::filesystem::{FileSystem, WriteLock};

#[derive(Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    unreadable: BTreeSet<PathBuf>,
    writes: Vec<(PathBuf, WriteLock)>,
}

/// Filesystem held entirely in memory, keyed by absolute path.
#[derive(Default)]
pub struct MemoryFileSystem {
    state: Mutex<State>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text file, replacing any previous contents.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.insert(path, contents.as_bytes());
        self
    }

    /// Adds a file with raw contents without recording a write.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: &[u8]) {
        self.lock().files.insert(path.into(), contents.to_vec());
    }

    /// Marks an existing file as unreadable; reads of it fail with `PermissionDenied`.
    pub fn deny_read(&self, path: impl Into<PathBuf>) {
        self.lock().unreadable.insert(path.into());
    }

    /// Returns the text contents of a file, if present and valid UTF-8.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.lock().files.get(path).and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    /// Returns every write performed through the port, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<(PathBuf, WriteLock)> {
        self.lock().writes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means a test panicked mid-write; the map is still usable.
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let state = self.lock();
        if state.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not readable", path.display()),
            ));
        }
        state.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write(&self, path: &Path, contents: &str, lock: WriteLock) -> io::Result<()> {
        let mut state = self.lock();
        state.files.insert(path.to_path_buf(), contents.as_bytes().to_vec());
        state.writes.push((path.to_path_buf(), lock));
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.lock().files.contains_key(path)
    }

    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let state = self.lock();
        // Deepest paths first, mirroring a child-first traversal.
        let mut files: Vec<PathBuf> = state
            .files
            .keys()
            .filter(|path| path.starts_with(root) && path.as_path() != root)
            .cloned()
            .collect();
        files.sort_by_key(|path| std::cmp::Reverse(path.components().count()));
        Ok(files)
    }
}
