//! Live filesystem adapter using `std::fs`, `walkdir` and `fs2`.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::ports::filesystem::{FileSystem, WriteLock};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str, lock: WriteLock) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        match lock {
            WriteLock::None => std::fs::write(path, contents),
            WriteLock::Exclusive => {
                // Truncate only once the lock is held.
                let mut file =
                    OpenOptions::new().write(true).create(true).truncate(false).open(path)?;
                fs2::FileExt::lock_exclusive(&file)?;
                file.set_len(0)?;
                file.write_all(contents.as_bytes())?;
                file.flush()
            }
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).contents_first(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_dangling_link(&err) => {
                    trace!(path = ?err.path(), "skipping dangling symlink");
                    continue;
                }
                Err(err) => return Err(io::Error::from(err)),
            };
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// A link whose target is gone fails its metadata lookup with `NotFound`.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.path().is_some()
        && err.io_error().is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}
