//! Recursive listing of candidate source files.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::config::InstallerConfig;
use crate::error::{InstallerError, Result};
use crate::ports::filesystem::FileSystem;

/// File name rules for candidate sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Required extension, without the dot.
    pub extension: String,
    /// Case-insensitive marker that excludes a file when its name contains it.
    pub exclude: Option<String>,
}

impl ScanOptions {
    /// Options taken from the installer configuration.
    #[must_use]
    pub fn from_config(config: &InstallerConfig) -> Self {
        Self { extension: config.extension.clone(), exclude: config.exclude.clone() }
    }

    /// Returns `true` if a file called `name` is a candidate.
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        if name.starts_with('.') {
            return false;
        }
        let suffix = format!(".{}", self.extension);
        if !name.ends_with(&suffix) {
            return false;
        }
        match &self.exclude {
            Some(marker) => !name.to_lowercase().contains(&marker.to_lowercase()),
            None => true,
        }
    }
}

/// Lists every candidate file below `dir`.
///
/// A missing directory yields an empty list.
///
/// # Errors
///
/// Returns [`InstallerError::Walk`] if traversal below an existing directory fails.
pub fn scan_source_files(
    fs: &dyn FileSystem,
    dir: &Path,
    options: &ScanOptions,
) -> Result<Vec<PathBuf>> {
    let entries = fs
        .walk_files(dir)
        .map_err(|source| InstallerError::Walk { path: dir.to_path_buf(), source })?;
    let total = entries.len();
    let files: Vec<PathBuf> = entries
        .into_iter()
        .filter(|path| {
            let keep = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| options.accepts(name));
            if !keep {
                trace!(path = %path.display(), "skipping non-candidate file");
            }
            keep
        })
        .collect();
    debug!(dir = %dir.display(), total, candidates = files.len(), "scanned source directory");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    fn php() -> ScanOptions {
        ScanOptions { extension: "php".into(), exclude: Some(".dist.".into()) }
    }

    #[test]
    fn accepts_plain_php_files() {
        assert!(php().accepts("RouterModule.php"));
        assert!(!php().accepts("README.md"));
        assert!(!php().accepts("RouterModule.phpx"));
    }

    #[test]
    fn rejects_hidden_files() {
        assert!(!php().accepts(".RouterModule.php"));
        assert!(!php().accepts(".php"));
    }

    #[test]
    fn rejects_dist_templates_case_insensitively() {
        assert!(!php().accepts("config.dist.php"));
        assert!(!php().accepts("Config.DIST.php"));
        assert!(php().accepts("distribution.php"));
    }

    #[test]
    fn without_exclusion_dist_files_pass() {
        let options = ScanOptions { exclude: None, ..php() };
        assert!(options.accepts("config.dist.php"));
    }

    #[test]
    fn scans_nested_directories() {
        let fs = MemoryFileSystem::new()
            .with_file("/pkg/src/RouterModule.php", "")
            .with_file("/pkg/src/Http/Controller.php", "")
            .with_file("/pkg/src/config.dist.php", "")
            .with_file("/pkg/src/.hidden.php", "")
            .with_file("/pkg/src/notes.txt", "")
            .with_file("/pkg/tests/RouterTest.php", "");

        let mut files = scan_source_files(&fs, Path::new("/pkg/src"), &php()).unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![
                PathBuf::from("/pkg/src/Http/Controller.php"),
                PathBuf::from("/pkg/src/RouterModule.php"),
            ]
        );
    }

    #[test]
    fn missing_directory_is_empty() {
        let fs = MemoryFileSystem::new();
        let files = scan_source_files(&fs, Path::new("/pkg/src"), &php()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn options_follow_config() {
        let config = InstallerConfig { extension: "inc".into(), exclude: None, ..Default::default() };
        let options = ScanOptions::from_config(&config);
        assert!(options.accepts("Legacy.dist.inc"));
        assert!(!options.accepts("Router.php"));
    }
}
