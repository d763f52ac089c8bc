//! Error type shared by the discovery pipeline and its adapters.

use std::path::PathBuf;

use thiserror::Error;

/// Faults that abort an installer run.
///
/// Empty results (no packages, no modules, nothing to merge) are not errors;
/// they are reported through the message sink and end the run normally.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// A filesystem call failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path the failing call operated on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Package metadata could not be parsed.
    #[error("invalid package metadata in {}: {source}", path.display())]
    Manifest {
        /// Metadata file that failed to parse.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// Recursive directory traversal failed below an existing directory.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        /// Root of the traversal.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl InstallerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, InstallerError>;
