//! Installer configuration.
//!
//! Values are layered: built-in defaults, then environment variables (a
//! `.env` file is loaded into the environment by the binary), then CLI flags.

use std::path::PathBuf;

use crate::ports::filesystem::WriteLock;

/// Package type that marks a package as carrying modules.
pub const DEFAULT_MARKER_TYPE: &str = "pg-module";

/// Extension of candidate source files.
pub const DEFAULT_EXTENSION: &str = "php";

/// File names containing this marker are distribution templates and are skipped.
pub const DEFAULT_EXCLUDE: &str = ".dist.";

/// Location of the generated bootstrap file, relative to the project root.
pub const DEFAULT_CONFIG_FILE: &str = "src/Bootstrap/PgFramework.php";

/// Environment variable overriding the marker type.
pub const ENV_MARKER_TYPE: &str = "PGMOD_MARKER_TYPE";

/// Environment variable disabling the exclusive write lock when truthy.
pub const ENV_NO_LOCK: &str = "PGMOD_NO_LOCK";

/// Settings for one installer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    /// Package type selecting module packages.
    pub marker_type: String,
    /// Source file extension, without the leading dot.
    pub extension: String,
    /// Case-insensitive file name marker excluding a file from scanning.
    pub exclude: Option<String>,
    /// Locking discipline for rewriting the bootstrap file.
    pub write_lock: WriteLock,
    /// Bootstrap file location relative to the project root.
    pub config_file: PathBuf,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            marker_type: DEFAULT_MARKER_TYPE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: Some(DEFAULT_EXCLUDE.to_string()),
            write_lock: WriteLock::Exclusive,
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

impl InstallerConfig {
    /// Builds a config from defaults overridden by the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from defaults overridden by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(marker) = lookup(ENV_MARKER_TYPE).filter(|v| !v.trim().is_empty()) {
            config.marker_type = marker.trim().to_string();
        }
        if lookup(ENV_NO_LOCK).is_some_and(|v| is_truthy(&v)) {
            config.write_lock = WriteLock::None;
        }
        config
    }

    /// Returns the config with locking disabled when `no_lock` is set.
    #[must_use]
    pub fn with_no_lock(mut self, no_lock: bool) -> Self {
        if no_lock {
            self.write_lock = WriteLock::None;
        }
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
