//! Reads the installed-package snapshot Composer leaves in the vendor directory.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::package::{autoload_map, AutoloadMap, InstalledPackage, DEFAULT_PACKAGE_TYPE};
use crate::error::{InstallerError, Result};
use crate::ports::filesystem::FileSystem;

/// Environment variable Composer itself honors for the vendor directory.
pub const ENV_VENDOR_DIR: &str = "COMPOSER_VENDOR_DIR";

const DEFAULT_VENDOR_DIR: &str = "vendor";

/// Directory layout of the project being installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Absolute vendor directory.
    pub vendor_dir: PathBuf,
    /// Parent of the vendor directory.
    pub project_root: PathBuf,
}

impl ProjectLayout {
    /// Derives the project root from a vendor directory.
    #[must_use]
    pub fn from_vendor_dir(vendor_dir: PathBuf) -> Self {
        let project_root =
            vendor_dir.parent().map_or_else(|| vendor_dir.clone(), Path::to_path_buf);
        Self { vendor_dir, project_root }
    }

    /// Resolves the vendor directory for `working_dir`.
    ///
    /// Precedence: explicit override, `COMPOSER_VENDOR_DIR`, `config.vendor-dir`
    /// in `composer.json`, then `vendor`. Relative values resolve against
    /// `working_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `composer.json` exists but cannot be read or parsed.
    pub fn resolve(
        fs: &dyn FileSystem,
        working_dir: &Path,
        vendor_override: Option<&Path>,
        env_vendor: Option<String>,
    ) -> Result<Self> {
        let vendor = match vendor_override {
            Some(dir) => dir.to_path_buf(),
            None => match env_vendor.filter(|v| !v.is_empty()) {
                Some(dir) => PathBuf::from(dir),
                None => manifest_vendor_dir(fs, working_dir)?
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_VENDOR_DIR)),
            },
        };
        let vendor_dir = normalize(&working_dir.join(vendor));
        debug!(vendor_dir = %vendor_dir.display(), "resolved vendor directory");
        Ok(Self::from_vendor_dir(vendor_dir))
    }

    /// Path of Composer's installed-package snapshot.
    #[must_use]
    pub fn installed_json(&self) -> PathBuf {
        self.vendor_dir.join("composer").join("installed.json")
    }

    /// Loads the installed packages, with absolute install paths.
    ///
    /// A missing snapshot means nothing is installed yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be read or parsed.
    pub fn installed_packages(&self, fs: &dyn FileSystem) -> Result<Vec<InstalledPackage>> {
        let path = self.installed_json();
        if !fs.is_file(&path) {
            debug!(path = %path.display(), "no installed.json, assuming no packages");
            return Ok(Vec::new());
        }
        let raw = fs.read_to_string(&path).map_err(|e| InstallerError::io(&path, e))?;
        let manifest: InstalledManifest = serde_json::from_str(&raw)
            .map_err(|source| InstallerError::Manifest { path: path.clone(), source })?;

        let entries = match manifest {
            InstalledManifest::Current { packages } => packages,
            InstalledManifest::Legacy(packages) => packages,
        };
        debug!(count = entries.len(), "read installed packages");
        Ok(entries.into_iter().map(|entry| self.package_from(entry)).collect())
    }

    fn package_from(&self, entry: PackageEntry) -> InstalledPackage {
        let install_path = match &entry.install_path {
            // Composer 2 records the path relative to vendor/composer.
            Some(relative) => normalize(&self.vendor_dir.join("composer").join(relative)),
            None => self.vendor_dir.join(&entry.name),
        };
        InstalledPackage {
            name: entry.name,
            package_type: entry.package_type,
            autoload: entry.autoload,
            install_path,
        }
    }
}

/// Composer 2 writes `{ "packages": [...] }`; Composer 1 writes a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum InstalledManifest {
    Current { packages: Vec<PackageEntry> },
    Legacy(Vec<PackageEntry>),
}

#[derive(Deserialize)]
struct PackageEntry {
    name: String,
    #[serde(rename = "type", default = "default_package_type")]
    package_type: String,
    #[serde(default, deserialize_with = "autoload_map")]
    autoload: AutoloadMap,
    #[serde(rename = "install-path")]
    install_path: Option<String>,
}

fn default_package_type() -> String {
    DEFAULT_PACKAGE_TYPE.to_string()
}

#[derive(Deserialize)]
struct RootManifest {
    #[serde(default)]
    config: RootConfig,
}

#[derive(Deserialize, Default)]
struct RootConfig {
    #[serde(rename = "vendor-dir")]
    vendor_dir: Option<String>,
}

fn manifest_vendor_dir(fs: &dyn FileSystem, working_dir: &Path) -> Result<Option<PathBuf>> {
    let path = working_dir.join("composer.json");
    if !fs.is_file(&path) {
        return Ok(None);
    }
    let raw = fs.read_to_string(&path).map_err(|e| InstallerError::io(&path, e))?;
    let manifest: RootManifest = serde_json::from_str(&raw)
        .map_err(|source| InstallerError::Manifest { path: path.clone(), source })?;
    Ok(manifest.config.vendor_dir.filter(|v| !v.is_empty()).map(PathBuf::from))
}

/// Lexically removes `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
