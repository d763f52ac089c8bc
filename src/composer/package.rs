//! Installed package metadata as exposed by Composer.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Autoload standard whose namespace mappings are scanned for modules.
pub const PSR4: &str = "psr-4";

/// Package type Composer assumes when metadata omits one.
pub const DEFAULT_PACKAGE_TYPE: &str = "library";

/// One or more directories relative to a package's install path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SourcePaths {
    /// `"Router\\": "src/"`
    One(String),
    /// `"Router\\": ["src/", "lib/"]`
    Many(Vec<String>),
}

impl SourcePaths {
    /// Iterates the declared directories in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let paths: &[String] = match self {
            Self::One(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths,
        };
        paths.iter().map(String::as_str)
    }
}

/// Rule declared under one autoload standard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AutoloadRule {
    /// Namespace prefix to directories (`psr-4`, `psr-0`).
    Namespaces(IndexMap<String, SourcePaths>),
    /// Anything else (`classmap`, `files`, `exclude-from-classmap`), carried opaquely.
    Other(serde_json::Value),
}

/// Autoload standard name to its rule, in declaration order.
pub type AutoloadMap = IndexMap<String, AutoloadRule>;

/// A package installed in the vendor directory. Read-only to the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct InstalledPackage {
    /// Package name, also used as its display name.
    pub name: String,
    /// Declared package type.
    pub package_type: String,
    /// Declared autoload rules.
    pub autoload: AutoloadMap,
    /// Absolute install directory.
    pub install_path: PathBuf,
}

impl InstalledPackage {
    /// Creates a package with no autoload rules.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        package_type: impl Into<String>,
        install_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            package_type: package_type.into(),
            autoload: AutoloadMap::new(),
            install_path: install_path.into(),
        }
    }

    /// Adds a namespaced autoload mapping under `standard`.
    #[must_use]
    pub fn with_namespace(mut self, standard: &str, namespace: &str, paths: SourcePaths) -> Self {
        let entry = self
            .autoload
            .entry(standard.to_string())
            .or_insert_with(|| AutoloadRule::Namespaces(IndexMap::new()));
        if let AutoloadRule::Namespaces(map) = entry {
            map.insert(namespace.to_string(), paths);
        }
        self
    }
}

/// PHP encodes an empty autoload object as `[]`; treat it as an empty map.
pub(crate) fn autoload_map<'de, D>(deserializer: D) -> Result<AutoloadMap, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(AutoloadMap::new()),
        serde_json::Value::Array(items) if items.is_empty() => Ok(AutoloadMap::new()),
        other => serde_json::from_value(other).map_err(serde::de::Error::custom),
    }
}
