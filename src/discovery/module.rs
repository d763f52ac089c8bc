//! Discovered modules and the accumulator that collects them.

use indexmap::IndexMap;

/// A class found to extend the module marker base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredModule {
    /// Namespace and class name, e.g. `Router\RouterModule`.
    pub fqcn: String,
    /// Bare class name, e.g. `RouterModule`.
    pub class_name: String,
}

impl DiscoveredModule {
    /// Builds a module from its namespace and class name.
    #[must_use]
    pub fn new(namespace: &str, class_name: &str) -> Self {
        Self { fqcn: format!("{namespace}\\{class_name}"), class_name: class_name.to_string() }
    }
}

/// Running set of discovered modules, keyed by fully-qualified name.
///
/// Keeps discovery order. Re-inserting a known name keeps its first position.
/// The map is owned by the caller and threaded through every extraction
/// call of a run; [`ModuleMap::clear`] resets it between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleMap {
    modules: IndexMap<String, String>,
}

impl ModuleMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a module. Returns `true` if its fully-qualified name was new.
    pub fn insert(&mut self, module: DiscoveredModule) -> bool {
        self.modules.insert(module.fqcn, module.class_name).is_none()
    }

    /// Number of distinct modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if nothing was discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Bare class name registered for `fqcn`.
    #[must_use]
    pub fn get(&self, fqcn: &str) -> Option<&str> {
        self.modules.get(fqcn).map(String::as_str)
    }

    /// Iterates `(fqcn, class_name)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules.iter().map(|(fqcn, class)| (fqcn.as_str(), class.as_str()))
    }

    /// Forgets every module.
    pub fn clear(&mut self) {
        self.modules.clear();
    }
}

impl FromIterator<DiscoveredModule> for ModuleMap {
    fn from_iter<I: IntoIterator<Item = DiscoveredModule>>(iter: I) -> Self {
        let mut map = Self::new();
        for module in iter {
            map.insert(module);
        }
        map
    }
}
