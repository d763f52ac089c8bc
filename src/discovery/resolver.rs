//! Expands PSR-4 autoload mappings into absolute source directories.

use std::path::PathBuf;

use crate::composer::{AutoloadRule, InstalledPackage, PSR4};

/// A namespace prefix and one directory its classes live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacedSourceDir {
    /// Namespace prefix without the trailing separator.
    pub namespace: String,
    /// Absolute directory.
    pub dir: PathBuf,
}

/// Lists the source directories a package declares under PSR-4.
///
/// Every other autoload standard (PSR-0, classmap, files) is ignored.
#[must_use]
pub fn resolve_source_dirs(package: &InstalledPackage) -> Vec<NamespacedSourceDir> {
    let Some(AutoloadRule::Namespaces(mappings)) = package.autoload.get(PSR4) else {
        return Vec::new();
    };
    mappings
        .iter()
        .flat_map(|(namespace, paths)| {
            let namespace = namespace.trim_end_matches('\\');
            paths.iter().map(move |relative| NamespacedSourceDir {
                namespace: namespace.to_string(),
                dir: package.install_path.join(relative),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::SourcePaths;

    fn package() -> InstalledPackage {
        InstalledPackage::new("pgframework/router", "pg-module", "/project/vendor/pgframework/router")
    }

    #[test]
    fn joins_install_path_and_trims_namespace() {
        let package = package().with_namespace(PSR4, "Router\\", SourcePaths::One("src".into()));

        assert_eq!(
            resolve_source_dirs(&package),
            vec![NamespacedSourceDir {
                namespace: "Router".into(),
                dir: PathBuf::from("/project/vendor/pgframework/router/src"),
            }]
        );
    }

    #[test]
    fn one_entry_per_directory() {
        let package = package()
            .with_namespace(PSR4, "Router\\", SourcePaths::Many(vec!["src".into(), "lib".into()]))
            .with_namespace(PSR4, "Router\\Http\\", SourcePaths::One("http".into()));

        let dirs = resolve_source_dirs(&package);

        let pairs: Vec<_> = dirs
            .iter()
            .map(|d| (d.namespace.as_str(), d.dir.strip_prefix(&package.install_path).unwrap()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Router", std::path::Path::new("src")),
                ("Router", std::path::Path::new("lib")),
                ("Router\\Http", std::path::Path::new("http")),
            ]
        );
    }

    #[test]
    fn non_psr4_standards_are_ignored() {
        let package = package()
            .with_namespace("psr-0", "Router_", SourcePaths::One("legacy".into()))
            .with_namespace("psr-0", "Other", SourcePaths::One("other".into()));

        assert!(resolve_source_dirs(&package).is_empty());
    }

    #[test]
    fn package_without_autoload_has_no_dirs() {
        assert!(resolve_source_dirs(&package()).is_empty());
    }
}
