//! Sequences discovery and bootstrap synthesis for one installer run.

use std::path::Path;

use tracing::{debug, info};

use crate::bootstrap::ConfigSynthesizer;
use crate::composer::InstalledPackage;
use crate::config::InstallerConfig;
use crate::context::ServiceContext;
use crate::discovery::{
    extract_modules, filter_module_packages, resolve_source_dirs, scan_source_files, ModuleMap,
    ScanOptions,
};
use crate::error::Result;

/// Terminal state of a run. Every variant is a normal completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No package carries the marker type.
    NoPackages,
    /// Marked packages exist but define no modules.
    NoModules,
    /// Every discovered module was already registered, or the file has no modules section.
    Unchanged,
    /// The bootstrap file was rewritten with new modules.
    Updated,
}

/// Runs the discovery pipeline against a package snapshot.
pub struct Pipeline<'a> {
    ctx: &'a ServiceContext,
    config: &'a InstallerConfig,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline over the given context and configuration.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, config: &'a InstallerConfig) -> Self {
        Self { ctx, config }
    }

    /// Discovers modules and merges them into the project's bootstrap file.
    ///
    /// # Errors
    ///
    /// Returns an error on filesystem faults; empty results are reported as outcomes.
    pub fn run(&self, project_root: &Path, packages: &[InstalledPackage]) -> Result<Outcome> {
        let marker = &self.config.marker_type;
        self.ctx.say(format!("Search {marker}s packages"));
        let selected = filter_module_packages(packages, marker, self.ctx.sink.as_ref());
        if selected.is_empty() {
            self.ctx.say(format!("{marker}s packages not found, abort"));
            return Ok(Outcome::NoPackages);
        }

        let mut modules = ModuleMap::new();
        self.collect(&selected, &mut modules)?;
        if modules.is_empty() {
            self.ctx.say(format!("{marker}s not found in packages, abort"));
            return Ok(Outcome::NoModules);
        }

        let path = ConfigSynthesizer::locate(project_root, &self.config.config_file);
        let synthesizer = ConfigSynthesizer::new(self.ctx, self.config.write_lock);
        let outcome =
            if synthesizer.merge(&path, &modules)? { Outcome::Updated } else { Outcome::Unchanged };
        info!(?outcome, modules = modules.len(), "installer run finished");
        Ok(outcome)
    }

    /// Discovers every module defined by the marked packages, without writing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if a source directory cannot be traversed.
    pub fn discover(&self, packages: &[InstalledPackage]) -> Result<ModuleMap> {
        let selected =
            filter_module_packages(packages, &self.config.marker_type, self.ctx.sink.as_ref());
        let mut modules = ModuleMap::new();
        self.collect(&selected, &mut modules)?;
        Ok(modules)
    }

    fn collect(&self, packages: &[&InstalledPackage], modules: &mut ModuleMap) -> Result<()> {
        let options = ScanOptions::from_config(self.config);
        for package in packages {
            for source in resolve_source_dirs(package) {
                debug!(
                    package = %package.name,
                    namespace = %source.namespace,
                    dir = %source.dir.display(),
                    "scanning namespace directory"
                );
                let files = scan_source_files(self.ctx.fs.as_ref(), &source.dir, &options)?;
                if files.is_empty() {
                    continue;
                }
                extract_modules(self.ctx.fs.as_ref(), &files, modules, self.ctx.sink.as_ref());
            }
        }
        Ok(())
    }
}
