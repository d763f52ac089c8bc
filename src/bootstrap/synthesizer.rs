//! Merges discovered modules into the bootstrap file.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::template::{skeleton, ConfigSections};
use crate::context::ServiceContext;
use crate::discovery::ModuleMap;
use crate::error::{InstallerError, Result};
use crate::ports::filesystem::WriteLock;

const NOTHING_TO_UPDATE: &str = "Nothing to update in config file.";

/// Maintains the generated bootstrap file.
///
/// All I/O goes through `ctx.fs`, and progress goes to `ctx.sink`.
pub struct ConfigSynthesizer<'a> {
    ctx: &'a ServiceContext,
    write_lock: WriteLock,
}

impl<'a> ConfigSynthesizer<'a> {
    /// Creates a synthesizer writing with the given lock discipline.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, write_lock: WriteLock) -> Self {
        Self { ctx, write_lock }
    }

    /// Path of the bootstrap file inside `project_root`.
    #[must_use]
    pub fn locate(project_root: &Path, relative: &Path) -> PathBuf {
        project_root.join(relative)
    }

    /// Appends every module not yet registered in the file at `path`.
    ///
    /// A missing file is first created from the skeleton. A file without the
    /// bootstrap shape is left alone. Returns `true` only when the file was
    /// rewritten with at least one new module.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn merge(&self, path: &Path, modules: &ModuleMap) -> Result<bool> {
        if !self.ctx.fs.is_file(path) {
            self.ctx.say(format!(
                "Config file\n {} \n don't exist in this project, writing dummy file",
                path.display()
            ));
            self.write(path, &skeleton())?;
        }

        let content = self.ctx.fs.read_to_string(path).map_err(|e| InstallerError::io(path, e))?;
        let Some(mut sections) = ConfigSections::parse(&content) else {
            debug!(path = %path.display(), "bootstrap file has no modules section");
            self.ctx.say(NOTHING_TO_UPDATE);
            return Ok(false);
        };

        let mut appended = 0usize;
        for (fqcn, class_name) in modules.iter() {
            if sections.contains(class_name) {
                self.ctx.say(format!("Module {class_name} already exist in config file"));
                continue;
            }
            sections.append(fqcn, class_name);
            appended += 1;
            self.ctx.say(format!("Write module {class_name} in config file"));
        }

        if appended == 0 {
            self.ctx.say(NOTHING_TO_UPDATE);
            return Ok(false);
        }
        debug!(path = %path.display(), appended, "rewriting bootstrap file");
        self.write(path, &sections.render())?;
        Ok(true)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.ctx.fs.write(path, contents, self.write_lock).map_err(|e| InstallerError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::memory::{MemoryFileSystem, RecordingSink};
    use crate::bootstrap::template::render;
    use crate::discovery::DiscoveredModule;

    const PATH: &str = "/project/src/Bootstrap/PgFramework.php";

    struct Harness {
        fs: Arc<MemoryFileSystem>,
        sink: Arc<RecordingSink>,
        ctx: ServiceContext,
    }

    fn harness(fs: MemoryFileSystem) -> Harness {
        let fs = Arc::new(fs);
        let sink = Arc::new(RecordingSink::new());
        let ctx = ServiceContext::new(fs.clone(), sink.clone());
        Harness { fs, sink, ctx }
    }

    fn modules(pairs: &[(&str, &str)]) -> ModuleMap {
        pairs.iter().map(|(ns, class)| DiscoveredModule::new(ns, class)).collect()
    }

    #[test]
    fn locate_builds_bootstrap_path() {
        let path = ConfigSynthesizer::locate(
            Path::new("/project"),
            Path::new("src/Bootstrap/PgFramework.php"),
        );
        assert_eq!(path, PathBuf::from(PATH));
    }

    #[test]
    fn missing_file_is_bootstrapped_then_merged() {
        let h = harness(MemoryFileSystem::new());
        let synth = ConfigSynthesizer::new(&h.ctx, WriteLock::Exclusive);

        let written = synth.merge(Path::new(PATH), &modules(&[("Router", "RouterModule")])).unwrap();

        assert!(written);
        assert_eq!(
            h.fs.contents(Path::new(PATH)).unwrap(),
            render("use Router\\RouterModule;", "\t\tRouterModule::class,")
        );
        assert_eq!(h.fs.writes().len(), 2);
        assert_eq!(
            h.sink.messages()[0],
            format!("Config file\n {PATH} \n don't exist in this project, writing dummy file")
        );
        assert!(h.sink.contains("Write module RouterModule in config file"));
    }

    #[test]
    fn second_merge_is_a_no_op() {
        let h = harness(MemoryFileSystem::new().with_file(PATH, &skeleton()));
        let synth = ConfigSynthesizer::new(&h.ctx, WriteLock::Exclusive);
        let found = modules(&[("Router", "RouterModule"), ("Auth", "AuthModule")]);

        assert!(synth.merge(Path::new(PATH), &found).unwrap());
        let after_first = h.fs.contents(Path::new(PATH)).unwrap();
        assert!(!synth.merge(Path::new(PATH), &found).unwrap());

        assert_eq!(h.fs.contents(Path::new(PATH)).unwrap(), after_first);
        assert_eq!(h.fs.writes().len(), 1);
        assert!(h.sink.contains("Module RouterModule already exist in config file"));
        assert_eq!(h.sink.messages().last().unwrap(), NOTHING_TO_UPDATE);
    }

    #[test]
    fn overlapping_merge_appends_only_new_modules() {
        let existing = render(
            "use Vendor\\Legacy\\RouterModule;",
            "\t\tRouterModule::class,\n\t\t\\Some\\Other::class,",
        );
        let h = harness(MemoryFileSystem::new().with_file(PATH, &existing));
        let synth = ConfigSynthesizer::new(&h.ctx, WriteLock::Exclusive);

        let written = synth
            .merge(Path::new(PATH), &modules(&[("Router", "RouterModule"), ("Auth", "AuthModule")]))
            .unwrap();

        assert!(written);
        assert_eq!(
            h.fs.contents(Path::new(PATH)).unwrap(),
            render(
                "use Vendor\\Legacy\\RouterModule;\nuse Auth\\AuthModule;",
                "\t\tRouterModule::class,\n\t\t\\Some\\Other::class,\n\t\tAuthModule::class,",
            )
        );
        assert_eq!(
            h.sink.messages(),
            vec![
                "Module RouterModule already exist in config file",
                "Write module AuthModule in config file",
            ]
        );
    }

    #[test]
    fn unrecognised_file_is_left_alone() {
        let foreign = "<?php\nreturn ['debug' => true];\n";
        let h = harness(MemoryFileSystem::new().with_file(PATH, foreign));
        let synth = ConfigSynthesizer::new(&h.ctx, WriteLock::Exclusive);

        let written = synth.merge(Path::new(PATH), &modules(&[("Router", "RouterModule")])).unwrap();

        assert!(!written);
        assert_eq!(h.fs.contents(Path::new(PATH)).unwrap(), foreign);
        assert!(h.fs.writes().is_empty());
        assert_eq!(h.sink.messages(), vec![NOTHING_TO_UPDATE]);
    }

    #[test]
    fn write_lock_mode_is_passed_through() {
        let h = harness(MemoryFileSystem::new().with_file(PATH, &skeleton()));
        let synth = ConfigSynthesizer::new(&h.ctx, WriteLock::None);

        synth.merge(Path::new(PATH), &modules(&[("Router", "RouterModule")])).unwrap();

        assert_eq!(h.fs.writes(), vec![(PathBuf::from(PATH), WriteLock::None)]);
    }

    #[test]
    fn unreadable_config_is_an_io_error() {
        let h = harness(MemoryFileSystem::new().with_file(PATH, &skeleton()));
        h.fs.deny_read(PATH);
        let synth = ConfigSynthesizer::new(&h.ctx, WriteLock::Exclusive);

        let err =
            synth.merge(Path::new(PATH), &modules(&[("Router", "RouterModule")])).unwrap_err();

        assert!(matches!(err, InstallerError::Io { .. }));
    }
}
