//! Finds module classes in source files by structural text matching.
//!
//! This is deliberately not a PHP parser. A file matches when a `namespace`
//! statement is followed, anywhere later, by `class <Name> extends Module`.
//! Only the first match per file counts, so multiple classes in one file or a
//! module class preceding its namespace statement are not picked up. Matching
//! runs over raw bytes, so sources in legacy encodings are still recognised.

use std::path::PathBuf;
use std::sync::OnceLock;

use regex::bytes::Regex;
use tracing::trace;

use super::module::{DiscoveredModule, ModuleMap};
use crate::ports::filesystem::FileSystem;
use crate::ports::sink::MessageSink;

fn module_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?s-u)namespace\s+([a-zA-Z0-9_\\]+)\s*;.*?class\s+([a-zA-Z0-9_]+)\s+extends\s+Module",
        )
        .expect("module pattern is valid")
    })
}

/// Matches the module shape in `content`, returning the namespace and class name.
#[must_use]
pub fn match_module(content: &[u8]) -> Option<DiscoveredModule> {
    let captures = module_pattern().captures(content)?;
    // Both groups only admit ASCII identifier characters.
    let namespace = String::from_utf8_lossy(&captures[1]);
    let class_name = String::from_utf8_lossy(&captures[2]);
    Some(DiscoveredModule::new(&namespace, &class_name))
}

/// Reads candidate files and records every module they define.
///
/// Unreadable and non-matching files are skipped silently. Results are merged
/// into `modules`, so one map can collect across every source directory of a
/// run. Emits one message per matched file.
pub fn extract_modules(
    fs: &dyn FileSystem,
    files: &[PathBuf],
    modules: &mut ModuleMap,
    sink: &dyn MessageSink,
) {
    for file in files {
        let content = match fs.read(file) {
            Ok(content) => content,
            Err(err) => {
                trace!(path = %file.display(), error = %err, "skipping unreadable file");
                continue;
            }
        };
        let Some(module) = match_module(&content) else {
            continue;
        };
        sink.write(&format!("      Found pg-module: {}", module.class_name));
        modules.insert(module);
    }
}
