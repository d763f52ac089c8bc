//! Module discovery: package selection, source directory resolution, file
//! scanning and module extraction.

pub mod extractor;
pub mod filter;
pub mod module;
pub mod resolver;
pub mod scanner;

pub use extractor::{extract_modules, match_module};
pub use filter::filter_module_packages;
pub use module::{DiscoveredModule, ModuleMap};
pub use resolver::{resolve_source_dirs, NamespacedSourceDir};
pub use scanner::{scan_source_files, ScanOptions};
