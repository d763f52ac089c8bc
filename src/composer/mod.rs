//! Composer integration: installed package metadata and project layout.
//!
//! This is the package-manager side of the boundary. The discovery pipeline
//! only sees the [`InstalledPackage`] snapshot produced here.

pub mod package;
pub mod repository;

pub use package::{AutoloadMap, AutoloadRule, InstalledPackage, SourcePaths, PSR4};
pub use repository::ProjectLayout;
