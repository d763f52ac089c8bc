//! The generated `PgFramework.php` bootstrap file.

pub mod synthesizer;
pub mod template;

pub use synthesizer::ConfigSynthesizer;
pub use template::{render, skeleton, ConfigSections};
