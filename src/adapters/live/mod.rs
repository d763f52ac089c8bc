//! Live adapters for real external interactions.

pub mod filesystem;
pub mod sink;

pub use filesystem::LiveFileSystem;
pub use sink::StdoutSink;
