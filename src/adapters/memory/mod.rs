//! In-memory adapters for exercising the pipeline without disk or stdout.

pub mod filesystem;
pub mod sink;

pub use filesystem::MemoryFileSystem;
pub use sink::RecordingSink;
