//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the discovery pipeline and the
//! host it runs in (disk access, progress output). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod sink;

pub use filesystem::{FileSystem, WriteLock};
pub use sink::MessageSink;
