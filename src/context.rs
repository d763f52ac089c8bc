//! Service context bundling the port trait objects.

use std::sync::Arc;

use crate::adapters::live::{LiveFileSystem, StdoutSink};
use crate::ports::filesystem::FileSystem;
use crate::ports::sink::MessageSink;

/// Bundles the port trait objects a pipeline run needs.
///
/// Constructors wire up different adapter implementations (live, in-memory).
#[derive(Clone)]
pub struct ServiceContext {
    /// Filesystem for reading sources and writing the bootstrap file.
    pub fs: Arc<dyn FileSystem>,
    /// Sink for user-visible progress messages.
    pub sink: Arc<dyn MessageSink>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk and stdout.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Arc::new(LiveFileSystem), sink: Arc::new(StdoutSink) }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(fs: Arc<dyn FileSystem>, sink: Arc<dyn MessageSink>) -> Self {
        Self { fs, sink }
    }

    /// Emits a progress message through the sink.
    pub fn say(&self, message: impl AsRef<str>) {
        self.sink.write(message.as_ref());
    }
}
