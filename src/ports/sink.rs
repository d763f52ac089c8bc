//! Message sink port for user-visible progress reporting.

/// Receives human-readable progress messages.
///
/// Every message is informational; the stream carries no severity levels.
pub trait MessageSink: Send + Sync {
    /// Emits a single message.
    fn write(&self, message: &str);
}
