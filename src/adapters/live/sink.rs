//! Live message sink writing to stdout.

use crate::ports::sink::MessageSink;

/// Prints each message on its own line of standard output.
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn write(&self, message: &str) {
        println!("{message}");
    }
}
