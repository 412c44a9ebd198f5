//! Coarse progress feedback emitted during a send.
//!
//! Purely cosmetic: the values mark how far a send got, nothing more.

use std::time::Duration;

/// Request pane written.
pub const FORMATTED: u8 = 30;
/// Call about to be issued.
pub const SENDING: u8 = 60;
/// Response received.
pub const RECEIVED: u8 = 90;
/// Response pane written.
pub const DONE: u8 = 100;

/// How long a completed bar stays full before dropping back to zero.
pub const RESET_DELAY: Duration = Duration::from_millis(1000);

/// Receives progress updates from `DemoPanel::send`.
pub trait ProgressSink {
    fn set(&mut self, percent: u8);

    /// Called once after `DONE`. Sinks that render a bar wait `delay`
    /// before clearing it; the default clears immediately.
    fn reset_after(&mut self, delay: Duration) {
        let _ = delay;
        self.set(0);
    }
}

/// Discards all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn set(&mut self, _percent: u8) {}
}
