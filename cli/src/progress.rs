//! Text progress bar for the terminal.

use std::io::{self, IsTerminal, Stderr, Write};
use std::thread;
use std::time::Duration;

use reqview_core::ProgressSink;

const WIDTH: usize = 20;

/// Draws `[#####...] 60%` on one line, redrawn in place with `\r`.
///
/// When disabled nothing is written, which is what pipes and logs want.
pub struct TerminalProgress<W: Write> {
    out: W,
    enabled: bool,
    hold_when_done: bool,
}

impl TerminalProgress<Stderr> {
    /// Bar on stderr, drawn only when stderr is a terminal.
    pub fn stderr() -> Self {
        let enabled = io::stderr().is_terminal();
        Self::new(io::stderr(), enabled, enabled)
    }
}

impl<W: Write> TerminalProgress<W> {
    /// `hold_when_done` keeps a full bar visible for the reset delay before
    /// clearing it.
    pub fn new(out: W, enabled: bool, hold_when_done: bool) -> Self {
        Self {
            out,
            enabled,
            hold_when_done,
        }
    }

    pub fn hold_when_done(mut self, hold: bool) -> Self {
        self.hold_when_done = hold;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, percent: u8) -> io::Result<()> {
        if percent == 0 {
            write!(self.out, "\r{:width$}\r", "", width = WIDTH + 7)?;
        } else {
            let filled = usize::from(percent.min(100)) * WIDTH / 100;
            write!(
                self.out,
                "\r[{}{}] {percent:>3}%",
                "#".repeat(filled),
                ".".repeat(WIDTH - filled)
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> ProgressSink for TerminalProgress<W> {
    fn set(&mut self, percent: u8) {
        if self.enabled {
            // Best-effort: write errors are dropped.
            let _ = self.draw(percent);
        }
    }

    fn reset_after(&mut self, delay: Duration) {
        if self.enabled && self.hold_when_done {
            thread::sleep(delay);
        }
        self.set(0);
    }
}
