//! Transition cue notification
//!
//! Fired when a session runs out and the next one begins.

use crate::timer::TransitionCue;
use std::io::{self, Write};
use tracing::debug;

/// Receives transition cues from the timer loop
pub trait CueSink {
    fn notify(&mut self, cue: &TransitionCue);
}

/// Rings the terminal bell (ASCII BEL) on the wrapped writer
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CueSink for TerminalBell<W> {
    fn notify(&mut self, cue: &TransitionCue) {
        debug!("Ringing bell for {} -> {}", cue.finished, cue.next);
        // a lost bell is not worth interrupting the timer for
        if let Err(e) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            debug!("Failed to ring terminal bell: {}", e);
        }
    }
}

/// Records cues without making a sound
#[derive(Debug, Default)]
pub struct Silent;

impl CueSink for Silent {
    fn notify(&mut self, cue: &TransitionCue) {
        debug!("Cue muted for {} -> {}", cue.finished, cue.next);
    }
}

/// Pick the sink for the configured cue setting
pub fn from_config(enabled: bool) -> Box<dyn CueSink> {
    if enabled {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(Silent)
    }
}
