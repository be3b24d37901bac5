use std::io::{Write, stdout};
use std::sync::{Arc, Mutex, PoisonError};

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sound played when a countdown reaches zero.
pub trait Alert: Send {
    fn sound(&self);
}

/// Rings the terminal bell.
pub struct TerminalBell;

impl Alert for TerminalBell {
    fn sound(&self) {
        let mut out = stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

/// Validation status of the round entry form.
#[derive(Debug, PartialEq, Eq)]
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid,
}

/// Result of parsing the round entry form.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedRound {
    Incomplete,
    Invalid(&'static str),
    Valid { left_loss: u32, right_loss: u32 },
}

/// Which screen the scoreboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Scoreboard,
    RoundEntry,
}

/// Loss field currently receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Left,
    Right,
}
