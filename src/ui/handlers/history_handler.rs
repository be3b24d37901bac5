//! Saved win history operations.

use chrono::Local;
use tracing::warn;

use crate::history::{KeyValueStore, WinHistory};

use super::super::app::App;

/// Helper struct for loading and saving the win history.
pub struct HistoryHandler<'a, S> {
    app: &'a mut App<S>,
}

impl<'a, S: KeyValueStore> HistoryHandler<'a, S> {
    pub fn new(app: &'a mut App<S>) -> Self {
        Self { app }
    }

    /// Load the saved history. An unreadable record is shown as zeros and left untouched.
    pub fn load_history(&mut self) {
        match self.app.run_db_operation(self.app.history.load()) {
            Ok(history) => {
                self.app.saved_history = history;
                self.app.log(format!("Loaded win history: {}", history));
            }
            Err(e) => {
                warn!(error = %e, "win history unreadable");
                self.app.saved_history = WinHistory::default();
                self.app
                    .log(format!("Win history unreadable, showing zeros: {}", e));
            }
        }
    }

    /// Store the current session's wins as the saved history.
    pub fn save_scores(&mut self) {
        let counts = WinHistory::from(self.app.ledger.wins());

        match self.app.run_db_operation(self.app.history.save(counts)) {
            Ok(()) => {
                self.app.saved_history = counts;
                self.app.last_saved = Some(Local::now());
                self.app.log(format!("Saved win history: {}", counts));
            }
            Err(e) => self.app.log(format!("Failed to save history: {}", e)),
        }
    }

    pub fn clear_history(&mut self) {
        match self.app.run_db_operation(self.app.history.clear()) {
            Ok(()) => {
                self.app.saved_history = WinHistory::default();
                self.app.last_saved = Some(Local::now());
                self.app.log("Win history cleared");
            }
            Err(e) => self.app.log(format!("Failed to clear history: {}", e)),
        }
    }
}
