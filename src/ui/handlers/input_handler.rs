//! Keyboard input dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::history::KeyValueStore;

use super::super::{
    app::App,
    types::{InputStatus, Mode, ParsedRound},
};
use super::{HistoryHandler, RoundHandler, TimerHandler};

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a, S> {
    app: &'a mut App<S>,
}

impl<'a, S: KeyValueStore> InputHandler<'a, S> {
    pub fn new(app: &'a mut App<S>) -> Self {
        Self { app }
    }

    /// Handle one key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.app.log("Exit requested");
            return true;
        }

        // Presets work from either screen.
        if let KeyCode::F(n) = key.code {
            if n >= 1 {
                TimerHandler::new(self.app).toggle_preset(usize::from(n - 1));
            }
            return false;
        }

        match self.app.mode {
            Mode::Scoreboard => self.handle_scoreboard_key(key),
            Mode::RoundEntry => {
                self.handle_entry_key(key);
                false
            }
        }
    }

    fn handle_scoreboard_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q' | 'Q') => {
                self.app.log("Exit requested");
                return true;
            }
            KeyCode::Char(c @ '1'..='3') => {
                let seat = (c as usize) - ('1' as usize);
                RoundHandler::new(self.app).begin_entry(seat);
            }
            KeyCode::Char('u' | 'U') => {
                self.app.log("Undo requested");
                RoundHandler::new(self.app).undo();
            }
            KeyCode::Char('r' | 'R') => RoundHandler::new(self.app).reset(),
            KeyCode::Char('s' | 'S') => HistoryHandler::new(self.app).save_scores(),
            KeyCode::Char('x' | 'X') => HistoryHandler::new(self.app).clear_history(),
            KeyCode::Char('l' | 'L') => HistoryHandler::new(self.app).load_history(),
            _ => {}
        }
        false
    }

    fn handle_entry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => RoundHandler::new(self.app).cancel_entry(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                RoundHandler::new(self.app).switch_field()
            }
            KeyCode::Enter => RoundHandler::new(self.app).submit_entry(),
            KeyCode::Backspace => RoundHandler::new(self.app).pop_char(),
            KeyCode::Char(c) => RoundHandler::new(self.app).push_char(c),
            _ => {}
        }
    }

    pub fn input_status(&self) -> InputStatus {
        self.app.input_status()
    }
}

impl<S> App<S> {
    pub(in crate::ui) fn input_status(&self) -> InputStatus {
        match self.parse_entry() {
            ParsedRound::Incomplete => InputStatus::Incomplete,
            ParsedRound::Invalid(reason) => InputStatus::Invalid(reason),
            ParsedRound::Valid { .. } => InputStatus::Valid,
        }
    }
}
