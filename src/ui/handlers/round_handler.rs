//! Round entry and ledger mutations.

use crate::ledger::{parse_loss, seats};

use super::super::{
    app::App,
    types::{EntryField, Mode, ParsedRound},
};

/// Longest loss amount the entry form accepts.
const MAX_ENTRY_LEN: usize = 9;

/// Helper struct for recording and reversing rounds.
pub struct RoundHandler<'a, S> {
    app: &'a mut App<S>,
}

impl<'a, S> RoundHandler<'a, S> {
    pub fn new(app: &'a mut App<S>) -> Self {
        Self { app }
    }

    /// Open the entry form for a round won by `winner`.
    pub fn begin_entry(&mut self, winner: usize) {
        if seats(winner).is_none() {
            return;
        }

        self.app.mode = Mode::RoundEntry;
        self.app.winner = winner;
        self.app.left_input.clear();
        self.app.right_input.clear();
        self.app.focus = EntryField::Left;

        let name = self.app.ledger.players()[winner].name().to_string();
        self.app.log(format!("Recording round won by {}", name));
    }

    pub fn cancel_entry(&mut self) {
        self.app.mode = Mode::Scoreboard;
        self.app.left_input.clear();
        self.app.right_input.clear();
        self.app.log("Round entry cancelled");
    }

    pub fn switch_field(&mut self) {
        self.app.focus = match self.app.focus {
            EntryField::Left => EntryField::Right,
            EntryField::Right => EntryField::Left,
        };
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focused_field();
        if field.len() < MAX_ENTRY_LEN && !c.is_whitespace() {
            field.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.focused_field().pop();
    }

    /// Apply the round in the entry form if both amounts are valid.
    pub fn submit_entry(&mut self) {
        let (left_loss, right_loss) = match self.app.parse_entry() {
            ParsedRound::Valid {
                left_loss,
                right_loss,
            } => (left_loss, right_loss),
            ParsedRound::Incomplete => {
                self.app.log("Both loss amounts are required");
                return;
            }
            ParsedRound::Invalid(reason) => {
                self.app.log(format!("Round rejected: {}", reason));
                return;
            }
        };

        let winner = self.app.winner;
        match self.app.ledger.apply_round(winner, left_loss, right_loss) {
            Ok(()) => {
                let name = self.app.ledger.players()[winner].name().to_string();
                self.app.log(format!(
                    "{} wins {} points ({} + {})",
                    name,
                    u64::from(left_loss) + u64::from(right_loss),
                    left_loss,
                    right_loss
                ));
                self.app.mode = Mode::Scoreboard;
                self.app.left_input.clear();
                self.app.right_input.clear();
            }
            Err(e) => self.app.log(format!("Round rejected: {}", e)),
        }
    }

    pub fn undo(&mut self) {
        match self.app.ledger.undo_last_round() {
            Some(round) => {
                let name = self.app.ledger.players()[round.winner].name().to_string();
                self.app.log(format!("Undid round won by {}", name));
            }
            None => self.app.log("Nothing to undo"),
        }
    }

    pub fn reset(&mut self) {
        self.app.ledger.reset();
        self.app.log("Scores reset");
    }

    fn focused_field(&mut self) -> &mut String {
        match self.app.focus {
            EntryField::Left => &mut self.app.left_input,
            EntryField::Right => &mut self.app.right_input,
        }
    }
}

impl<S> App<S> {
    /// Parse the two loss fields of the entry form.
    pub(in crate::ui) fn parse_entry(&self) -> ParsedRound {
        let left = self.left_input.trim();
        let right = self.right_input.trim();

        if left.is_empty() || right.is_empty() {
            return ParsedRound::Incomplete;
        }

        let Ok(left_loss) = parse_loss(left) else {
            return ParsedRound::Invalid("left loss must be a whole number");
        };
        let Ok(right_loss) = parse_loss(right) else {
            return ParsedRound::Invalid("right loss must be a whole number");
        };

        ParsedRound::Valid {
            left_loss,
            right_loss,
        }
    }
}
