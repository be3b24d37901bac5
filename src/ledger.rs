use thiserror::Error;

pub const PLAYER_COUNT: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    total: i64,
    wins: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: 0,
            wins: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }
}

/// The most recently applied round, kept so it can be reversed once.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PendingRound {
    pub winner: usize,
    pub left_loss: u32,
    pub right_loss: u32,
}

/// Returns the `(left, right)` seats of the two players who lost to `winner`.
pub fn seats(winner: usize) -> Option<(usize, usize)> {
    match winner {
        0 => Some((1, 2)),
        1 => Some((0, 2)),
        2 => Some((0, 1)),
        _ => None,
    }
}

/// Parse a loss amount typed by the user.
pub fn parse_loss(text: &str) -> Result<u32, LedgerError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidInput("loss amount is empty".into()));
    }

    trimmed
        .parse::<u32>()
        .map_err(|_| LedgerError::InvalidInput(format!("'{}' is not a non-negative integer", trimmed)))
}

/// Running totals and wins for the three seats, with single-level undo.
#[derive(Debug, Clone)]
pub struct ScoreLedger {
    players: [Player; PLAYER_COUNT],
    last_round: Option<PendingRound>,
    games_played: u32,
}

impl ScoreLedger {
    pub fn new(names: [String; PLAYER_COUNT]) -> Self {
        Self {
            players: names.map(Player::new),
            last_round: None,
            games_played: 0,
        }
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn last_round(&self) -> Option<PendingRound> {
        self.last_round
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn wins(&self) -> [u32; PLAYER_COUNT] {
        [self.players[0].wins, self.players[1].wins, self.players[2].wins]
    }

    pub fn apply_round(&mut self, winner: usize, left_loss: u32, right_loss: u32) -> Result<(), LedgerError> {
        let (left, right) = seats(winner)
            .ok_or_else(|| LedgerError::InvalidInput(format!("winner seat {} out of range", winner)))?;

        let gain = i64::from(left_loss) + i64::from(right_loss);

        // Compute everything up front so a failure leaves the ledger untouched.
        let overflow = || LedgerError::InvalidInput("score out of range".into());
        let winner_total = self.players[winner].total.checked_add(gain).ok_or_else(overflow)?;
        let winner_wins = self.players[winner].wins.checked_add(1).ok_or_else(overflow)?;
        let left_total = self.players[left]
            .total
            .checked_sub(i64::from(left_loss))
            .ok_or_else(overflow)?;
        let right_total = self.players[right]
            .total
            .checked_sub(i64::from(right_loss))
            .ok_or_else(overflow)?;
        let games_played = self.games_played.checked_add(1).ok_or_else(overflow)?;

        self.players[winner].total = winner_total;
        self.players[winner].wins = winner_wins;
        self.players[left].total = left_total;
        self.players[right].total = right_total;
        self.games_played = games_played;
        self.last_round = Some(PendingRound {
            winner,
            left_loss,
            right_loss,
        });

        tracing::debug!(
            winner = self.players[winner].name(),
            left_loss,
            right_loss,
            games_played,
            "round applied"
        );
        Ok(())
    }

    /// Reverse the last applied round. Returns the round that was undone, if any.
    pub fn undo_last_round(&mut self) -> Option<PendingRound> {
        let round = self.last_round.take()?;
        let Some((left, right)) = seats(round.winner) else {
            return None;
        };

        let gain = i64::from(round.left_loss) + i64::from(round.right_loss);
        self.players[round.winner].total -= gain;
        self.players[round.winner].wins -= 1;
        self.players[left].total += i64::from(round.left_loss);
        self.players[right].total += i64::from(round.right_loss);
        self.games_played -= 1;

        tracing::debug!(
            winner = self.players[round.winner].name(),
            games_played = self.games_played,
            "round undone"
        );
        Some(round)
    }

    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.total = 0;
            player.wins = 0;
        }
        self.last_round = None;
        self.games_played = 0;
    }

    pub fn total_sum(&self) -> i64 {
        self.players.iter().map(|p| p.total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> ScoreLedger {
        ScoreLedger::new(["DB".to_string(), "Bo".to_string(), "Steve".to_string()])
    }

    fn snapshot(ledger: &ScoreLedger) -> Vec<(i64, u32)> {
        ledger.players().iter().map(|p| (p.total, p.wins)).collect()
    }

    #[test]
    fn test_initial_state() {
        let ledger = ledger();
        assert_eq!(snapshot(&ledger), vec![(0, 0), (0, 0), (0, 0)]);
        assert_eq!(ledger.games_played(), 0);
        assert!(ledger.last_round().is_none());
        assert_eq!(ledger.players()[2].name(), "Steve");
    }

    #[test]
    fn test_apply_then_undo_scenario() {
        let mut ledger = ledger();
        ledger.apply_round(0, 10, 5).unwrap();

        assert_eq!(snapshot(&ledger), vec![(15, 1), (-10, 0), (-5, 0)]);
        assert_eq!(ledger.games_played(), 1);

        let undone = ledger.undo_last_round();
        assert_eq!(
            undone,
            Some(PendingRound {
                winner: 0,
                left_loss: 10,
                right_loss: 5
            })
        );
        assert_eq!(snapshot(&ledger), vec![(0, 0), (0, 0), (0, 0)]);
        assert_eq!(ledger.games_played(), 0);
    }

    #[test]
    fn test_seating_for_each_winner() {
        let mut ledger = ledger();
        ledger.apply_round(1, 7, 3).unwrap();
        assert_eq!(snapshot(&ledger), vec![(-7, 0), (10, 1), (-3, 0)]);

        let mut other = self::ledger();
        other.apply_round(2, 4, 6).unwrap();
        assert_eq!(snapshot(&other), vec![(-4, 0), (-6, 0), (10, 1)]);
    }

    #[test]
    fn test_apply_undo_round_trip_from_nonzero_state() {
        let cases = [(0, 0, 0), (0, 1, 99), (1, 50, 0), (2, 12, 34), (1, 1000, 2000)];

        for (winner, left, right) in cases {
            let mut ledger = ledger();
            ledger.apply_round(2, 8, 9).unwrap();
            ledger.apply_round(1, 3, 1).unwrap();
            let before = snapshot(&ledger);
            let games_before = ledger.games_played();

            ledger.apply_round(winner, left, right).unwrap();
            ledger.undo_last_round();

            assert_eq!(snapshot(&ledger), before, "case {:?}", (winner, left, right));
            assert_eq!(ledger.games_played(), games_before);
        }
    }

    #[test]
    fn test_zero_sum_holds_across_operations() {
        let mut ledger = ledger();
        assert_eq!(ledger.total_sum(), 0);

        let rounds = [(0, 5, 5), (1, 20, 3), (2, 0, 17), (0, 40, 1), (1, 2, 2)];
        for (i, (winner, left, right)) in rounds.into_iter().enumerate() {
            ledger.apply_round(winner, left, right).unwrap();
            assert_eq!(ledger.total_sum(), 0);
            if i % 2 == 1 {
                ledger.undo_last_round();
                assert_eq!(ledger.total_sum(), 0);
            }
        }
    }

    #[test]
    fn test_second_undo_is_noop() {
        let mut ledger = ledger();
        ledger.apply_round(0, 3, 4).unwrap();
        ledger.apply_round(2, 6, 1).unwrap();

        ledger.undo_last_round();
        let after_first = snapshot(&ledger);
        let games_after_first = ledger.games_played();

        assert!(ledger.undo_last_round().is_none());
        assert_eq!(snapshot(&ledger), after_first);
        assert_eq!(ledger.games_played(), games_after_first);
        assert_eq!(after_first, vec![(7, 1), (-3, 0), (-4, 0)]);
    }

    #[test]
    fn test_undo_with_nothing_recorded() {
        let mut ledger = ledger();
        assert!(ledger.undo_last_round().is_none());
        assert_eq!(snapshot(&ledger), vec![(0, 0), (0, 0), (0, 0)]);
        assert_eq!(ledger.games_played(), 0);
    }

    #[test]
    fn test_invalid_winner_leaves_state_untouched() {
        let mut ledger = ledger();
        ledger.apply_round(0, 1, 1).unwrap();

        let result = ledger.apply_round(3, 5, 5);
        assert!(matches!(result, Err(LedgerError::InvalidInput(_))));
        assert_eq!(snapshot(&ledger), vec![(2, 1), (-1, 0), (-1, 0)]);
        // The pending round is still the valid one.
        assert_eq!(ledger.last_round().map(|r| r.winner), Some(0));
    }

    #[test]
    fn test_reset_keeps_names() {
        let mut ledger = ledger();
        ledger.apply_round(1, 9, 9).unwrap();
        ledger.reset();

        assert_eq!(snapshot(&ledger), vec![(0, 0), (0, 0), (0, 0)]);
        assert!(ledger.last_round().is_none());
        assert_eq!(ledger.games_played(), 0);
        assert_eq!(ledger.players()[1].name(), "Bo");
    }

    #[test]
    fn test_wins_triple() {
        let mut ledger = ledger();
        ledger.apply_round(0, 1, 1).unwrap();
        ledger.apply_round(2, 1, 1).unwrap();
        ledger.apply_round(2, 1, 1).unwrap();
        assert_eq!(ledger.wins(), [1, 0, 2]);
    }

    #[test]
    fn test_parse_loss() {
        assert_eq!(parse_loss("12"), Ok(12));
        assert_eq!(parse_loss("  7 "), Ok(7));
        assert_eq!(parse_loss("0"), Ok(0));
        assert!(parse_loss("").is_err());
        assert!(parse_loss("-3").is_err());
        assert!(parse_loss("4x").is_err());
        assert!(parse_loss("1.5").is_err());
    }

    #[test]
    fn test_seats_mapping() {
        assert_eq!(seats(0), Some((1, 2)));
        assert_eq!(seats(1), Some((0, 2)));
        assert_eq!(seats(2), Some((0, 1)));
        assert_eq!(seats(3), None);
    }
}
