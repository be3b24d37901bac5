use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl<S> App<S> {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let mut parts = vec![format!("Games: {}", self.ledger.games_played())];

        if let Some(round) = self.ledger.last_round() {
            parts.push(format!(
                "Last: {} +{}",
                self.ledger.players()[round.winner].name(),
                u64::from(round.left_loss) + u64::from(round.right_loss)
            ));
        }

        if let Some(saved) = self.last_saved {
            parts.push(format!("Saved at {}", saved.format("%H:%M")));
        }

        f.render_widget(
            Paragraph::new(parts.join(" | "))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }
}
