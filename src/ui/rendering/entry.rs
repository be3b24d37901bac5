//! Round entry form with validation status, or key help on the scoreboard.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ledger::seats,
    ui::{
        app::App,
        types::{EntryField, InputStatus, Mode},
    },
};

const SCOREBOARD_HELP: &str =
    "1-3 = record winner | u = undo | s = save wins | x = clear history | r = reset | F1.. = timer | q = quit";
const ENTRY_HELP: &str = "Enter = save round | Tab = switch field | Esc = cancel";

impl<S> App<S> {
    pub(in crate::ui) fn draw_entry(&self, f: &mut Frame, area: Rect) {
        if self.mode == Mode::Scoreboard {
            f.render_widget(
                Paragraph::new(vec![Line::from(""), Line::from(SCOREBOARD_HELP)])
                    .block(Block::default().borders(Borders::ALL).title("Keys")),
                area,
            );
            return;
        }

        let Some((left, right)) = seats(self.winner) else {
            return;
        };

        let (status_color, subtitle) = match self.input_status() {
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid => (Color::Green, "ok"),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(status_color))
            .title(format!(
                "{} wins {} | {}",
                self.ledger.players()[self.winner].name(),
                subtitle,
                ENTRY_HELP
            ));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let inputs = [
            (EntryField::Left, left, &self.left_input),
            (EntryField::Right, right, &self.right_input),
        ];

        for (i, (field, seat, text)) in inputs.into_iter().enumerate() {
            let focused = self.focus == field;
            let border_color = if focused { Color::Yellow } else { Color::DarkGray };
            let cursor = if focused { "▌" } else { "" };

            f.render_widget(
                Paragraph::new(format!("{}{}", text, cursor)).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border_color))
                        .title(format!("{} loses", self.ledger.players()[seat].name())),
                ),
                fields[i],
            );
        }
    }
}
