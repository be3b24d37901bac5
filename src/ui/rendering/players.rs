//! Player columns: running total, session wins and saved history.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ledger::{PLAYER_COUNT, seats},
    ui::{app::App, types::Mode},
};

impl<S> App<S> {
    pub(in crate::ui) fn draw_players(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, PLAYER_COUNT as u32); PLAYER_COUNT])
            .split(area);

        let history = self.saved_history.counts();
        let losers = seats(self.winner);

        for (seat, player) in self.ledger.players().iter().enumerate() {
            let total_color = match player.total() {
                t if t > 0 => Color::Green,
                t if t < 0 => Color::Red,
                _ => Color::White,
            };

            let lines = vec![
                Line::from(Span::styled(
                    player.total().to_string(),
                    Style::default().fg(total_color).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Wins: {}", player.wins())),
                Line::from(Span::styled(
                    format!("Saved: {}", history[seat]),
                    Style::default().fg(Color::DarkGray),
                )),
            ];

            let border_color = if self.mode != Mode::RoundEntry {
                Color::White
            } else if seat == self.winner {
                Color::Yellow
            } else if losers.is_some_and(|(l, r)| seat == l || seat == r) {
                Color::Red
            } else {
                Color::White
            };

            f.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border_color))
                        .title(format!("[{}] {}", seat + 1, player.name())),
                ),
                columns[seat],
            );
        }
    }
}
