//! Event log panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl<S> App<S> {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: Rect) {
        let logs = self.logs.lines();

        // Leave room for the borders.
        let height = area.height.saturating_sub(2) as usize;
        let start = logs.len().saturating_sub(height);

        let lines: Vec<Line> = logs[start..]
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("Events"),
            ),
            area,
        );
    }
}
