//! Countdown display and preset buttons.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    timer::{TimerState, format_remaining},
    ui::app::App,
};

/// Seconds left at which the countdown turns red.
const WARNING_SECS: u64 = 10;

/// Button label for a preset, e.g. `2:00`.
pub(in crate::ui) fn preset_label(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl<S> App<S> {
    pub(in crate::ui) fn draw_timer(&self, f: &mut Frame, area: Rect) {
        let state = self.timer.state();
        let color = match state {
            TimerState::Expired => Color::Red,
            TimerState::Running if self.remaining <= WARNING_SECS => Color::Red,
            TimerState::Running => Color::Cyan,
            TimerState::Idle => Color::Gray,
        };

        let buttons: Vec<Span> = self
            .presets
            .iter()
            .enumerate()
            .flat_map(|(i, &secs)| {
                let running = state == TimerState::Running && self.active_preset == Some(i);
                let label = if running {
                    "Cancel".to_string()
                } else {
                    preset_label(secs)
                };
                [
                    Span::styled(format!("F{}", i + 1), Style::default().fg(Color::Yellow)),
                    Span::raw(format!(" {}   ", label)),
                ]
            })
            .collect();

        let lines = vec![
            Line::from(Span::styled(
                format_remaining(self.remaining),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(buttons),
        ];

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Timer")),
            area,
        );
    }
}
