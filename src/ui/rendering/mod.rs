mod entry;
mod logs;
mod players;
mod status;
mod timer;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::app::App;

impl<S> App<S> {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // players
                Constraint::Length(5), // countdown
                Constraint::Length(5), // entry form or key help
                Constraint::Length(3), // status
                Constraint::Min(4),    // logs
            ])
            .split(f.area());

        self.draw_players(f, layout[0]);
        self.draw_timer(f, layout[1]);
        self.draw_entry(f, layout[2]);
        self.draw_status(f, layout[3]);
        self.draw_logs(f, layout[4]);
    }
}
