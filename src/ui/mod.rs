mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{Alert, EntryField, InputStatus, LogBuffer, Mode, ParsedRound, TerminalBell};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use tokio::runtime::Handle;

use crate::{
    config::Config,
    history::{HistoryStore, KeyValueStore},
};

/// Entry point for running the UI. Must be called from a multi-threaded tokio runtime.
pub fn run_ui<S: KeyValueStore>(config: &Config, history: HistoryStore<S>) -> Result<()> {
    let logs = LogBuffer::new();

    let mut app = App::new(
        config.players.clone(),
        config.presets.clone(),
        history,
        Handle::current(),
        logs,
        Box::new(TerminalBell),
    );
    handlers::HistoryHandler::new(&mut app).load_history();

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
