use std::{fmt::Display, io::Stdout, time::Duration};

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::runtime::Handle;
use tracing::info;

use crate::{
    history::{HistoryStore, KeyValueStore, WinHistory},
    ledger::{PLAYER_COUNT, ScoreLedger},
    timer::RoundTimer,
};

use super::types::{Alert, EntryField, LogBuffer, Mode};

const INPUT_POLL: Duration = Duration::from_millis(100);

/// Main application state container.
pub struct App<S> {
    pub(in crate::ui) ledger: ScoreLedger,
    pub(in crate::ui) timer: RoundTimer,
    pub(in crate::ui) history: HistoryStore<S>,
    pub(in crate::ui) saved_history: WinHistory,
    pub(in crate::ui) presets: Vec<u64>,
    pub(in crate::ui) active_preset: Option<usize>,
    pub(in crate::ui) remaining: u64,
    pub(in crate::ui) mode: Mode,
    pub(in crate::ui) winner: usize,
    pub(in crate::ui) left_input: String,
    pub(in crate::ui) right_input: String,
    pub(in crate::ui) focus: EntryField,
    pub(in crate::ui) last_saved: Option<DateTime<Local>>,
    pub(in crate::ui) logs: LogBuffer,
    pub(in crate::ui) alert: Box<dyn Alert>,
}

impl<S> App<S> {
    pub fn new(
        players: [String; PLAYER_COUNT],
        presets: Vec<u64>,
        history: HistoryStore<S>,
        runtime: Handle,
        logs: LogBuffer,
        alert: Box<dyn Alert>,
    ) -> Self {
        Self {
            ledger: ScoreLedger::new(players),
            timer: RoundTimer::new(runtime),
            history,
            saved_history: WinHistory::default(),
            presets,
            active_preset: None,
            remaining: 0,
            mode: Mode::Scoreboard,
            winner: 0,
            left_input: String::new(),
            right_input: String::new(),
            focus: EntryField::Left,
            last_saved: None,
            logs,
            alert,
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Execute an async storage operation from sync context
    pub(in crate::ui) fn run_db_operation<F, T>(&self, future: F) -> T
    where
        F: std::future::Future<Output = T>,
    {
        tokio::task::block_in_place(|| Handle::current().block_on(future))
    }
}

impl<S: KeyValueStore> App<S> {
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            super::handlers::TimerHandler::new(self).drain_events();

            terminal.draw(|f| self.draw(f))?;

            if !event::poll(INPUT_POLL)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    self.timer.cancel();
                    return Ok(());
                }
            }
        }
    }
}
