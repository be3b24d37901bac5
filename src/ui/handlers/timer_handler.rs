//! Countdown presets and timer event delivery.

use crate::timer::{TimerEvent, format_remaining};

use super::super::app::App;

/// Helper struct for driving the round timer from the UI.
pub struct TimerHandler<'a, S> {
    app: &'a mut App<S>,
}

impl<'a, S> TimerHandler<'a, S> {
    pub fn new(app: &'a mut App<S>) -> Self {
        Self { app }
    }

    /// Start the preset at `index`, or cancel it if it is the one running.
    pub fn toggle_preset(&mut self, index: usize) {
        let Some(&duration) = self.app.presets.get(index) else {
            return;
        };

        if self.app.timer.is_running() && self.app.active_preset == Some(index) {
            self.app.timer.cancel();
            self.app.active_preset = None;
            self.app.remaining = 0;
            self.app.log("Timer cancelled");
            return;
        }

        match self.app.timer.start(duration) {
            Ok(()) => {
                self.app.active_preset = Some(index);
                self.app.remaining = duration;
                self.app
                    .log(format!("Timer started: {}", format_remaining(duration)));
            }
            Err(e) => self.app.log(format!("Timer not started: {}", e)),
        }
    }

    /// Apply timer events that arrived since the last frame.
    pub fn drain_events(&mut self) {
        for event in self.app.timer.poll_events() {
            match event {
                TimerEvent::Tick { remaining } => self.app.remaining = remaining,
                TimerEvent::Expired => {
                    self.app.remaining = 0;
                    self.app.active_preset = None;
                    self.app.alert.sound();
                    self.app.log("Time is up!");
                }
            }
        }
    }
}
