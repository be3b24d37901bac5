//! Round countdown driven by the tokio runtime.
//!
//! Each call to [`RoundTimer::start`] arms a new countdown with a fresh
//! generation number. The countdown task only touches shared state while its
//! generation is current, and the receiving side drops queued events from
//! older generations, so a retired countdown can never be observed after
//! `start` or `cancel` returns.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::{
    runtime::Handle,
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("countdown duration must be a positive number of seconds")]
    InvalidDuration,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Expired,
}

/// Notification delivered to the view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining: u64 },
    Expired,
}

#[derive(Debug)]
struct Countdown {
    generation: u64,
    state: TimerState,
    remaining: u64,
}

#[derive(Debug)]
struct Envelope {
    generation: u64,
    event: TimerEvent,
}

pub struct RoundTimer {
    runtime: Handle,
    shared: Arc<Mutex<Countdown>>,
    task: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<Envelope>,
    rx: mpsc::UnboundedReceiver<Envelope>,
}

fn lock(shared: &Mutex<Countdown>) -> MutexGuard<'_, Countdown> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Format whole seconds as zero-padded `MM:SS`. Minutes are not capped.
pub fn format_remaining(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

impl RoundTimer {
    pub fn new(runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            shared: Arc::new(Mutex::new(Countdown {
                generation: 0,
                state: TimerState::Idle,
                remaining: 0,
            })),
            task: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> TimerState {
        lock(&self.shared).state
    }

    pub fn remaining(&self) -> u64 {
        lock(&self.shared).remaining
    }

    pub fn is_running(&self) -> bool {
        self.state() == TimerState::Running
    }

    /// Start a countdown, replacing any countdown already running.
    pub fn start(&mut self, duration_secs: u64) -> Result<(), TimerError> {
        if duration_secs == 0 {
            return Err(TimerError::InvalidDuration);
        }

        self.retire_task();

        let generation = {
            let mut countdown = lock(&self.shared);
            countdown.generation += 1;
            countdown.state = TimerState::Running;
            countdown.remaining = duration_secs;
            countdown.generation
        };

        let _ = self.tx.send(Envelope {
            generation,
            event: TimerEvent::Tick {
                remaining: duration_secs,
            },
        });

        let first_tick = Instant::now() + TICK;
        let shared = Arc::clone(&self.shared);
        let tx = self.tx.clone();
        self.task = Some(
            self.runtime
                .spawn(run_countdown(shared, tx, generation, first_tick)),
        );

        info!(duration_secs, generation, "countdown started");
        Ok(())
    }

    /// Stop a running countdown. Does nothing unless the timer is running.
    pub fn cancel(&mut self) {
        {
            let mut countdown = lock(&self.shared);
            if countdown.state != TimerState::Running {
                return;
            }
            countdown.generation += 1;
            countdown.state = TimerState::Idle;
            countdown.remaining = 0;
        }

        self.retire_task();
        info!("countdown cancelled");
    }

    /// Drain every event delivered so far for the current countdown.
    pub fn poll_events(&mut self) -> Vec<TimerEvent> {
        let current = lock(&self.shared).generation;
        let mut events = Vec::new();

        while let Ok(envelope) = self.rx.try_recv() {
            if envelope.generation == current {
                events.push(envelope.event);
            }
        }

        events
    }

    /// Wait for the next event of the current countdown.
    pub async fn next_event(&mut self) -> Option<TimerEvent> {
        loop {
            let envelope = self.rx.recv().await?;
            if envelope.generation == lock(&self.shared).generation {
                return Some(envelope.event);
            }
        }
    }

    fn retire_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.retire_task();
    }
}

async fn run_countdown(
    shared: Arc<Mutex<Countdown>>,
    tx: mpsc::UnboundedSender<Envelope>,
    generation: u64,
    first_tick: Instant,
) {
    let mut ticker = time::interval_at(first_tick, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if !advance(&shared, &tx, generation) {
            return;
        }
    }
}

/// Count one second down. Returns false once this countdown is finished or stale.
fn advance(shared: &Mutex<Countdown>, tx: &mpsc::UnboundedSender<Envelope>, generation: u64) -> bool {
    let mut countdown = lock(shared);
    if countdown.generation != generation || countdown.state != TimerState::Running {
        debug!(generation, "stale countdown retired");
        return false;
    }

    countdown.remaining = countdown.remaining.saturating_sub(1);
    let remaining = countdown.remaining;
    let _ = tx.send(Envelope {
        generation,
        event: TimerEvent::Tick { remaining },
    });

    if remaining == 0 {
        countdown.state = TimerState::Expired;
        let _ = tx.send(Envelope {
            generation,
            event: TimerEvent::Expired,
        });
        info!(generation, "countdown expired");
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(65), "01:05");
        assert_eq!(format_remaining(180), "03:00");
        assert_eq!(format_remaining(59), "00:59");
        assert_eq!(format_remaining(6000), "100:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_counts_down_and_expires_once() {
        let mut timer = RoundTimer::new(Handle::current());
        timer.start(3).unwrap();
        assert_eq!(timer.state(), TimerState::Running);

        let mut seen = Vec::new();
        loop {
            let event = timer.next_event().await.unwrap();
            seen.push(event);
            if event == TimerEvent::Expired {
                break;
            }
        }

        assert_eq!(
            seen,
            vec![
                TimerEvent::Tick { remaining: 3 },
                TimerEvent::Tick { remaining: 2 },
                TimerEvent::Tick { remaining: 1 },
                TimerEvent::Tick { remaining: 0 },
                TimerEvent::Expired,
            ]
        );
        assert_eq!(timer.state(), TimerState::Expired);
        assert_eq!(timer.remaining(), 0);

        time::sleep(Duration::from_secs(5)).await;
        assert!(timer.poll_events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_drops_old_countdown() {
        let mut timer = RoundTimer::new(Handle::current());
        timer.start(60).unwrap();
        timer.start(120).unwrap();

        let mut seen = Vec::new();
        for _ in 0..65 {
            seen.push(timer.next_event().await.unwrap());
        }

        let expected: Vec<TimerEvent> = (0..65)
            .map(|i| TimerEvent::Tick { remaining: 120 - i })
            .collect();
        assert_eq!(seen, expected);
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_mid_countdown() {
        let mut timer = RoundTimer::new(Handle::current());
        timer.start(3).unwrap();
        time::sleep(Duration::from_millis(2500)).await;

        timer.start(10).unwrap();
        time::sleep(Duration::from_millis(5500)).await;

        let events = timer.poll_events();
        assert_eq!(events.first(), Some(&TimerEvent::Tick { remaining: 10 }));
        assert_eq!(events.last(), Some(&TimerEvent::Tick { remaining: 5 }));
        assert!(!events.contains(&TimerEvent::Expired));
        assert_eq!(timer.remaining(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_queued_ticks() {
        let mut timer = RoundTimer::new(Handle::current());
        timer.start(5).unwrap();
        time::sleep(Duration::from_millis(2500)).await;

        timer.cancel();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining(), 0);

        time::sleep(Duration::from_secs(10)).await;
        assert!(timer.poll_events().is_empty());
        assert_eq!(timer.remaining(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_when_idle_is_noop() {
        let mut timer = RoundTimer::new(Handle::current());
        timer.cancel();
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(timer.poll_events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_expiry() {
        let mut timer = RoundTimer::new(Handle::current());
        timer.start(1).unwrap();
        time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(
            timer.poll_events(),
            vec![
                TimerEvent::Tick { remaining: 1 },
                TimerEvent::Tick { remaining: 0 },
                TimerEvent::Expired,
            ]
        );
        assert_eq!(timer.state(), TimerState::Expired);

        timer.start(2).unwrap();
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining(), 2);
    }

    #[tokio::test]
    async fn test_zero_duration_rejected() {
        let mut timer = RoundTimer::new(Handle::current());
        assert_eq!(timer.start(0), Err(TimerError::InvalidDuration));
        assert_eq!(timer.state(), TimerState::Idle);
    }
}
