//! Persisted win history.
//!
//! The record is a comma-joined triple of win counts stored under a single
//! key of a [`KeyValueStore`]. Every save replaces the whole record.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::{info, warn};

use crate::ledger::PLAYER_COUNT;

pub const HISTORY_KEY: &str = "history";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("stored history {value:?} is corrupt: {reason}")]
    Corrupt { value: String, reason: String },
    #[error("history storage failed: {0:#}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for HistoryError {
    fn from(err: anyhow::Error) -> Self {
        HistoryError::Storage(err)
    }
}

/// Win counts per seat.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WinHistory(pub [u32; PLAYER_COUNT]);

impl WinHistory {
    pub fn counts(&self) -> [u32; PLAYER_COUNT] {
        self.0
    }
}

impl From<[u32; PLAYER_COUNT]> for WinHistory {
    fn from(counts: [u32; PLAYER_COUNT]) -> Self {
        Self(counts)
    }
}

impl fmt::Display for WinHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{},{},{}", a, b, c)
    }
}

impl FromStr for WinHistory {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let corrupt = |reason: String| HistoryError::Corrupt {
            value: s.to_string(),
            reason,
        };

        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != PLAYER_COUNT {
            return Err(corrupt(format!(
                "expected {} fields, found {}",
                PLAYER_COUNT,
                fields.len()
            )));
        }

        let mut counts = [0u32; PLAYER_COUNT];
        for (slot, field) in counts.iter_mut().zip(fields) {
            *slot = field
                .parse()
                .map_err(|_| corrupt(format!("{:?} is not a non-negative integer", field)))?;
        }

        Ok(Self(counts))
    }
}

/// Flat string key-value storage.
pub trait KeyValueStore {
    fn save(&self, key: &str, value: &str) -> impl Future<Output = anyhow::Result<()>> + Send;

    fn load(&self, key: &str) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;
}

/// Process-local store, used when nothing needs to outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }
}

pub struct HistoryStore<S> {
    store: S,
    io_lock: tokio::sync::Mutex<()>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            io_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the stored record. Saves complete in call order.
    pub async fn save(&self, counts: WinHistory) -> Result<(), HistoryError> {
        let _guard = self.io_lock.lock().await;
        let value = counts.to_string();
        self.store.save(HISTORY_KEY, &value).await?;
        info!(history = %value, "win history saved");
        Ok(())
    }

    /// Read the stored record. A missing or blank record reads as all zeros.
    pub async fn load(&self) -> Result<WinHistory, HistoryError> {
        let _guard = self.io_lock.lock().await;
        let Some(value) = self.store.load(HISTORY_KEY).await? else {
            return Ok(WinHistory::default());
        };

        if value.trim().is_empty() {
            return Ok(WinHistory::default());
        }

        value.parse().inspect_err(|e| warn!("{}", e))
    }

    pub async fn clear(&self) -> Result<(), HistoryError> {
        self.save(WinHistory::default()).await
    }
}
