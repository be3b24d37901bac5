use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;

use crate::history::KeyValueStore;

/// Durable key-value store backed by the `preferences` table.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl KeyValueStore for SqliteStore {
    /// Insert or replace the value stored under `key`
    async fn save(&self, key: &str, value: &str) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to save preference {:?}", key))?;

        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            r#"
            SELECT value FROM preferences
            WHERE key = ?
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to load preference {:?}", key))?;

        Ok(value)
    }
}
