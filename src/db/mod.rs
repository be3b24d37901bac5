pub mod preferences;

pub use preferences::SqliteStore;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};

/// Get the path to the database file using platform-specific data directory
pub fn get_db_path() -> Result<PathBuf> {
    let mut path = dirs::data_dir()
        .context("Unable to determine data directory for your platform")?;

    path.push("tile-tally");
    path.push("history.db");
    Ok(path)
}

/// Create a connection pool to the SQLite database at `db_path`
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::debug!(path = %db_path.display(), "database ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool_in_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.db");

        let pool = create_pool(&path).await;
        assert!(pool.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_db_path_file_name() {
        if let Ok(path) = get_db_path() {
            assert!(path.ends_with("tile-tally/history.db"));
        }
    }
}
