use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tile_tally::{
    args::Args,
    config::Config,
    db::{self, SqliteStore},
    history::HistoryStore,
    logging::init_logging,
    ui::run_ui,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(args)?;
    let _log_guard = init_logging(&config.log_dir, &config.log_level)?;

    info!(
        players = ?config.players,
        presets = ?config.presets,
        db = %config.db_path.display(),
        "starting tile-tally"
    );

    let pool = db::create_pool(&config.db_path)
        .await
        .context("Failed to open score history database")?;
    let history = HistoryStore::new(SqliteStore::new(pool.clone()));

    let result = tokio::task::block_in_place(|| run_ui(&config, history));

    pool.close().await;
    if let Err(e) = &result {
        tracing::error!("exiting with error: {:#}", e);
    }
    result
}
