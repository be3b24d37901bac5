use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tile-tally", version, about = "Three-player score tracker for tile games")]
pub struct Args {
    /// Player names in seat order, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1.., default_values = ["DB", "Bo", "Steve"])]
    pub players: Vec<String>,

    /// Countdown presets in seconds, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1.., default_values = ["60", "120", "180"])]
    pub presets: Vec<u64>,

    /// SQLite database file (defaults to the platform data directory)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Directory for the rolling log file
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
