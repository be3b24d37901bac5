use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::{args::Args, db, ledger::PLAYER_COUNT};

/// Presets are bound to F1..F9.
pub const MAX_PRESETS: usize = 9;

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub players: [String; PLAYER_COUNT],
    pub presets: Vec<u64>,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let names: Vec<String> = args.players.iter().map(|n| n.trim().to_string()).collect();
        if names.iter().any(String::is_empty) {
            bail!("player names must not be empty");
        }
        let players: [String; PLAYER_COUNT] = names
            .try_into()
            .map_err(|names: Vec<String>| {
                anyhow::anyhow!("expected {} player names, got {}", PLAYER_COUNT, names.len())
            })?;

        if args.presets.is_empty() || args.presets.len() > MAX_PRESETS {
            bail!("between 1 and {} timer presets are required", MAX_PRESETS);
        }
        if args.presets.contains(&0) {
            bail!("timer presets must be positive");
        }

        let db_path = match args.db {
            Some(path) => path,
            None => db::get_db_path().context("Failed to resolve database location")?,
        };

        Ok(Self {
            players,
            presets: args.presets,
            db_path,
            log_dir: args.log_dir,
            log_level: args.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Result<Config> {
        let mut full = vec!["tile-tally", "--db", "/tmp/tally-test.db"];
        full.extend_from_slice(argv);
        Config::from_args(Args::try_parse_from(full)?)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.players, ["DB", "Bo", "Steve"].map(String::from));
        assert_eq!(config.presets, vec![60, 120, 180]);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.db_path, PathBuf::from("/tmp/tally-test.db"));
    }

    #[test]
    fn test_custom_players_and_presets() {
        let config = parse(&["--players", "Ann, Ben ,Cy", "--presets", "30,90"]).unwrap();
        assert_eq!(config.players, ["Ann", "Ben", "Cy"].map(String::from));
        assert_eq!(config.presets, vec![30, 90]);
    }

    #[test]
    fn test_wrong_player_count_rejected() {
        assert!(parse(&["--players", "Ann,Ben"]).is_err());
        assert!(parse(&["--players", "A,B,C,D"]).is_err());
    }

    #[test]
    fn test_blank_player_rejected() {
        assert!(parse(&["--players", "Ann,,Cy"]).is_err());
    }

    #[test]
    fn test_zero_preset_rejected() {
        assert!(parse(&["--presets", "60,0"]).is_err());
    }

    #[test]
    fn test_too_many_presets_rejected() {
        assert!(parse(&["--presets", "1,2,3,4,5,6,7,8,9,10"]).is_err());
    }
}
