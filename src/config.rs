//! Command-line and environment configuration.
//!
//! Every option can also come from a `TWENTY48_*` environment variable:
//!
//! - `TWENTY48_SEED`: RNG seed (default: derived from the clock)
//! - `TWENTY48_TIMED`: timed mode, seconds on the clock
//! - `TWENTY48_SAVE_PATH`: save file location (default: `savegame.json`)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::core::SessionConfig;
use crate::save::DEFAULT_SAVE_PATH;
use crate::types::{DEFAULT_TARGET, DEFAULT_UNDO_LIMIT, MAX_TILE};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "2048 in the terminal")]
pub struct Config {
    /// RNG seed; the same seed replays the same tile spawns
    #[arg(long, env = "TWENTY48_SEED")]
    pub seed: Option<u32>,

    /// Timed mode: the game is lost when this many seconds run out
    #[arg(long, value_name = "SECS", env = "TWENTY48_TIMED", value_parser = clap::value_parser!(u32).range(1..))]
    pub timed: Option<u32>,

    /// Tile value that wins the game (a power of two, at least 4)
    #[arg(long, value_name = "TILE", default_value_t = DEFAULT_TARGET, value_parser = parse_target)]
    pub target: u32,

    /// Undo steps kept in history (0 disables undo)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_UNDO_LIMIT)]
    pub undo_limit: usize,

    /// Save file used by Ctrl-S and --load
    #[arg(long, value_name = "PATH", env = "TWENTY48_SAVE_PATH", default_value = DEFAULT_SAVE_PATH)]
    pub save_path: PathBuf,

    /// Resume the game stored in the save file
    #[arg(long)]
    pub load: bool,

    /// Write logs to this file (RUST_LOG filters, default "info")
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Session policy for this run. `fallback_seed` is used when no seed was given.
    pub fn session_config(&self, fallback_seed: u32) -> SessionConfig {
        SessionConfig {
            seed: self.seed.unwrap_or(fallback_seed),
            target: self.target,
            undo_limit: self.undo_limit,
            time_limit_ms: self.timed.map(|secs| secs.saturating_mul(1000)),
        }
    }
}

fn parse_target(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("`{}` is not a number", s))?;
    if value < 4 || value > MAX_TILE || !value.is_power_of_two() {
        return Err(format!(
            "target must be a power of two between 4 and {}",
            MAX_TILE
        ));
    }
    Ok(value)
}

/// Seed derived from the wall clock.
pub fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("tui-2048").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        // Ignore whatever the calling shell exports.
        for var in ["TWENTY48_SEED", "TWENTY48_TIMED", "TWENTY48_SAVE_PATH"] {
            std::env::remove_var(var);
        }
        let config = parse(&[]).unwrap();
        assert!(config.seed.is_none());
        assert!(config.timed.is_none());
        assert_eq!(config.save_path, PathBuf::from(DEFAULT_SAVE_PATH));
        assert_eq!(config.target, DEFAULT_TARGET);
        assert_eq!(config.undo_limit, DEFAULT_UNDO_LIMIT);
        assert!(!config.load);
        assert!(config.log_file.is_none());

        let session = config.session_config(77);
        assert_eq!(session.seed, 77);
        assert_eq!(session.target, DEFAULT_TARGET);
        assert_eq!(session.time_limit_ms, None);
    }

    #[test]
    fn explicit_options() {
        let config = parse(&[
            "--seed",
            "9",
            "--timed",
            "90",
            "--target",
            "512",
            "--undo-limit",
            "3",
            "--save-path",
            "/tmp/x.json",
            "--load",
        ])
        .unwrap();

        let session = config.session_config(1);
        assert_eq!(session.seed, 9);
        assert_eq!(session.time_limit_ms, Some(90_000));
        assert_eq!(session.target, 512);
        assert_eq!(session.undo_limit, 3);
        assert_eq!(config.save_path, PathBuf::from("/tmp/x.json"));
        assert!(config.load);
    }

    #[test]
    fn rejects_bad_target() {
        assert!(parse(&["--target", "1000"]).is_err());
        assert!(parse(&["--target", "2"]).is_err());
        assert!(parse(&["--target", "abc"]).is_err());
        assert!(parse(&["--target", "262144"]).is_err());
    }

    #[test]
    fn rejects_zero_second_timer() {
        assert!(parse(&["--timed", "0"]).is_err());
    }

    #[test]
    fn fallback_seed_used_without_flag() {
        let config = parse(&["--seed", "5"]).unwrap();
        assert_eq!(config.session_config(123).seed, 5);
    }
}
