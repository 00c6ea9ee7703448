//! Runtime configuration from command-line flags and `TWENTY48_*` variables.
//!
//! Every flag can also be set through the environment:
//!
//! - `TWENTY48_SIZE`: starting board size (default: 4)
//! - `TWENTY48_THEME`: `light` or `dark` (default: light)
//! - `TWENTY48_HIGHSCORE_PATH`: high-score file (default: "highscore.txt")
//! - `TWENTY48_SEED`: RNG seed for reproducible games (default: random)
//! - `TWENTY48_LOG_PATH`: log file; logging is off when unset

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::types::{Theme, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_MENU_SIZE};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
pub struct Cli {
    /// Board size preselected in the menu
    #[arg(long, env = "TWENTY48_SIZE", value_name = "N", default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Color theme preselected in the menu (light or dark)
    #[arg(long, env = "TWENTY48_THEME", default_value = "light")]
    pub theme: String,

    /// File holding the best score
    #[arg(
        long = "highscore-file",
        env = "TWENTY48_HIGHSCORE_PATH",
        value_name = "PATH",
        default_value = "highscore.txt"
    )]
    pub highscore_file: PathBuf,

    /// Seed for tile spawns (random when omitted)
    #[arg(long, env = "TWENTY48_SEED", value_name = "N")]
    pub seed: Option<u64>,

    /// Write logs to this file (RUST_LOG filters, default info)
    #[arg(long = "log-file", env = "TWENTY48_LOG_PATH", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: usize,
    pub theme: Theme,
    pub highscore_path: PathBuf,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if !(MIN_MENU_SIZE..=MAX_BOARD_SIZE).contains(&cli.size) {
            return Err(anyhow!(
                "invalid --size {}: expected {}..={}",
                cli.size,
                MIN_MENU_SIZE,
                MAX_BOARD_SIZE
            ));
        }
        let theme = Theme::from_str(cli.theme.trim())
            .ok_or_else(|| anyhow!("invalid --theme value: {} (expected light or dark)", cli.theme))?;

        Ok(Self {
            size: cli.size,
            theme,
            highscore_path: cli.highscore_file,
            seed: cli.seed,
            log_file: cli.log_file,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            theme: Theme::default(),
            highscore_path: PathBuf::from("highscore.txt"),
            seed: None,
            log_file: None,
        }
    }
}
