//! Logger setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so log records can only go to a file. Without one no logger is installed
//! and every `log` macro is a no-op.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target, WriteStyle};

/// Install `env_logger` writing to `log_file`; `RUST_LOG` overrides the `info` default.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .try_init()
        .context("installing logger")?;
    Ok(())
}
