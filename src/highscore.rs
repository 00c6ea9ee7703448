//! Best-score persistence: one text-encoded integer in a file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score
    ///
    /// A missing, unreadable or corrupt file counts as 0; it never fails.
    pub fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return 0,
            Err(e) => {
                warn!("high score: cannot read {}: {}", self.path.display(), e);
                return 0;
            }
        };

        match text.trim().parse::<u32>() {
            Ok(score) => {
                debug!("high score: loaded {} from {}", score, self.path.display());
                score
            }
            Err(e) => {
                warn!(
                    "high score: ignoring corrupt {} ({:?}): {}",
                    self.path.display(),
                    text.trim(),
                    e
                );
                0
            }
        }
    }

    /// Overwrite the file with `score`, creating parent directories as needed.
    pub fn save(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("writing high score to {}", self.path.display()))?;
        debug!("high score: saved {} to {}", score, self.path.display());
        Ok(())
    }
}
