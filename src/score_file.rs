#![cfg(feature = "std")]

//! Best score kept in a small bincode file between runs.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::score::ScoreStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct ScoreRecord {
    best: Option<u32>,
}

/// [`ScoreStore`] backed by a file on disk. A missing file means no best
/// score yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.broadside_best`, or the working directory without a home.
    pub fn default_location() -> Self {
        let dir = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(".broadside_best"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Forget the stored best score.
    pub fn reset(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => {
                Err(e).with_context(|| format!("removing {}", self.path.display()))
            }
            _ => Ok(()),
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn load_best(&self) -> anyhow::Result<Option<u32>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let record: ScoreRecord = bincode::deserialize(&bytes)
            .with_context(|| format!("decoding {}", self.path.display()))?;
        Ok(record.best)
    }

    fn save_best(&mut self, score: u32) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let bytes = bincode::serialize(&ScoreRecord { best: Some(score) })?;
        fs::write(&self.path, bytes).with_context(|| format!("writing {}", self.path.display()))
    }
}
