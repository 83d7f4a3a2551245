/// Storage for the single best (lowest) number of shots a player needed to win.
pub trait ScoreStore {
    /// The stored best score, or `None` if nobody has won yet.
    fn load_best(&self) -> anyhow::Result<Option<u32>>;

    /// Overwrite the stored best score.
    fn save_best(&mut self, score: u32) -> anyhow::Result<()>;
}

/// Keeps the best score for the lifetime of the process only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoryScoreStore {
    best: Option<u32>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best: Some(best) }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best(&self) -> anyhow::Result<Option<u32>> {
        Ok(self.best)
    }

    fn save_best(&mut self, score: u32) -> anyhow::Result<()> {
        self.best = Some(score);
        Ok(())
    }
}
