//! High-score list and its persistence.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Number of scores kept.
pub const MAX_HIGH_SCORES: usize = 10;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top scores in descending order, at most [`MAX_HIGH_SCORES`] of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    scores: Vec<u32>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a score. Returns the 1-based position it took, or `None` when
    /// it did not make the list. Ties go after the scores already present.
    pub fn insert(&mut self, score: u32) -> Option<usize> {
        let idx = self.scores.partition_point(|&s| s >= score);
        if idx >= MAX_HIGH_SCORES {
            return None;
        }
        self.scores.insert(idx, score);
        self.scores.truncate(MAX_HIGH_SCORES);
        Some(idx + 1)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn best(&self) -> Option<u32> {
        self.scores.first().copied()
    }
}

impl From<Vec<u32>> for HighScores {
    fn from(mut scores: Vec<u32>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_HIGH_SCORES);
        Self { scores }
    }
}

/// Where finished games' scores are kept.
pub trait ScoreStore: fmt::Debug {
    fn load(&self) -> Result<HighScores, ScoreError>;
    fn save(&mut self, scores: &HighScores) -> Result<(), ScoreError>;

    /// Load, insert, save. Returns the updated list and the position reached.
    fn record(&mut self, score: u32) -> Result<(HighScores, Option<usize>), ScoreError> {
        let mut scores = self.load()?;
        let position = scores.insert(score);
        if position.is_some() {
            self.save(&scores)?;
        }
        log::info!("recorded score {score}: position {position:?}");
        Ok((scores, position))
    }
}

/// In-process store; forgotten when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scores: HighScores,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<HighScores, ScoreError> {
        Ok(self.scores.clone())
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), ScoreError> {
        self.scores = scores.clone();
        Ok(())
    }
}

/// Scores as a JSON array of numbers in a file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<HighScores, ScoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no score file at {}", self.path.display());
                return Ok(HighScores::new());
            }
            Err(e) => return Err(e.into()),
        };
        let scores: Vec<u32> = serde_json::from_str(&text)?;
        Ok(HighScores::from(scores))
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), ScoreError> {
        let text = serde_json::to_string(scores.as_slice())?;
        fs::write(&self.path, text)?;
        log::debug!("saved {} scores to {}", scores.len(), self.path.display());
        Ok(())
    }
}
