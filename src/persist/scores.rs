use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::game::GameState;

/// Number of entries the scoreboard keeps
pub const SCOREBOARD_CAPACITY: usize = 10;

/// One finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub snake_length: usize,
    pub steps: u32,
    pub recorded_at: DateTime<Utc>,
}

impl ScoreEntry {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            snake_length: state.snake.len(),
            steps: state.steps,
            recorded_at: Utc::now(),
        }
    }
}

/// Best scores of past games, highest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    /// Load the scoreboard from a JSON file
    ///
    /// A missing file is an empty board, not an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scores from {:?}", path))?;
        let board: Self =
            serde_json::from_str(&json).context("Failed to deserialize scoreboard")?;

        Ok(board)
    }

    /// Write the scoreboard as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize scoreboard")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write scores to {:?}", path))?;

        Ok(())
    }

    /// Insert an entry, keeping the board sorted by score and capped at
    /// [`SCOREBOARD_CAPACITY`]
    pub fn record(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(SCOREBOARD_CAPACITY);
    }

    /// Highest recorded score, if any games have been played
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|entry| entry.score)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
