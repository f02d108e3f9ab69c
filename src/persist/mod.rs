//! Score and settings persistence
//!
//! Both documents are plain JSON files under a data directory. Persistence
//! failures are never fatal to the game: callers log and keep playing.

pub mod scores;
pub mod settings;

pub use scores::{ScoreBoard, ScoreEntry};

use std::path::{Path, PathBuf};

pub fn scores_path(data_dir: &Path) -> PathBuf {
    data_dir.join("scores.json")
}

pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.json")
}
