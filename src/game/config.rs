use std::time::Duration;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Configuration for the game
///
/// Doubles as the persisted settings document (`settings.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in pixels
    pub board_width: i32,
    /// Board height in pixels
    pub board_height: i32,
    /// Grid pitch in pixels
    pub cell_size: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    /// Starting interval between snake movements, in milliseconds
    pub initial_tempo_ms: u64,
    /// How much the interval shrinks each time food is eaten
    pub tempo_decrement_ms: u64,
    /// Floor for the movement interval
    pub min_tempo_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 800,
            board_height: 600,
            cell_size: 25,
            initial_snake_length: 3,
            initial_tempo_ms: 100,
            tempo_decrement_ms: 1,
            min_tempo_ms: 50,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn new(board_width: i32, board_height: i32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// Small board, handy in tests
    pub fn small() -> Self {
        Self::new(250, 250)
    }

    pub fn initial_tempo(&self) -> Duration {
        Duration::from_millis(self.initial_tempo_ms)
    }

    pub fn tempo_decrement(&self) -> Duration {
        Duration::from_millis(self.tempo_decrement_ms)
    }

    pub fn min_tempo(&self) -> Duration {
        Duration::from_millis(self.min_tempo_ms)
    }

    /// Validate the configuration
    ///
    /// The board must be at least one cell in each dimension, dimensions
    /// must be whole multiples of the cell size, and the tempo range must
    /// be usable.
    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            bail!("cell size must be positive, got {}", self.cell_size);
        }
        if self.board_width < self.cell_size || self.board_height < self.cell_size {
            bail!(
                "board {}x{} is smaller than one {}px cell",
                self.board_width,
                self.board_height,
                self.cell_size
            );
        }
        if self.board_width % self.cell_size != 0 || self.board_height % self.cell_size != 0 {
            bail!(
                "board {}x{} is not a multiple of the cell size {}",
                self.board_width,
                self.board_height,
                self.cell_size
            );
        }
        if self.initial_snake_length == 0 {
            bail!("initial snake length must be at least 1");
        }
        if (self.initial_snake_length as i32) > self.board_width / self.cell_size {
            bail!(
                "initial snake length {} does not fit on a board {} cells wide",
                self.initial_snake_length,
                self.board_width / self.cell_size
            );
        }
        if self.initial_tempo_ms == 0 || self.min_tempo_ms == 0 {
            bail!("tempo intervals must be positive");
        }
        if self.min_tempo_ms > self.initial_tempo_ms {
            bail!(
                "minimum tempo {}ms exceeds initial tempo {}ms",
                self.min_tempo_ms,
                self.initial_tempo_ms
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 800);
        assert_eq!(config.board_height, 600);
        assert_eq!(config.cell_size, 25);
        assert_eq!(config.initial_snake_length, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tempo_accessors() {
        let config = GameConfig::default();
        assert_eq!(config.initial_tempo(), Duration::from_millis(100));
        assert_eq!(config.tempo_decrement(), Duration::from_millis(1));
        assert_eq!(config.min_tempo(), Duration::from_millis(50));
    }

    #[test]
    fn test_validate_rejects_misaligned_board() {
        let config = GameConfig::new(810, 600);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_tiny_board() {
        let config = GameConfig::new(20, 600);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_tempo_range() {
        let config = GameConfig {
            min_tempo_ms: 200,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_snake() {
        let config = GameConfig {
            initial_snake_length: 11,
            ..GameConfig::small()
        };
        assert!(config.validate().is_err());
    }
}
