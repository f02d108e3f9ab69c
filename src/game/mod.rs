//! Core game logic for the self-playing snake
//!
//! No I/O or rendering dependencies live here; the board, snake, food and
//! tick semantics can be driven programmatically.

pub mod config;
pub mod engine;
pub mod moves;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult};
pub use moves::Move;
pub use state::{Cell, GameState, Phase, Snake};
