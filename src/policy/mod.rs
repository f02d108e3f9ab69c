//! Movement decision logic
//!
//! A policy consumes the current snake and food and produces the next move,
//! or `None` when the snake is boxed in. The game loop treats `None` as
//! terminal.

pub mod greedy;

pub use greedy::GreedyPolicy;

use crate::game::{Cell, Move};

/// A strategy for choosing the snake's next move
///
/// Implementations must be pure: identical inputs produce identical outputs,
/// with no side effects. `snake` holds the occupied cells head-first and
/// always contains at least the head.
pub trait MovePolicy {
    fn next_move(
        &self,
        snake: &[Cell],
        food: Cell,
        board_width: i32,
        board_height: i32,
        cell_size: i32,
    ) -> Option<Move>;
}
