//! One-step greedy heuristic
//!
//! Each tick, the four candidate moves are scored by the Manhattan distance
//! from the resulting head cell to the food, and the closest safe one wins.
//! There is no lookahead: the snake can steer itself into a pocket it cannot
//! leave. That is an accepted limitation of the heuristic.

use crate::game::{Cell, Move};

use super::MovePolicy;

/// Greedy distance-minimizing movement policy
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl MovePolicy for GreedyPolicy {
    fn next_move(
        &self,
        snake: &[Cell],
        food: Cell,
        board_width: i32,
        board_height: i32,
        cell_size: i32,
    ) -> Option<Move> {
        next_move(snake, food, board_width, board_height, cell_size)
    }
}

/// Choose the next move for the snake
///
/// Candidates are evaluated in the fixed order right, left, down, up; among
/// the safe ones, the first seen at minimal Manhattan distance to the food
/// wins. If the distance pass comes up empty, any safe candidate in the same
/// order is taken. Returns `None` when all four are blocked, which the
/// caller must treat as game over.
pub fn next_move(
    snake: &[Cell],
    food: Cell,
    board_width: i32,
    board_height: i32,
    cell_size: i32,
) -> Option<Move> {
    let head = snake[0];
    let body = &snake[1..];

    let mut best_move = None;
    let mut min_distance = i32::MAX;

    for mv in Move::CANDIDATES {
        let new_head = head.moved(mv, cell_size);

        if !is_safe(new_head, body, board_width, board_height) {
            continue;
        }

        let distance = new_head.manhattan_distance(food);
        if distance < min_distance {
            min_distance = distance;
            best_move = Some(mv);
        }
    }

    // Fall back to the first safe candidate when the distance pass found none
    if best_move.is_none() {
        for mv in Move::CANDIDATES {
            let new_head = head.moved(mv, cell_size);
            if is_safe(new_head, body, board_width, board_height) {
                return Some(mv);
            }
        }
    }

    best_move
}

/// A cell is safe when it lies on the board and is not covered by a body
/// segment. The head is not part of `body`: it vacates its cell this tick.
fn is_safe(cell: Cell, body: &[Cell], board_width: i32, board_height: i32) -> bool {
    if cell.x < 0 || cell.x >= board_width || cell.y < 0 || cell.y >= board_height {
        return false;
    }

    !body.contains(&cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: i32 = 800;
    const HEIGHT: i32 = 600;
    const CELL: i32 = 25;

    fn choose(snake: &[Cell], food: Cell) -> Option<Move> {
        next_move(snake, food, WIDTH, HEIGHT, CELL)
    }

    #[test]
    fn test_moves_toward_adjacent_food() {
        // Food one cell to the right: moving right reaches distance zero
        let snake = [Cell::new(100, 100)];
        assert_eq!(choose(&snake, Cell::new(125, 100)), Some(Move::Right));
    }

    #[test]
    fn test_result_is_safe() {
        let snake = [
            Cell::new(100, 100),
            Cell::new(75, 100),
            Cell::new(50, 100),
        ];
        let mv = choose(&snake, Cell::new(500, 300)).unwrap();
        let new_head = snake[0].moved(mv, CELL);

        assert!(new_head.x >= 0 && new_head.x < WIDTH);
        assert!(new_head.y >= 0 && new_head.y < HEIGHT);
        assert!(!snake[1..].contains(&new_head));
    }

    #[test]
    fn test_minimal_distance_among_safe_candidates() {
        let snake = [Cell::new(100, 100), Cell::new(75, 100)];
        let food = Cell::new(300, 400);

        let chosen = choose(&snake, food).unwrap();
        let chosen_distance = snake[0].moved(chosen, CELL).manhattan_distance(food);

        for mv in Move::CANDIDATES {
            let new_head = snake[0].moved(mv, CELL);
            let in_bounds =
                new_head.x >= 0 && new_head.x < WIDTH && new_head.y >= 0 && new_head.y < HEIGHT;
            if in_bounds && !snake[1..].contains(&new_head) {
                assert!(chosen_distance <= new_head.manhattan_distance(food));
            }
        }
    }

    #[test]
    fn test_tie_breaks_to_earlier_candidate() {
        // Food up-right of the head: right and up both leave distance 25,
        // and right comes first in the candidate order
        let snake = [Cell::new(100, 100)];
        let food = Cell::new(125, 75);
        assert_eq!(choose(&snake, food), Some(Move::Right));
    }

    #[test]
    fn test_single_safe_candidate_wins_regardless_of_distance() {
        // Head in the top-left corner, body on its right: left and up leave
        // the board, right is occupied. Down is the only legal move and is
        // taken even though it walks away from the food.
        let snake = [Cell::new(0, 0), Cell::new(25, 0)];
        let food = Cell::new(600, 0);
        assert_eq!(choose(&snake, food), Some(Move::Down));
    }

    #[test]
    fn test_tie_among_remaining_candidates_after_body_blocks() {
        // Right and down are body cells; left and up both leave distance 75
        // to the food, and left is evaluated first
        let snake = [
            Cell::new(100, 100),
            Cell::new(125, 100),
            Cell::new(125, 125),
            Cell::new(100, 125),
        ];
        let food = Cell::new(150, 100);

        assert_eq!(choose(&snake, food), Some(Move::Left));
    }

    #[test]
    fn test_boxed_in_returns_none() {
        // Head surrounded on all four sides by its own body
        let snake = [
            Cell::new(100, 100),
            Cell::new(125, 100),
            Cell::new(75, 100),
            Cell::new(100, 125),
            Cell::new(100, 75),
        ];
        assert_eq!(choose(&snake, Cell::new(300, 300)), None);
    }

    #[test]
    fn test_corner_boxed_by_walls_and_body() {
        // Top-left corner: up and left leave the board, right and down are
        // body cells
        let snake = [
            Cell::new(0, 0),
            Cell::new(25, 0),
            Cell::new(25, 25),
            Cell::new(0, 25),
        ];
        assert_eq!(choose(&snake, Cell::new(300, 300)), None);
    }

    #[test]
    fn test_wall_excludes_candidate() {
        // Head on the leftmost column with food straight up: left is out of
        // bounds, so only right, down and up compete. Up is closest.
        let snake = [Cell::new(0, 100)];
        let food = Cell::new(0, 50);

        let mv = choose(&snake, food).unwrap();
        assert_ne!(mv, Move::Left);
        assert_eq!(mv, Move::Up);
    }

    #[test]
    fn test_pure_function() {
        let snake = [Cell::new(100, 100), Cell::new(75, 100)];
        let food = Cell::new(200, 450);

        let first = choose(&snake, food);
        let second = choose(&snake, food);
        assert_eq!(first, second);
    }

    #[test]
    fn test_head_cell_is_not_an_obstacle() {
        // A length-one snake has no body, so every in-bounds neighbor is legal
        let snake = [Cell::new(400, 300)];
        assert!(choose(&snake, Cell::new(0, 0)).is_some());
    }

    #[test]
    fn test_policy_trait_object() {
        let policy: &dyn MovePolicy = &GreedyPolicy::new();
        let snake = [Cell::new(100, 100)];
        assert_eq!(
            policy.next_move(&snake, Cell::new(125, 100), WIDTH, HEIGHT, CELL),
            Some(Move::Right)
        );
    }
}
