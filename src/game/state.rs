use std::time::Duration;

use super::config::GameConfig;
use super::moves::Move;

/// A grid-aligned position on the board, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell reached by applying a move on a grid of the given cell size
    pub fn moved(&self, mv: Move, cell_size: i32) -> Self {
        let (dx, dy) = mv.delta(cell_size);
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance to another cell, in pixels
    pub fn manhattan_distance(&self, other: Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// The snake: ordered body segments with the head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Cell>,
}

impl Snake {
    /// Create a snake of the given length with its body extending to the
    /// left of the head, ready to move right.
    pub fn new(head: Cell, length: usize, cell_size: i32) -> Self {
        let body = (0..length as i32)
            .map(|i| Cell::new(head.x - i * cell_size, head.y))
            .collect();

        Self { body }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Body segments excluding the head. This is the obstacle set for the
    /// movement policy: the head cell itself is vacated on the next tick.
    pub fn segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Advance one cell in the direction of `mv`, growing by one segment
    /// when `grow` is set.
    pub fn advance(&mut self, mv: Move, cell_size: i32, grow: bool) {
        let new_head = self.head().moved(mv, cell_size);
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The snake is moving; the policy is consulted every tick
    Running,
    /// Ticks are frozen; rendering continues
    Paused,
    /// Terminal: the policy found no legal move
    GameOver,
}

/// Complete game state, owned by the engine and read by the renderer
/// and the movement policy
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub board_width: i32,
    pub board_height: i32,
    pub cell_size: i32,
    pub score: u32,
    pub steps: u32,
    /// Minimum interval between snake movements; shrinks as food is eaten
    pub tempo: Duration,
    pub phase: Phase,
}

impl GameState {
    pub fn new(snake: Snake, food: Cell, config: &GameConfig) -> Self {
        Self {
            snake,
            food,
            board_width: config.board_width,
            board_height: config.board_height,
            cell_size: config.cell_size,
            score: 0,
            steps: 0,
            tempo: config.initial_tempo(),
            phase: Phase::Running,
        }
    }

    /// Check if a cell is within the board bounds
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.board_width && cell.y >= 0 && cell.y < self.board_height
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Board width in cells, for rendering
    pub fn grid_width(&self) -> i32 {
        self.board_width / self.cell_size
    }

    /// Board height in cells, for rendering
    pub fn grid_height(&self) -> i32 {
        self.board_height / self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_moved() {
        let cell = Cell::new(100, 100);
        assert_eq!(cell.moved(Move::Right, 25), Cell::new(125, 100));
        assert_eq!(cell.moved(Move::Left, 25), Cell::new(75, 100));
        assert_eq!(cell.moved(Move::Down, 25), Cell::new(100, 125));
        assert_eq!(cell.moved(Move::Up, 25), Cell::new(100, 75));
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Cell::new(100, 100);
        assert_eq!(a.manhattan_distance(Cell::new(125, 100)), 25);
        assert_eq!(a.manhattan_distance(Cell::new(75, 150)), 75);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(100, 100), 3, 25);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(100, 100));
        assert_eq!(snake.body[1], Cell::new(75, 100));
        assert_eq!(snake.body[2], Cell::new(50, 100));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Cell::new(100, 100), 3, 25);

        snake.advance(Move::Right, 25, false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(125, 100));

        snake.advance(Move::Down, 25, true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(125, 125));
    }

    #[test]
    fn test_segments_exclude_head() {
        let snake = Snake::new(Cell::new(100, 100), 3, 25);
        assert!(!snake.segments().contains(&Cell::new(100, 100)));
        assert!(snake.segments().contains(&Cell::new(75, 100)));
        assert!(snake.occupies(Cell::new(100, 100)));
    }

    #[test]
    fn test_bounds_checking() {
        let config = GameConfig::default();
        let state = GameState::new(
            Snake::new(Cell::new(100, 100), 3, 25),
            Cell::new(200, 200),
            &config,
        );

        assert!(state.is_in_bounds(Cell::new(0, 0)));
        assert!(state.is_in_bounds(Cell::new(775, 575)));
        assert!(!state.is_in_bounds(Cell::new(-25, 0)));
        assert!(!state.is_in_bounds(Cell::new(800, 0)));
        assert!(!state.is_in_bounds(Cell::new(0, 600)));
    }

    #[test]
    fn test_grid_dimensions() {
        let config = GameConfig::default();
        let state = GameState::new(
            Snake::new(Cell::new(100, 100), 3, 25),
            Cell::new(200, 200),
            &config,
        );

        assert_eq!(state.grid_width(), 32);
        assert_eq!(state.grid_height(), 24);
    }
}
