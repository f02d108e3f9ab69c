use rand::Rng;

use super::{
    config::GameConfig,
    moves::Move,
    state::{Cell, GameState, Phase, Snake},
};

/// Result of advancing the game by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether the game is (now) over
    pub game_over: bool,
}

/// The game engine: owns the configuration and the food RNG, and applies
/// moves chosen by a policy to the game state
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh game: snake mid-board heading right, food placed
    pub fn reset(&mut self) -> GameState {
        let cell = self.config.cell_size;
        let head = Cell::new(
            self.config.board_width / cell / 2 * cell,
            self.config.board_height / cell / 2 * cell,
        );

        let snake = Snake::new(head, self.config.initial_snake_length, cell);
        let food = self.spawn_food(&snake);

        GameState::new(snake, food, &self.config)
    }

    /// Apply one tick. `mv` is the policy's decision; `None` means no legal
    /// move exists and the game ends without the snake moving.
    pub fn step(&mut self, state: &mut GameState, mv: Option<Move>) -> StepResult {
        if state.is_over() {
            return StepResult {
                ate_food: false,
                game_over: true,
            };
        }

        let Some(mv) = mv else {
            state.phase = Phase::GameOver;
            return StepResult {
                ate_food: false,
                game_over: true,
            };
        };

        let new_head = state.snake.head().moved(mv, state.cell_size);

        // The policy only proposes safe moves, but an engine caller is not
        // required to be a policy. An unsafe move ends the game.
        if !state.is_in_bounds(new_head) || state.snake.segments().contains(&new_head) {
            state.phase = Phase::GameOver;
            state.steps += 1;
            return StepResult {
                ate_food: false,
                game_over: true,
            };
        }

        let ate_food = new_head == state.food;
        state.snake.advance(mv, state.cell_size, ate_food);
        state.steps += 1;

        if ate_food {
            state.score += 1;
            state.food = self.spawn_food(&state.snake);
            state.tempo = state
                .tempo
                .saturating_sub(self.config.tempo_decrement())
                .max(self.config.min_tempo());
        }

        StepResult {
            ate_food,
            game_over: false,
        }
    }

    /// Spawn food at a random grid-aligned cell not occupied by the snake
    fn spawn_food(&mut self, snake: &Snake) -> Cell {
        let cell = self.config.cell_size;
        let cols = self.config.board_width / cell;
        let rows = self.config.board_height / cell;

        loop {
            let pos = Cell::new(
                self.rng.gen_range(0..cols) * cell,
                self.rng.gen_range(0..rows) * cell,
            );

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}
