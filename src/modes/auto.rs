//! Self-play mode
//!
//! The snake drives itself: every tick the movement policy is consulted and
//! the engine applies its decision. The tick interval follows the game tempo,
//! which speeds up as food is eaten.
//!
//! # Controls
//!
//! - Space / P: pause or resume
//! - R: restart
//! - Q / Esc / Ctrl+C: quit

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::{Instant, Interval, interval, interval_at};

use crate::game::{GameConfig, GameEngine, GameState, Phase, StepResult};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::persist::{self, ScoreBoard, ScoreEntry};
use crate::policy::{GreedyPolicy, MovePolicy};
use crate::render::Renderer;

pub struct AutoMode {
    engine: GameEngine,
    state: GameState,
    policy: GreedyPolicy,
    renderer: Renderer,
    input_handler: InputHandler,
    metrics: SessionMetrics,
    scoreboard: ScoreBoard,
    scores_path: PathBuf,
    should_quit: bool,
}

impl AutoMode {
    pub fn new(config: GameConfig, data_dir: &Path) -> Self {
        let scores_path = persist::scores_path(data_dir);
        let scoreboard = ScoreBoard::load(&scores_path).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable scoreboard: {err:#}");
            ScoreBoard::default()
        });
        let metrics = SessionMetrics::with_best(scoreboard.best().unwrap_or(0));

        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            policy: GreedyPolicy::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            metrics,
            scoreboard,
            scores_path,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Snake movement follows the game tempo
        let mut tick_timer = self.tempo_interval();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.state.is_running() {
                        let result = self.play_tick();
                        if result.ate_food {
                            // Food speeds the game up; re-arm at the new tempo
                            tick_timer = self.tempo_interval();
                        }
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// One movement decision and its consequences
    fn play_tick(&mut self) -> StepResult {
        let mv = self.policy.next_move(
            &self.state.snake.body,
            self.state.food,
            self.state.board_width,
            self.state.board_height,
            self.state.cell_size,
        );

        let result = self.engine.step(&mut self.state, mv);

        if result.game_over {
            self.finish_game();
        }

        result
    }

    /// Record the finished game on the scoreboard and session metrics
    fn finish_game(&mut self) {
        let entry = ScoreEntry::from_state(&self.state);
        log::info!(
            "game over: score {} after {} steps",
            entry.score,
            entry.steps
        );

        if self.metrics.on_game_over(entry.score) {
            log::info!("new best score: {}", entry.score);
        }

        self.scoreboard.record(entry);
        if let Err(err) = self.scoreboard.save(&self.scores_path) {
            log::warn!("could not save scoreboard: {err:#}");
        }
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::TogglePause => {
                    self.toggle_pause();
                }
                KeyAction::Restart => {
                    self.reset_game();
                    *tick_timer = self.tempo_interval();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    /// Flip between Running and Paused; a finished game stays finished
    fn toggle_pause(&mut self) {
        self.state.phase = match self.state.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::GameOver => Phase::GameOver,
        };
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
    }

    /// Interval firing at the current tempo, first tick one period from now
    fn tempo_interval(&self) -> Interval {
        interval_at(Instant::now() + self.state.tempo, self.state.tempo)
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
