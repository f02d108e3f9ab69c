use std::time::{Duration, Instant};

/// Counters shown in the HUD across games of one session
pub struct SessionMetrics {
    pub started_at: Instant,
    pub elapsed: Duration,
    pub games_played: u32,
    /// Best score seen, seeded from the persisted scoreboard at startup
    pub best_score: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::with_best(0)
    }

    pub fn with_best(best_score: u32) -> Self {
        Self {
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            games_played: 0,
            best_score,
        }
    }

    /// Refresh the elapsed clock; called from the render timer
    pub fn update(&mut self) {
        self.elapsed = self.started_at.elapsed();
    }

    /// Restart the per-game clock
    pub fn on_game_start(&mut self) {
        self.started_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    /// Record a finished game; returns true when the score is a new best
    pub fn on_game_over(&mut self, final_score: u32) -> bool {
        self.games_played += 1;

        if final_score > self.best_score {
            self.best_score = final_score;
            return true;
        }

        false
    }

    /// Elapsed time as MM:SS for the HUD
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
