use std::time::{Duration, Instant};

use crate::game::{DeathCause, PredatorKind};

/// Session statistics shown alongside the playfield
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub games_played: u32,
    pub best_session_score: u32,
    /// Deaths per predator kind, indexed by [`PredatorKind::index`]
    pub predator_deaths: [u32; 3],
    pub escapes: u32,
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            games_played: 0,
            best_session_score: 0,
            predator_deaths: [0; 3],
            escapes: 0,
            running: false,
        }
    }

    /// Advance the clock; frozen outside of play
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    /// Stop the clock while paused
    pub fn pause(&mut self) {
        self.update();
        self.running = false;
    }

    pub fn resume(&mut self) {
        let now = Instant::now();
        self.start_time = now.checked_sub(self.elapsed_time).unwrap_or(now);
        self.running = true;
    }

    pub fn on_escape(&mut self) {
        self.escapes += 1;
    }

    pub fn on_game_over(&mut self, final_score: u32, cause: DeathCause) {
        self.update();
        self.running = false;
        self.games_played += 1;
        if final_score > self.best_session_score {
            self.best_session_score = final_score;
        }
        if let DeathCause::Predator(kind) = cause {
            self.predator_deaths[kind.index()] += 1;
        }
    }

    pub fn deaths_by(&self, kind: PredatorKind) -> u32 {
        self.predator_deaths[kind.index()]
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
