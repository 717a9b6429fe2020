use super::difficulty::DifficultyController;
use super::food::Food;
use super::geometry::Playfield;
use super::predator::{Predator, PredatorKind};
use super::snake::Snake;

/// Top-level phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Complete game state
///
/// Renderers read this after each step; only the engine mutates it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    /// One predator per kind, in [`PredatorKind::ALL`] order
    pub predators: Vec<Predator>,
    pub difficulty: DifficultyController,
    pub field: Playfield,
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    /// Set once this game's score has passed the record it started against
    pub beat_high_score: bool,
    /// Frames simulated while playing
    pub frames: u64,
    /// Snake moves per second before boost
    pub speed: f32,
    /// Frames until the snake taunts a predator
    pub taunt_timer: i32,
    /// Frames of death animation played so far
    pub death_frames: u32,
    pub death_animation_frames: u32,
    pub idle_frame_rate: f32,
}

impl GameState {
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// How many times per second the step should run right now
    pub fn frame_rate(&self) -> f32 {
        match self.phase {
            Phase::Playing if self.snake.is_boost_active() => self.speed * 2.0,
            Phase::Playing => self.speed,
            _ => self.idle_frame_rate,
        }
    }

    pub fn predator(&self, kind: PredatorKind) -> Option<&Predator> {
        self.predators.iter().find(|p| p.kind() == kind)
    }

    pub fn predator_mut(&mut self, kind: PredatorKind) -> Option<&mut Predator> {
        self.predators.iter_mut().find(|p| p.kind() == kind)
    }

    pub fn active_predators(&self) -> impl Iterator<Item = &Predator> {
        self.predators.iter().filter(|p| p.is_active())
    }

    pub fn death_animation_finished(&self) -> bool {
        self.phase == Phase::GameOver && self.death_frames >= self.death_animation_frames
    }

    /// True when this game strictly beat the record it started with
    pub fn is_new_high_score(&self) -> bool {
        self.beat_high_score
    }
}
