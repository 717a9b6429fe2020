//! Core game logic for Snake Hunt
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front-end drives it one [`GameEngine::step`] per frame.

pub mod action;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod food;
pub mod geometry;
pub mod predator;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction, GameOverChoice};
pub use config::{FoodReward, FrameWindow, GameConfig, PredatorProfile};
pub use difficulty::{DifficultyController, DifficultyLevel};
pub use engine::{DeathCause, GameEngine, StepEvent, StepResult};
pub use food::{Food, FoodKind};
pub use geometry::{Playfield, Point, Position};
pub use predator::{Behavior, Predator, PredatorKind};
pub use snake::Snake;
pub use state::{GameState, Phase};
