//! Snake Hunt - a terminal Snake game where predators hunt the snake
//!
//! This library provides:
//! - Core game logic (game module): snake, food, predators, difficulty
//! - Keyboard mapping (input module)
//! - TUI rendering and colour schemes (render module)
//! - High score and settings storage (persistence module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod render;
