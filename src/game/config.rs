use anyhow::{Result, bail, ensure};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Playfield;
use super::predator::PredatorKind;

/// Inclusive range of frames a countdown is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameWindow {
    pub min: i32,
    pub max: i32,
}

impl FrameWindow {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Draw a countdown uniformly from the window
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

/// What eating one piece of food is worth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodReward {
    pub score: u32,
    pub growth: usize,
    pub boost_charges: u32,
}

/// Tuning shared by a predator kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredatorProfile {
    /// Bounding box edge as a multiple of the cell size
    pub size_factor: f32,
    /// Speed at score 0 and anger 1 (the dive speed for circle-and-dive)
    pub base_speed: f32,
    /// Score points per unit of extra speed
    pub score_divisor: f32,
    /// Upper bound on the score contribution to speed
    pub score_cap: f32,
    /// Extra speed per anger level above 1
    pub anger_step: f32,
    /// Countdown before the first appearance of a game
    pub initial_spawn: FrameWindow,
    /// Countdown after drifting off the playfield
    pub respawn: FrameWindow,
}

/// Steering constants of the erratic pursuer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErraticTuning {
    /// Fraction of the bearing error corrected per frame
    pub turn_rate: f32,
    /// Half-width of the uniform heading jitter, in radians
    pub jitter: f32,
}

/// Orbit and dive constants of the circle-and-dive predator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiveTuning {
    pub orbit_radius: f32,
    /// Radians added to the orbit angle per frame
    pub orbit_speed: f32,
    /// Per-frame probability of starting a dive
    pub dive_chance: f64,
    /// Distance at which a dive counts as finished
    pub arrive_distance: f32,
}

/// Score thresholds driving predator availability and spawn pressure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTuning {
    /// Erratic pursuit joins once the score exceeds this
    pub erratic_threshold: u32,
    /// Circle-and-dive joins once the score exceeds this
    pub dive_threshold: u32,
    /// A second simultaneous predator is allowed above this score
    pub second_slot_threshold: u32,
    /// A third simultaneous predator is allowed above this score
    pub third_slot_threshold: u32,
    /// Score that adds one extra spawn countdown decrement per frame
    pub spawn_acceleration_divisor: f32,
    pub max_anger: u8,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playfield in units
    pub playfield_width: i32,
    /// Height of the playfield in units
    pub playfield_height: i32,
    /// Edge length of one grid cell in units
    pub cell_size: i32,

    /// Frames per second at the start of a game
    pub initial_frame_rate: f32,
    /// Frame rate gained per food eaten
    pub frame_rate_step: f32,
    pub max_frame_rate: f32,
    /// Frame rate outside of play (menu, pause, death animation)
    pub idle_frame_rate: f32,

    pub max_boost_charge: u32,
    /// Frames a single boost lasts
    pub boost_duration: u32,

    pub special_food_chance: f64,
    /// Frames an uneaten special food stays on the field
    pub special_food_lifetime: u32,
    pub regular_food: FoodReward,
    pub special_food: FoodReward,

    /// How far outside the playfield an active predator may wander
    pub offscreen_margin: f32,
    /// Respawn countdown after the snake boosts through a predator
    pub escape_respawn: FrameWindow,
    /// Respawn countdown after a predator runs into the body
    pub repel_respawn: FrameWindow,

    pub direct: PredatorProfile,
    pub erratic: PredatorProfile,
    pub diver: PredatorProfile,
    pub erratic_tuning: ErraticTuning,
    pub dive_tuning: DiveTuning,
    pub difficulty: DifficultyTuning,

    /// Countdown to the snake's first taunt
    pub first_taunt: FrameWindow,
    /// Countdown between later taunts
    pub taunt_interval: FrameWindow,

    /// Frames of death animation before the game-over choice opens
    pub death_animation_frames: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: 800,
            playfield_height: 600,
            cell_size: 20,
            initial_frame_rate: 8.0,
            frame_rate_step: 0.25,
            max_frame_rate: 25.0,
            idle_frame_rate: 60.0,
            max_boost_charge: 5,
            boost_duration: 30,
            special_food_chance: 0.1,
            special_food_lifetime: 150,
            regular_food: FoodReward {
                score: 1,
                growth: 1,
                boost_charges: 1,
            },
            special_food: FoodReward {
                score: 5,
                growth: 3,
                boost_charges: 2,
            },
            offscreen_margin: 200.0,
            escape_respawn: FrameWindow::new(200, 400),
            repel_respawn: FrameWindow::new(300, 500),
            direct: PredatorProfile {
                size_factor: 1.5,
                base_speed: 2.5,
                score_divisor: 25.0,
                score_cap: 2.0,
                anger_step: 0.5,
                initial_spawn: FrameWindow::new(100, 300),
                respawn: FrameWindow::new(300, 600),
            },
            erratic: PredatorProfile {
                size_factor: 1.2,
                base_speed: 3.5,
                score_divisor: 30.0,
                score_cap: 1.5,
                anger_step: 0.5,
                initial_spawn: FrameWindow::new(300, 500),
                respawn: FrameWindow::new(500, 800),
            },
            diver: PredatorProfile {
                size_factor: 1.3,
                base_speed: 8.0,
                score_divisor: 20.0,
                score_cap: 4.0,
                anger_step: 1.0,
                initial_spawn: FrameWindow::new(500, 700),
                respawn: FrameWindow::new(700, 1000),
            },
            erratic_tuning: ErraticTuning {
                turn_rate: 0.1,
                jitter: 0.1,
            },
            dive_tuning: DiveTuning {
                orbit_radius: 150.0,
                orbit_speed: 0.02,
                dive_chance: 0.01,
                arrive_distance: 5.0,
            },
            difficulty: DifficultyTuning {
                erratic_threshold: 5,
                dive_threshold: 15,
                second_slot_threshold: 10,
                third_slot_threshold: 20,
                spawn_acceleration_divisor: 50.0,
                max_anger: 4,
            },
            first_taunt: FrameWindow::new(240, 360),
            taunt_interval: FrameWindow::new(180, 240),
            death_animation_frames: 60,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size in cells
    pub fn new(width: usize, height: usize) -> Self {
        let defaults = Self::default();
        Self {
            playfield_width: width as i32 * defaults.cell_size,
            playfield_height: height as i32 * defaults.cell_size,
            ..defaults
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(60, 45)
    }

    /// Replace the cell size while keeping the grid dimensions in cells
    pub fn with_cell_size(mut self, cell_size: i32) -> Self {
        let cols = self.playfield_width / self.cell_size;
        let rows = self.playfield_height / self.cell_size;
        self.cell_size = cell_size.max(1);
        self.playfield_width = cols * self.cell_size;
        self.playfield_height = rows * self.cell_size;
        self
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height, self.cell_size)
    }

    pub fn profile(&self, kind: PredatorKind) -> &PredatorProfile {
        match kind {
            PredatorKind::DirectPursuit => &self.direct,
            PredatorKind::ErraticPursuit => &self.erratic,
            PredatorKind::CircleAndDive => &self.diver,
        }
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be positive, got {}", self.cell_size);
        ensure!(
            self.playfield_width >= self.cell_size && self.playfield_height >= self.cell_size,
            "playfield {}x{} is smaller than one {} unit cell",
            self.playfield_width,
            self.playfield_height,
            self.cell_size
        );
        ensure!(
            self.initial_frame_rate > 0.0 && self.max_frame_rate > 0.0 && self.idle_frame_rate > 0.0,
            "frame rates must be positive"
        );

        let windows = [
            ("escape_respawn", self.escape_respawn),
            ("repel_respawn", self.repel_respawn),
            ("direct.initial_spawn", self.direct.initial_spawn),
            ("direct.respawn", self.direct.respawn),
            ("erratic.initial_spawn", self.erratic.initial_spawn),
            ("erratic.respawn", self.erratic.respawn),
            ("diver.initial_spawn", self.diver.initial_spawn),
            ("diver.respawn", self.diver.respawn),
            ("first_taunt", self.first_taunt),
            ("taunt_interval", self.taunt_interval),
        ];
        for (name, window) in windows {
            if window.min > window.max {
                bail!("{name}: min {} is greater than max {}", window.min, window.max);
            }
        }
        Ok(())
    }
}
