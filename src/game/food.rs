use rand::Rng;

use super::config::GameConfig;
use super::geometry::{Playfield, Position};

/// Random draws before falling back to scanning for a free cell
const RANDOM_PLACEMENT_ATTEMPTS: usize = 1024;

/// Regular or time-limited special food
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Regular,
    Special,
}

/// The single piece of food on the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    position: Position,
    kind: FoodKind,
    /// Frames left before an uneaten special food disappears
    expiry: u32,
    /// Display-only oscillator in [0, 1]
    pulse: f32,
    pulse_rising: bool,
}

impl Food {
    /// Place a fresh piece of food on a free cell
    pub fn spawn<R: Rng + ?Sized>(occupied: &[Position], config: &GameConfig, rng: &mut R) -> Self {
        let mut food = Self::regular_at(Position::default());
        food.regenerate(occupied, config, rng);
        food
    }

    /// Regular food at a fixed position
    pub fn regular_at(position: Position) -> Self {
        Self {
            position,
            kind: FoodKind::Regular,
            expiry: 0,
            pulse: 0.0,
            pulse_rising: true,
        }
    }

    /// Special food at a fixed position with `lifetime` frames to live
    pub fn special_at(position: Position, lifetime: u32) -> Self {
        Self {
            kind: FoodKind::Special,
            expiry: lifetime,
            ..Self::regular_at(position)
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    pub fn is_special(&self) -> bool {
        self.kind == FoodKind::Special
    }

    /// Frames left on special food, 0 for regular food
    pub fn expiry(&self) -> u32 {
        self.expiry
    }

    /// Brightness of the special-food glow in [0, 1]
    pub fn pulse_intensity(&self) -> f32 {
        0.5 + 0.5 * (self.pulse * std::f32::consts::PI).sin()
    }

    /// Move to a random free cell and reroll the variant
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        occupied: &[Position],
        config: &GameConfig,
        rng: &mut R,
    ) {
        let field = config.playfield();
        match free_cell(&field, occupied, rng) {
            Some(position) => self.position = position,
            // Board full: the food stays put, possibly under the snake
            None => tracing::warn!(
                position = ?self.position,
                occupied = occupied.len(),
                "no free cell for food"
            ),
        }

        self.pulse = 0.0;
        self.pulse_rising = true;
        if rng.gen_bool(config.special_food_chance.clamp(0.0, 1.0)) {
            self.kind = FoodKind::Special;
            self.expiry = config.special_food_lifetime;
        } else {
            self.kind = FoodKind::Regular;
            self.expiry = 0;
        }
    }

    /// Tick special food. Returns false once it has expired and must be
    /// regenerated; regular food is always valid.
    pub fn update(&mut self) -> bool {
        if self.kind == FoodKind::Regular {
            return true;
        }

        self.expiry = self.expiry.saturating_sub(1);

        let step = if self.pulse_rising { 0.1 } else { -0.1 };
        self.pulse += step;
        if self.pulse >= 1.0 {
            self.pulse_rising = false;
        } else if self.pulse <= 0.0 {
            self.pulse_rising = true;
        }

        self.expiry > 0
    }
}

fn free_cell<R: Rng + ?Sized>(
    field: &Playfield,
    occupied: &[Position],
    rng: &mut R,
) -> Option<Position> {
    for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
        let candidate = field.random_cell(rng);
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }

    // Nearly full board: pick uniformly among whatever is left
    let free: Vec<Position> = (0..field.rows())
        .flat_map(|row| (0..field.cols()).map(move |col| (col, row)))
        .map(|(col, row)| Position::new(col * field.cell_size, row * field.cell_size))
        .filter(|pos| !occupied.contains(pos))
        .collect();
    if free.is_empty() {
        None
    } else {
        Some(free[rng.gen_range(0..free.len())])
    }
}
