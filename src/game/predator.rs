//! Predators hunting the snake.
//!
//! Every predator shares one spawn/despawn state machine and differs only in
//! how it moves and when it may strike. The variant state lives in
//! [`Behavior`]; [`Predator::update`] dispatches on it once per frame.

use rand::Rng;

use super::config::{DiveTuning, ErraticTuning, FrameWindow, GameConfig};
use super::geometry::{wrap_angle, Edge, Playfield, Point, Position};

/// The three kinds of predator, one instance of each per game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredatorKind {
    /// Flies straight at the snake's head
    DirectPursuit,
    /// Chases along a twitchy, gradually corrected heading
    ErraticPursuit,
    /// Orbits the head and occasionally dives at where it was
    CircleAndDive,
}

impl PredatorKind {
    pub const ALL: [PredatorKind; 3] = [
        PredatorKind::DirectPursuit,
        PredatorKind::ErraticPursuit,
        PredatorKind::CircleAndDive,
    ];

    /// Stable slot used for per-kind tables
    pub fn index(self) -> usize {
        match self {
            PredatorKind::DirectPursuit => 0,
            PredatorKind::ErraticPursuit => 1,
            PredatorKind::CircleAndDive => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PredatorKind::DirectPursuit => "Stalker",
            PredatorKind::ErraticPursuit => "Skitter",
            PredatorKind::CircleAndDive => "Diver",
        }
    }
}

/// Variant-specific motion state
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    DirectPursuit,
    ErraticPursuit {
        /// Current travel heading in radians
        heading: f32,
    },
    CircleAndDive {
        orbit_angle: f32,
        orbit_radius: f32,
        diving: bool,
        /// Head position captured when the dive started
        dive_target: Position,
    },
}

impl Behavior {
    pub fn kind(&self) -> PredatorKind {
        match self {
            Behavior::DirectPursuit => PredatorKind::DirectPursuit,
            Behavior::ErraticPursuit { .. } => PredatorKind::ErraticPursuit,
            Behavior::CircleAndDive { .. } => PredatorKind::CircleAndDive,
        }
    }
}

/// Which parts of the snake a predator touched this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contact {
    pub head: bool,
    pub body: bool,
}

impl Contact {
    pub const NONE: Contact = Contact {
        head: false,
        body: false,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predator {
    behavior: Behavior,
    active: bool,
    position: Point,
    /// Edge of the square collision box
    size: f32,
    speed: f32,
    spawn_timer: i32,
    anger: u8,

    respawn: FrameWindow,
    margin: f32,
    field: Playfield,
    erratic: ErraticTuning,
    dive: DiveTuning,
}

impl Predator {
    /// Create an inactive predator with its first spawn countdown drawn
    pub fn new<R: Rng + ?Sized>(kind: PredatorKind, config: &GameConfig, rng: &mut R) -> Self {
        let profile = config.profile(kind);
        let behavior = match kind {
            PredatorKind::DirectPursuit => Behavior::DirectPursuit,
            PredatorKind::ErraticPursuit => Behavior::ErraticPursuit { heading: 0.0 },
            PredatorKind::CircleAndDive => Behavior::CircleAndDive {
                orbit_angle: rng.gen_range(0.0..std::f32::consts::TAU),
                orbit_radius: config.dive_tuning.orbit_radius,
                diving: false,
                dive_target: Position::default(),
            },
        };

        Self {
            behavior,
            active: false,
            position: Point::default(),
            size: config.cell_size as f32 * profile.size_factor,
            speed: profile.base_speed,
            spawn_timer: profile.initial_spawn.sample(rng),
            anger: 1,
            respawn: profile.respawn,
            margin: config.offscreen_margin,
            field: config.playfield(),
            erratic: config.erratic_tuning,
            dive: config.dive_tuning,
        }
    }

    pub fn kind(&self) -> PredatorKind {
        self.behavior.kind()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Position of the centre; meaningless while inactive
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn anger(&self) -> u8 {
        self.anger
    }

    pub fn set_anger(&mut self, anger: u8) {
        self.anger = anger;
    }

    pub fn spawn_timer(&self) -> i32 {
        self.spawn_timer
    }

    pub fn set_spawn_timer(&mut self, frames: i32) {
        self.spawn_timer = frames;
    }

    pub fn is_diving(&self) -> bool {
        matches!(self.behavior, Behavior::CircleAndDive { diving: true, .. })
    }

    pub fn dive_target(&self) -> Option<Position> {
        match self.behavior {
            Behavior::CircleAndDive {
                diving: true,
                dive_target,
                ..
            } => Some(dive_target),
            _ => None,
        }
    }

    /// Per-frame entry point.
    ///
    /// `body` is the snake from tail to head. While inactive this only runs
    /// the spawn countdown and never reports contact.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        head: Position,
        body: &[Position],
        rng: &mut R,
    ) -> Contact {
        if !self.active {
            self.spawn_timer -= 1;
            if self.spawn_timer <= 0 {
                self.spawn(rng);
            }
            return Contact::NONE;
        }

        if self.field.is_beyond_margin(self.position, self.margin) {
            self.deactivate(self.respawn, rng);
            return Contact::NONE;
        }

        if self.advance(head, rng) {
            self.contact_with(head, body)
        } else {
            Contact::NONE
        }
    }

    /// Run the variant motion. Returns whether this frame may strike.
    fn advance<R: Rng + ?Sized>(&mut self, head: Position, rng: &mut R) -> bool {
        let cell = self.field.cell_size;
        let target = head.cell_center(cell);

        match &mut self.behavior {
            Behavior::DirectPursuit => {
                self.position = self.position.advanced_toward(target, self.speed);
                true
            }
            Behavior::ErraticPursuit { heading } => {
                if self.position.distance_to(target) > 0.0 {
                    let error = wrap_angle(self.position.bearing_to(target) - *heading);
                    let jitter = self.erratic.jitter;
                    *heading += error * self.erratic.turn_rate + rng.gen_range(-jitter..=jitter);
                    self.position = self.position.advanced_along(*heading, self.speed);
                }
                true
            }
            Behavior::CircleAndDive {
                orbit_angle,
                orbit_radius,
                diving,
                dive_target,
            } => {
                if *diving {
                    let aim = dive_target.cell_center(cell);
                    if self.position.distance_to(aim) > self.dive.arrive_distance {
                        self.position = self.position.advanced_toward(aim, self.speed);
                    } else {
                        *diving = false;
                    }
                    true
                } else {
                    *orbit_angle += self.dive.orbit_speed;
                    self.position = Point::new(
                        target.x + orbit_angle.cos() * *orbit_radius,
                        target.y + orbit_angle.sin() * *orbit_radius,
                    );
                    if rng.gen_bool(self.dive.dive_chance.clamp(0.0, 1.0)) {
                        *diving = true;
                        *dive_target = head;
                    }
                    false
                }
            }
        }
    }

    fn contact_with(&self, head: Position, body: &[Position]) -> Contact {
        let cell = self.field.cell_size;
        let head_hit = self.position.distance_to(head.cell_center(cell)) < cell as f32;

        let hitbox = self.position.centered_box(self.size);
        let body_hit = match body.split_last() {
            Some((_, rest)) => rest
                .iter()
                .any(|segment| hitbox.overlaps(&segment.cell_rect(cell))),
            None => false,
        };

        Contact {
            head: head_hit,
            body: body_hit,
        }
    }

    /// Enter from a random edge, just outside the playfield
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
        self.position = self.field.point_outside(edge, self.size, rng);
        self.active = true;
        if let Behavior::CircleAndDive { diving, .. } = &mut self.behavior {
            *diving = false;
        }
        tracing::debug!(kind = ?self.kind(), ?edge, "predator spawned");
    }

    /// Leave the playfield and wait a countdown drawn from `window`
    pub fn deactivate<R: Rng + ?Sized>(&mut self, window: FrameWindow, rng: &mut R) {
        self.active = false;
        self.spawn_timer = window.sample(rng);
        if let Behavior::CircleAndDive { diving, .. } = &mut self.behavior {
            *diving = false;
        }
    }

    /// Speed up a pending spawn by `frames`
    pub fn accelerate_spawn(&mut self, frames: i32) {
        if !self.active {
            self.spawn_timer -= frames;
        }
    }

    /// Count down without ever spawning; used while the field is full
    pub fn hold_spawn(&mut self) {
        if !self.active {
            self.spawn_timer = (self.spawn_timer - 1).max(1);
        }
    }

    #[cfg(test)]
    pub(crate) fn activate_at(&mut self, position: Point) {
        self.active = true;
        self.position = position;
    }
}
