use super::action::Direction;
use super::config::GameConfig;
use super::food::Food;
use super::geometry::{Playfield, Position};

/// The player's snake
///
/// Body segments are stored tail first, so the head is the last element and
/// `body()` reads in the order the segments were laid down.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Position>,
    /// Heading used by the most recent move, `None` until the first turn
    direction: Option<Direction>,
    /// Heading requested for the next move
    pending: Option<Direction>,
    target_length: usize,
    cell_size: i32,

    boost_charge: u32,
    max_boost_charge: u32,
    boost_active: bool,
    boost_timer: u32,
    boost_duration: u32,

    is_dead: bool,
    collision_index: Option<usize>,
}

impl Snake {
    /// Create a stationary one-segment snake at `head`
    pub fn new(head: Position, config: &GameConfig) -> Self {
        Self {
            body: vec![head],
            direction: None,
            pending: None,
            target_length: 1,
            cell_size: config.cell_size,
            boost_charge: 0,
            max_boost_charge: config.max_boost_charge,
            boost_active: false,
            boost_timer: 0,
            boost_duration: config.boost_duration,
            is_dead: false,
            collision_index: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Segments from tail to head
    pub fn body(&self) -> &[Position] {
        &self.body
    }

    /// Segments excluding the head
    pub fn body_without_head(&self) -> &[Position] {
        &self.body[..self.body.len() - 1]
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Heading the next move will take
    pub fn next_direction(&self) -> Option<Direction> {
        self.pending.or(self.direction)
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Request a turn for the next move. Reversals relative to the heading of
    /// the last move are ignored.
    pub fn change_direction(&mut self, requested: Direction) {
        if let Some(current) = self.direction {
            if current.is_opposite(requested) {
                return;
            }
        }
        self.pending = Some(requested);
    }

    /// Advance one cell, trimming the tail down to the target length
    pub fn move_forward(&mut self) {
        if let Some(next) = self.pending.take() {
            self.direction = Some(next);
        }
        let Some(direction) = self.direction else {
            return;
        };

        let new_head = self.head().stepped(direction, self.cell_size);
        self.body.push(new_head);

        if self.body.len() > self.target_length {
            let excess = self.body.len() - self.target_length;
            self.body.drain(..excess);
        }
    }

    /// Raise the target length; the body catches up over the next moves
    pub fn grow(&mut self, amount: usize) {
        self.target_length += amount;
    }

    /// True if the head sits on an earlier segment; remembers which one
    pub fn check_collision_with_self(&mut self) -> bool {
        let head = self.head();
        match self.body_without_head().iter().position(|&seg| seg == head) {
            Some(index) => {
                self.collision_index = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn check_collision_with_boundaries(&self, field: &Playfield) -> bool {
        !field.contains(self.head())
    }

    pub fn check_collision_with_food(&self, food: &Food) -> bool {
        self.head() == food.position()
    }

    pub fn boost_charge(&self) -> u32 {
        self.boost_charge
    }

    pub fn max_boost_charge(&self) -> u32 {
        self.max_boost_charge
    }

    pub fn is_boost_active(&self) -> bool {
        self.boost_active
    }

    /// Frames left on the running boost
    pub fn boost_remaining(&self) -> u32 {
        self.boost_timer
    }

    pub fn add_boost_charge(&mut self) {
        if self.boost_charge < self.max_boost_charge {
            self.boost_charge += 1;
        }
    }

    /// Start a boost if there is charge and none is running
    pub fn activate_boost(&mut self) -> bool {
        if self.boost_charge == 0 || self.boost_active {
            return false;
        }
        self.boost_active = true;
        self.boost_timer = self.boost_duration;
        true
    }

    /// Tick the running boost; the charge is spent when it runs out
    pub fn update_boost(&mut self) {
        if !self.boost_active {
            return;
        }
        self.boost_timer = self.boost_timer.saturating_sub(1);
        if self.boost_timer == 0 {
            self.boost_active = false;
            self.boost_charge = self.boost_charge.saturating_sub(1);
        }
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Segment highlighted by the death animation
    pub fn collision_index(&self) -> Option<usize> {
        self.collision_index
    }

    pub fn mark_dead(&mut self, collision_index: usize) {
        self.is_dead = true;
        self.collision_index = Some(collision_index);
    }

    /// Index of the head segment
    pub fn head_index(&self) -> usize {
        self.body.len() - 1
    }
}
