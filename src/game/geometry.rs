//! Playfield bounds and the coordinate types shared by every entity.
//!
//! Snake segments and food live on grid-aligned integer positions; predators
//! move continuously and use floating point coordinates in the same units.

use rand::Rng;

use super::action::Direction;

/// A grid-aligned position in playfield units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell of `cell_size` units in a direction
    pub fn stepped(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell_size, dy * cell_size)
    }

    /// Centre of the cell whose top-left corner is this position
    pub fn cell_center(&self, cell_size: i32) -> Point {
        let half = cell_size as f32 / 2.0;
        Point::new(self.x as f32 + half, self.y as f32 + half)
    }

    /// Rectangle covered by the cell at this position
    pub fn cell_rect(&self, cell_size: i32) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            cell_size as f32,
            cell_size as f32,
        )
    }
}

/// Continuous coordinate used by predators
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing from self to other in radians
    pub fn bearing_to(&self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Step `distance` units toward `target`; stays put when already on it
    pub fn advanced_toward(&self, target: Point, distance: f32) -> Point {
        let dist = self.distance_to(target);
        if dist <= f32::EPSILON {
            return *self;
        }
        Point::new(
            self.x + (target.x - self.x) / dist * distance,
            self.y + (target.y - self.y) / dist * distance,
        )
    }

    /// Step `distance` units along a heading in radians
    pub fn advanced_along(&self, heading: f32, distance: f32) -> Point {
        Point::new(
            self.x + heading.cos() * distance,
            self.y + heading.sin() * distance,
        )
    }

    /// Square box of edge `size` centred on this point
    pub fn centered_box(&self, size: f32) -> Rect {
        Rect::new(self.x - size / 2.0, self.y - size / 2.0, size, size)
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True if the interiors intersect; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Edge of the playfield a predator enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// Bounds of the playing area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn cols(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Check if a position is within the playfield
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Grid-aligned cell closest to the centre of the playfield
    pub fn center(&self) -> Position {
        Position::new(
            self.cols() / 2 * self.cell_size,
            self.rows() / 2 * self.cell_size,
        )
    }

    /// Uniformly random grid-aligned cell
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let col = rng.gen_range(0..self.cols().max(1));
        let row = rng.gen_range(0..self.rows().max(1));
        Position::new(col * self.cell_size, row * self.cell_size)
    }

    /// Uniform point along `edge`, placed `offset` units outside it
    pub fn point_outside<R: Rng + ?Sized>(&self, edge: Edge, offset: f32, rng: &mut R) -> Point {
        let width = self.width as f32;
        let height = self.height as f32;
        match edge {
            Edge::Top => Point::new(rng.gen_range(0.0..=width), -offset),
            Edge::Right => Point::new(width + offset, rng.gen_range(0.0..=height)),
            Edge::Bottom => Point::new(rng.gen_range(0.0..=width), height + offset),
            Edge::Left => Point::new(-offset, rng.gen_range(0.0..=height)),
        }
    }

    /// True once a point lies further than `margin` outside the playfield
    pub fn is_beyond_margin(&self, point: Point, margin: f32) -> bool {
        point.x < -margin
            || point.x > self.width as f32 + margin
            || point.y < -margin
            || point.y > self.height as f32 + margin
    }
}

/// Wrap an angle difference into [-pi, pi]
pub fn wrap_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle < -PI {
        angle += TAU;
    }
    angle
}
