//! Motion value types: pointer offsets and velocities.

use crate::Point;

/// Displacement of the pointer from a tracked surface's center.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };
}

/// A 2D velocity in logical pixels per second.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Dot product against another velocity. Negative when the two samples
    /// point in opposing directions (a reversal).
    pub fn dot(&self, other: &Velocity) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Project a position forward along this velocity for `seconds`.
    pub fn project(&self, from: Point, seconds: f32) -> Point {
        Point::new(from.x + self.x * seconds, from.y + self.y * seconds)
    }
}
