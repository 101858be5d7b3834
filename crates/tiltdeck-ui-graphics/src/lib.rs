//! Pure math/data for card geometry and motion in Tiltdeck
//!
//! This crate contains the geometry primitives and motion value types used
//! throughout the Tiltdeck interaction layer. It carries no dependencies and
//! no behavior beyond plain arithmetic.

mod geometry;
mod motion;

pub use geometry::*;
pub use motion::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::motion::{Offset, Velocity};
}
