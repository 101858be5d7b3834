//! Animation primitives for Tiltdeck.
//!
//! Time-based tweens with easing curves, stateful spring filters, and the
//! fling animation that settles a card after a drag release. Nothing here
//! schedules its own frames: the host advances animations with explicit
//! elapsed time, which keeps the whole crate deterministic under test.

mod easing;
mod fling;
mod spring;
mod tween;

pub use easing::Easing;
pub use fling::{FlingAnimation, FlingSpec};
pub use spring::{Spring, SpringSpec};
pub use tween::{Tween, TweenSpec};

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
