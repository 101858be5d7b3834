//! Velocity-to-fling translation.
//!
//! On release, the instantaneous drag velocity is turned into a short
//! follow-through animation: the target extrapolates the release position
//! along the velocity, and the bounce factor scales with speed up to a clamp.

use log::debug;
use tiltdeck_animation::{FlingAnimation, FlingSpec};
use tiltdeck_input::{BOUNCE_VELOCITY_DIVISOR, FLING_PROJECTION_SECONDS, MAX_FLING_BOUNCE};
use tiltdeck_ui_graphics::{Point, Velocity};

/// Parameters derived from a drag release. Exists only for the duration of
/// the single release animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingParameters {
    pub target: Point,
    pub bounce: f32,
}

impl FlingParameters {
    /// Derive fling parameters from the release position and velocity.
    ///
    /// `bounce` is `magnitude / 1500` clamped to 0.5; the target projects
    /// 0.2s of travel along the release velocity and is deliberately
    /// unclamped.
    pub fn from_release(position: Point, velocity: Velocity) -> Self {
        let bounce = (velocity.magnitude() / BOUNCE_VELOCITY_DIVISOR).min(MAX_FLING_BOUNCE);
        let target = velocity.project(position, FLING_PROJECTION_SECONDS);
        Self { target, bounce }
    }
}

/// The two uncoupled per-axis fling animations launched at release.
pub struct FlingPair {
    x: FlingAnimation,
    y: FlingAnimation,
}

impl FlingPair {
    pub fn launch(position: Point, velocity: Velocity) -> Self {
        let params = FlingParameters::from_release(position, velocity);
        debug!(
            "fling launched from ({}, {}) toward ({}, {}) bounce {:.2}",
            position.x, position.y, params.target.x, params.target.y, params.bounce
        );
        let spec = FlingSpec::with_bounce(params.bounce);
        Self {
            x: FlingAnimation::new(spec, position.x, params.target.x, velocity.x),
            y: FlingAnimation::new(spec, position.y, params.target.y, velocity.y),
        }
    }

    /// Advance both axes by `dt` seconds and return the current position.
    pub fn advance(&mut self, dt: f32) -> Point {
        Point::new(self.x.advance(dt), self.y.advance(dt))
    }

    pub fn position(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn is_finished(&self) -> bool {
        self.x.is_finished() && self.y.is_finished()
    }
}
