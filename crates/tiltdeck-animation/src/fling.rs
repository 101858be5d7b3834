//! Post-release fling animation.
//!
//! A fling carries the card a short distance past the release point and
//! springs it into place. Each axis runs its own independent animation;
//! nothing couples X and Y.

use log::trace;

use crate::{Spring, SpringSpec};

/// Hard settle cutoff for a fling, in milliseconds.
const MAX_FLING_DURATION_MILLIS: u64 = 600;

/// Fling configuration: the base spring plus a release-derived bounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingSpec {
    pub spring: SpringSpec,
    /// Bounce factor in [0, 1]. Scales the effective damping down, so a
    /// larger bounce yields a springier, more under-damped settle.
    pub bounce: f32,
    /// Elapsed time after which the animation snaps to its target.
    pub max_duration_millis: u64,
}

impl FlingSpec {
    pub fn with_bounce(bounce: f32) -> Self {
        Self {
            spring: SpringSpec::fling(),
            bounce: bounce.clamp(0.0, 1.0),
            max_duration_millis: MAX_FLING_DURATION_MILLIS,
        }
    }

    fn effective_spring(&self) -> SpringSpec {
        let mut spec = self.spring;
        spec.damping *= 1.0 - self.bounce;
        spec
    }
}

/// A single-axis fling from a release position toward an extrapolated
/// target, seeded with the release velocity.
///
/// A release velocity of zero on an axis makes the target coincide with the
/// start and the animation settles in place as a no-op.
#[derive(Debug, Clone, Copy)]
pub struct FlingAnimation {
    spring: Spring,
    elapsed: f32,
    max_duration: f32,
}

impl FlingAnimation {
    pub fn new(spec: FlingSpec, start: f32, target: f32, velocity: f32) -> Self {
        let mut spring = Spring::new(spec.effective_spring(), start);
        spring.set_target(target);
        spring.set_velocity(velocity);
        Self {
            spring,
            elapsed: 0.0,
            max_duration: spec.max_duration_millis as f32 / 1000.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    /// Advance by `dt` seconds and return the current position.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.is_finished() {
            return self.spring.value();
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.max_duration {
            // Out of time: land on the target rather than trailing off.
            trace!(
                "fling cutoff at {:.0}ms, snapping to {}",
                self.elapsed * 1000.0,
                self.spring.target()
            );
            let target = self.spring.target();
            self.spring.snap_to(target);
        } else {
            self.spring.advance(dt);
        }
        self.spring.value()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.max_duration || self.spring.is_settled()
    }
}
