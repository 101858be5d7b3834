//! Reversal-detecting shake gesture.

use log::debug;
use tiltdeck_input::{SHAKE_COOLDOWN_MS, SHAKE_VELOCITY_THRESHOLD};
use tiltdeck_ui_graphics::Velocity;

/// Detects a back-and-forth shake in a stream of drag velocity samples.
///
/// A sample qualifies when it is fast (magnitude above 1500 px/s) and points
/// against the previous sample (negative dot product) — a direction
/// reversal, not a one-directional swipe. A 2000ms cooldown keeps a single
/// gesture from firing more than once.
#[derive(Debug, Clone, Default)]
pub struct ShakeDetector {
    last_velocity: Option<Velocity>,
    last_fire_ms: Option<i64>,
}

impl ShakeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one `(velocity, timestamp)` sample. Returns true when the shake
    /// callback should fire.
    pub fn on_sample(&mut self, time_ms: i64, velocity: Velocity) -> bool {
        let fired = match self.last_velocity {
            Some(previous) => {
                velocity.magnitude() > SHAKE_VELOCITY_THRESHOLD
                    && previous.dot(&velocity) < 0.0
                    && self
                        .last_fire_ms
                        .map_or(true, |last| time_ms - last > SHAKE_COOLDOWN_MS)
            }
            None => false,
        };

        self.last_velocity = Some(velocity);
        if fired {
            self.last_fire_ms = Some(time_ms);
            debug!("shake detected at {time_ms}ms");
        }
        fired
    }

    /// Forget the previous sample (the cooldown timestamp is kept).
    pub fn reset_samples(&mut self) {
        self.last_velocity = None;
    }
}
