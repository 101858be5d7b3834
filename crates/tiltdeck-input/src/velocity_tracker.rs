//! Velocity estimation for drag gestures.
//!
//! Impulse-strategy estimator: velocity is recovered from the kinetic
//! energy imparted by recent pointer samples, which resists the jitter that
//! plain two-point differencing picks up.

use tiltdeck_ui_graphics::{Point, Velocity};

/// Ring buffer size for position samples.
const SAMPLE_CAPACITY: usize = 20;

/// Only samples within this window of the newest one contribute.
const SAMPLE_HORIZON_MS: i64 = 100;

/// A gap longer than this between samples means the pointer stopped.
const POINTER_STOP_GAP_MS: i64 = 40;

#[derive(Clone, Copy, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Single-axis velocity estimator over a bounded sample history.
#[derive(Clone)]
struct AxisTracker {
    samples: [Option<Sample>; SAMPLE_CAPACITY],
    index: usize,
}

impl AxisTracker {
    fn new() -> Self {
        Self {
            samples: [None; SAMPLE_CAPACITY],
            index: 0,
        }
    }

    fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % SAMPLE_CAPACITY;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    fn reset(&mut self) {
        self.samples = [None; SAMPLE_CAPACITY];
        self.index = 0;
    }

    /// Estimated velocity in units/second. Zero without at least two recent
    /// samples.
    fn velocity(&self) -> f32 {
        let mut positions = [0.0f32; SAMPLE_CAPACITY];
        let mut ages = [0.0f32; SAMPLE_CAPACITY];
        let mut count = 0;

        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        // Walk backwards through the ring collecting samples until we fall
        // off the horizon or hit a stop gap.
        let mut cursor = self.index;
        let mut previous = newest;
        while let Some(sample) = self.samples[cursor] {
            let age = (newest.time_ms - sample.time_ms) as f32;
            let gap = (previous.time_ms - sample.time_ms).abs() as f32;
            previous = sample;

            if age > SAMPLE_HORIZON_MS as f32 || gap > POINTER_STOP_GAP_MS as f32 {
                break;
            }

            positions[count] = sample.position;
            ages[count] = -age;

            cursor = cursor.checked_sub(1).unwrap_or(SAMPLE_CAPACITY - 1);
            count += 1;
            if count >= SAMPLE_CAPACITY {
                break;
            }
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions[..count], &ages[..count]) * 1000.0
    }
}

/// Velocity recovered from kinetic energy: each sample pair contributes the
/// work it performed on the pointer, and `E = v²/2` converts the total back
/// into a signed velocity (unit mass).
fn impulse_velocity(positions: &[f32], ages_ms: &[f32]) -> f32 {
    debug_assert_eq!(positions.len(), ages_ms.len());
    let last = positions.len() - 1;
    let mut work = 0.0f32;
    let mut next_age = ages_ms[last];

    for i in (1..=last).rev() {
        let current_age = next_age;
        next_age = ages_ms[i - 1];
        if current_age == next_age {
            continue;
        }

        let v_curr = (positions[i] - positions[i - 1]) / (current_age - next_age);
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == last {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

#[inline]
fn energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

/// 2D velocity tracker combining one impulse estimator per axis.
#[derive(Clone)]
pub struct VelocityTracker {
    x: AxisTracker,
    y: AxisTracker,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            x: AxisTracker::new(),
            y: AxisTracker::new(),
        }
    }

    /// Record a pointer position at the given event time.
    pub fn add_position(&mut self, time_ms: i64, position: Point) {
        self.x.add_sample(time_ms, position.x);
        self.y.add_sample(time_ms, position.y);
    }

    /// Estimated velocity in logical pixels per second.
    pub fn velocity(&self) -> Velocity {
        Velocity::new(self.x.velocity(), self.y.velocity())
    }

    /// Drop all history (called when a new drag begins).
    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_reports_zero() {
        assert_eq!(VelocityTracker::new().velocity(), Velocity::ZERO);
    }

    #[test]
    fn single_sample_reports_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Point::new(100.0, 100.0));
        assert_eq!(tracker.velocity(), Velocity::ZERO);
    }

    #[test]
    fn constant_velocity_is_recovered() {
        let mut tracker = VelocityTracker::new();
        // 100 px per 10ms on x = 10000 px/s, stationary on y.
        for i in 0..4 {
            tracker.add_position(i * 10, Point::new(i as f32 * 100.0, 50.0));
        }
        let velocity = tracker.velocity();
        assert!(
            (velocity.x - 10_000.0).abs() < 1_000.0,
            "expected ~10000, got {}",
            velocity.x
        );
        assert!(velocity.y.abs() < 1.0);
    }

    #[test]
    fn reversal_direction_is_signed() {
        let mut tracker = VelocityTracker::new();
        for i in 0..4 {
            tracker.add_position(i * 10, Point::new(300.0 - i as f32 * 100.0, 0.0));
        }
        assert!(tracker.velocity().x < 0.0);
    }

    #[test]
    fn stop_gap_discards_history() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Point::new(0.0, 0.0));
        tracker.add_position(POINTER_STOP_GAP_MS + 1, Point::new(100.0, 0.0));
        assert_eq!(tracker.velocity(), Velocity::ZERO);
    }

    #[test]
    fn reset_clears_history() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Point::new(0.0, 0.0));
        tracker.add_position(10, Point::new(100.0, 0.0));
        tracker.reset();
        assert_eq!(tracker.velocity(), Velocity::ZERO);
    }
}
