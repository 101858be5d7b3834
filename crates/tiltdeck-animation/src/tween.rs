//! Duration-based tween animation.

use crate::Easing;

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::new(duration_millis, Easing::Linear)
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(300, Easing::FastOutSlowIn)
    }
}

/// A running tween between two values, advanced by the host each frame.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    spec: TweenSpec,
    start: f32,
    target: f32,
    elapsed: f32,
}

impl Tween {
    pub fn new(spec: TweenSpec, start: f32, target: f32) -> Self {
        Self {
            spec,
            start,
            target,
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        self.value()
    }

    pub fn value(&self) -> f32 {
        let duration = (self.spec.duration_millis.max(1)) as f32 / 1000.0;
        let linear = (self.elapsed / duration).clamp(0.0, 1.0);
        let progress = self.spec.easing.transform(linear);
        self.start + (self.target - self.start) * progress
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed * 1000.0 >= self.spec.duration_millis as f32
    }
}
