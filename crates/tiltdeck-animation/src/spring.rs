//! Stateful spring filter used for tilt smoothing and release physics.

/// Spring configuration.
///
/// Unlike a damping-ratio formulation, stiffness, damping and mass are all
/// first-class here: the tilt filter and the release spring use the same
/// stiffness ballpark but very different masses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Stiffness constant. Higher values pull toward the target faster.
    pub stiffness: f32,
    /// Damping coefficient. Higher values bleed velocity faster.
    pub damping: f32,
    /// Mass of the animated value. Heavier values respond more slowly.
    pub mass: f32,
    /// Velocity threshold (units/sec) below which the spring may settle.
    pub velocity_threshold: f32,
    /// Displacement threshold below which the spring may settle.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            velocity_threshold: 0.1,
            position_threshold: 0.01,
        }
    }

    /// Spring driving the hover tilt: settles without sustained oscillation.
    pub fn tilt() -> Self {
        Self::new(150.0, 20.0, 0.5)
    }

    /// Spring driving the post-release fling follow-through.
    pub fn fling() -> Self {
        Self::new(80.0, 12.0, 0.7)
    }

    /// Damping ratio of this spec. 1.0 is critically damped.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Maximum integration substep in seconds. Long frames are split so the
/// semi-implicit Euler integration stays stable.
const MAX_SUBSTEP: f32 = 0.016;

/// A 1D spring-damped value.
///
/// The spring continuously chases `target`; step changes in the target turn
/// into continuous motion instead of snaps. The host advances it with
/// explicit `dt` so behavior is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    spec: SpringSpec,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(spec: SpringSpec, initial: f32) -> Self {
        Self {
            spec,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Seed the spring with an initial velocity (used by the fling, which
    /// inherits the release velocity of the drag).
    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Jump to `value` immediately, killing any motion.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance the simulation by `dt` seconds and return the new value.
    ///
    /// Uses semi-implicit Euler with a bounded substep for stability.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let step = remaining.min(MAX_SUBSTEP);

            let displacement = self.value - self.target;
            let force = -self.spec.stiffness * displacement - self.spec.damping * self.velocity;
            let acceleration = force / self.spec.mass.max(f32::EPSILON);

            self.velocity += acceleration * step;
            self.value += self.velocity * step;

            remaining -= step;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }

    /// Whether velocity and displacement are both below the settle thresholds.
    pub fn is_settled(&self) -> bool {
        self.velocity.abs() < self.spec.velocity_threshold
            && (self.value - self.target).abs() < self.spec.position_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f32) {
        let steps = (seconds / 0.016).ceil() as usize;
        for _ in 0..steps {
            spring.advance(0.016);
        }
    }

    #[test]
    fn spring_settles_on_target() {
        let mut spring = Spring::new(SpringSpec::tilt(), 0.0);
        spring.set_target(15.0);
        run(&mut spring, 2.0);
        assert!(spring.is_settled());
        assert!((spring.value() - 15.0).abs() < 0.05);
    }

    #[test]
    fn tilt_spring_does_not_oscillate() {
        // The tilt spec is at or above critical damping; a step input must
        // approach the target without overshooting past it.
        let mut spring = Spring::new(SpringSpec::tilt(), 0.0);
        spring.set_target(15.0);
        let mut max_seen = 0.0f32;
        for _ in 0..200 {
            max_seen = max_seen.max(spring.advance(0.016));
        }
        assert!(max_seen <= 15.1, "overshot to {max_seen}");
    }

    #[test]
    fn fling_spring_is_under_damped() {
        assert!(SpringSpec::fling().damping_ratio() < 1.0);
        assert!(SpringSpec::tilt().damping_ratio() >= 1.0);
    }

    #[test]
    fn snap_kills_motion() {
        let mut spring = Spring::new(SpringSpec::tilt(), 0.0);
        spring.set_target(10.0);
        spring.advance(0.1);
        spring.snap_to(3.0);
        assert_eq!(spring.value(), 3.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn long_frame_is_substepped() {
        // One giant dt must land in the same place as many small ones,
        // within tolerance, rather than exploding.
        let mut coarse = Spring::new(SpringSpec::tilt(), 0.0);
        coarse.set_target(15.0);
        coarse.advance(2.0);

        let mut fine = Spring::new(SpringSpec::tilt(), 0.0);
        fine.set_target(15.0);
        run(&mut fine, 2.0);

        assert!((coarse.value() - fine.value()).abs() < 0.5);
    }
}
