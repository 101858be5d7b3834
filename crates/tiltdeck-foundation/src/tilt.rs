//! Pointer-offset to tilt mapping through spring filters.

use tiltdeck_animation::{Easing, Spring, SpringSpec, Tween, TweenSpec};
use tiltdeck_input::{EDGE_OPACITY, MAX_GLARE_OPACITY, MAX_TILT_DEGREES, TILT_INPUT_RANGE};
use tiltdeck_ui_graphics::Offset;

/// Duration of the drag-start "lift flat" rotation reset.
const LIFT_DURATION_MILLIS: u64 = 200;

/// Piecewise-linear mapping through `stops` (input, output) pairs, sorted by
/// input. Values outside the stop range saturate at the end stops.
pub fn map_range(value: f32, stops: &[(f32, f32)]) -> f32 {
    debug_assert!(stops.len() >= 2);
    let (first_in, first_out) = stops[0];
    if value <= first_in {
        return first_out;
    }
    for window in stops.windows(2) {
        let (lo_in, lo_out) = window[0];
        let (hi_in, hi_out) = window[1];
        if value <= hi_in {
            let span = hi_in - lo_in;
            if span <= f32::EPSILON {
                return hi_out;
            }
            let fraction = (value - lo_in) / span;
            return lo_out + (hi_out - lo_out) * fraction;
        }
    }
    stops[stops.len() - 1].1
}

/// One frame of tilt output: rotations in degrees, opacities in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltFrame {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub opacity: f32,
    pub glare_opacity: f32,
}

impl TiltFrame {
    pub const NEUTRAL: TiltFrame = TiltFrame {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        opacity: 1.0,
        glare_opacity: 0.0,
    };
}

/// Maps the shared pointer offset into four spring-smoothed outputs.
///
/// All four springs share the same input signal and spring constants; they
/// differ only in their output ranges:
/// - horizontal offset drives the Y-axis rotation,
/// - vertical offset drives the X-axis rotation (inverted, so the card tips
///   away from the pointer),
/// - horizontal offset drives card opacity (peaks at center) and the glare
///   overlay (inverse peak).
pub struct TiltMapper {
    rotate_x: Spring,
    rotate_y: Spring,
    opacity: Spring,
    glare: Spring,
    lift: Option<(Tween, Tween)>,
}

impl Default for TiltMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TiltMapper {
    pub fn new() -> Self {
        let spec = SpringSpec::tilt();
        Self {
            rotate_x: Spring::new(spec, 0.0),
            rotate_y: Spring::new(spec, 0.0),
            opacity: Spring::new(spec, 1.0),
            glare: Spring::new(spec, 0.0),
            lift: None,
        }
    }

    /// Feed the current pointer offset. Targets update immediately; the
    /// springs carry the values there over the following frames.
    pub fn set_offset(&mut self, offset: Offset) {
        let r = TILT_INPUT_RANGE;
        let d = MAX_TILT_DEGREES;
        self.rotate_y
            .set_target(map_range(offset.x, &[(-r, -d), (r, d)]));
        self.rotate_x
            .set_target(map_range(offset.y, &[(-r, d), (r, -d)]));
        self.opacity.set_target(map_range(
            offset.x,
            &[(-r, EDGE_OPACITY), (0.0, 1.0), (r, EDGE_OPACITY)],
        ));
        self.glare.set_target(map_range(
            offset.x,
            &[(-r, MAX_GLARE_OPACITY), (0.0, 0.0), (r, MAX_GLARE_OPACITY)],
        ));
    }

    /// Animate rotation back to neutral over 200ms, overriding the springs.
    /// Called the instant a drag begins so the card lifts flat.
    pub fn begin_lift(&mut self) {
        let spec = TweenSpec::new(LIFT_DURATION_MILLIS, Easing::FlingSettle);
        self.lift = Some((
            Tween::new(spec, self.rotate_x.value(), 0.0),
            Tween::new(spec, self.rotate_y.value(), 0.0),
        ));
        self.rotate_x.set_target(0.0);
        self.rotate_y.set_target(0.0);
        self.opacity.set_target(1.0);
        self.glare.set_target(0.0);
    }

    /// Complete any in-progress lift immediately (rotation snaps to zero).
    pub fn finish_lift(&mut self) {
        if self.lift.take().is_some() {
            self.rotate_x.snap_to(0.0);
            self.rotate_y.snap_to(0.0);
        }
    }

    /// Retarget everything to the neutral pose; springs animate back.
    pub fn reset(&mut self) {
        self.set_offset(Offset::ZERO);
    }

    /// Advance all filters by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if let Some((tween_x, tween_y)) = &mut self.lift {
            // While the lift runs, the tween owns the rotations; the springs
            // follow it so the handoff at the end is seamless.
            self.rotate_x.snap_to(tween_x.advance(dt));
            self.rotate_y.snap_to(tween_y.advance(dt));
            if tween_x.is_finished() && tween_y.is_finished() {
                self.lift = None;
            }
        } else {
            self.rotate_x.advance(dt);
            self.rotate_y.advance(dt);
        }
        self.opacity.advance(dt);
        self.glare.advance(dt);
    }

    pub fn frame(&self) -> TiltFrame {
        TiltFrame {
            rotate_x_deg: self.rotate_x.value(),
            rotate_y_deg: self.rotate_y.value(),
            opacity: self.opacity.value(),
            glare_opacity: self.glare.value(),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.lift.is_none()
            && self.rotate_x.is_settled()
            && self.rotate_y.is_settled()
            && self.opacity.is_settled()
            && self.glare.is_settled()
    }
}
