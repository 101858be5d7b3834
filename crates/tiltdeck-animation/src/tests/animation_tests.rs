use crate::{Easing, FlingAnimation, FlingSpec, Spring, SpringSpec, Tween, TweenSpec};

#[test]
fn spring_smooths_step_changes() {
    // A step change in the target must turn into continuous motion, not a
    // snap: one frame later the value has moved only part of the way.
    let mut spring = Spring::new(SpringSpec::tilt(), 0.0);
    spring.set_target(15.0);
    let after_one_frame = spring.advance(0.016);
    assert!(after_one_frame > 0.0);
    assert!(after_one_frame < 5.0, "moved {after_one_frame} in one frame");
}

#[test]
fn spring_retargets_mid_flight_without_discontinuity() {
    let mut spring = Spring::new(SpringSpec::tilt(), 0.0);
    spring.set_target(15.0);
    for _ in 0..10 {
        spring.advance(0.016);
    }
    let before = spring.value();
    spring.set_target(-15.0);
    let after = spring.advance(0.016);
    // Retargeting changes direction of travel but never teleports the value.
    assert!((after - before).abs() < 2.0);
}

#[test]
fn lift_flat_tween_reaches_zero_in_duration() {
    // The drag-start "lift flat" cue: rotation tweens to zero over 200ms.
    let mut tween = Tween::new(TweenSpec::new(200, Easing::FlingSettle), 12.5, 0.0);
    for _ in 0..13 {
        tween.advance(0.016);
    }
    assert!(tween.is_finished());
    assert_eq!(tween.value(), 0.0);
}

#[test]
fn fling_moves_with_release_velocity_first() {
    // Even though the target sits behind the start, the inherited release
    // velocity carries the value forward before the spring pulls back.
    let mut fling = FlingAnimation::new(FlingSpec::with_bounce(0.3), 100.0, 90.0, 2000.0);
    let first = fling.advance(0.016);
    assert!(first > 100.0, "expected forward travel, got {first}");
}

#[test]
fn parallel_axes_are_independent() {
    let spec = FlingSpec::with_bounce(0.2);
    let mut x = FlingAnimation::new(spec, 100.0, 300.0, 1000.0);
    let y = FlingAnimation::new(spec, 100.0, 100.0, 0.0);
    for _ in 0..40 {
        x.advance(0.016);
    }
    // Y never moved; X traveled. Nothing couples them.
    assert_eq!(y.value(), 100.0);
    assert!((x.value() - 300.0).abs() < 1.0);
}
