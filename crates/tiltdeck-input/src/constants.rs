//! Shared gesture constants for consistent pointer handling.
//!
//! The tilt mapper, the fling translator and the shake detector are tuned
//! against the same few numbers; keeping them in one place avoids the
//! gestures drifting apart when one of them is re-tuned.
//!
//! All values are in logical pixels (or logical pixels per second).

/// Half-width of the pointer-offset input range feeding the tilt springs.
///
/// Offsets are mapped from [-300, 300] onto the output ranges below and
/// saturate outside it, so a pointer far off the card never over-rotates it.
pub const TILT_INPUT_RANGE: f32 = 300.0;

/// Maximum tilt rotation on either axis, in degrees.
pub const MAX_TILT_DEGREES: f32 = 15.0;

/// Card opacity at the extremes of the tilt input range. Opacity peaks at
/// 1.0 when the pointer is centered.
pub const EDGE_OPACITY: f32 = 0.9;

/// Glare overlay opacity at the extremes of the tilt input range. Glare is
/// the inverse of the opacity curve: zero at center, strongest at the edges.
pub const MAX_GLARE_OPACITY: f32 = 0.3;

/// How far a release extrapolates along the release velocity, in seconds.
///
/// `target = release_position + velocity * FLING_PROJECTION_SECONDS` gives a
/// short momentum carry. The projected distance is deliberately uncapped;
/// very fast releases travel far and are bounded only by the spring settle.
pub const FLING_PROJECTION_SECONDS: f32 = 0.2;

/// Velocity magnitude that maps to the maximum fling bounce.
///
/// `bounce = min(MAX_FLING_BOUNCE, magnitude / BOUNCE_VELOCITY_DIVISOR)`.
pub const BOUNCE_VELOCITY_DIVISOR: f32 = 1500.0;

/// Clamp on the fling bounce factor so very fast releases don't overshoot
/// wildly.
pub const MAX_FLING_BOUNCE: f32 = 0.5;

/// Minimum velocity magnitude for a drag sample to count toward a shake.
pub const SHAKE_VELOCITY_THRESHOLD: f32 = 1500.0;

/// Cooldown between shake callbacks. A single back-and-forth gesture
/// produces several qualifying reversals; only the first one fires.
pub const SHAKE_COOLDOWN_MS: i64 = 2000;
