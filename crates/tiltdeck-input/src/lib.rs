//! Pointer input primitives for Tiltdeck.
//!
//! Raw pointer events, the centered-offset tracker feeding the tilt springs,
//! impulse-based velocity estimation for drag gestures, and the shared
//! gesture constants the interaction layer is tuned against.

mod constants;
mod pointer_tracker;
mod types;
mod velocity_tracker;

pub use constants::*;
pub use pointer_tracker::PointerTracker;
pub use types::{PointerEvent, PointerEventKind};
pub use velocity_tracker::VelocityTracker;
