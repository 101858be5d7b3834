//! Interaction layer for Tiltdeck cards.
//!
//! Pointer movement flows through the tilt mapper into spring-smoothed
//! rotation and opacity values; drags run a two-state machine that freezes
//! the tilt, follows the pointer, and launches a velocity-seeded fling on
//! release; drag velocity samples additionally feed the shake detector.

mod drag;
mod draggable;
mod fling;
mod shake;
mod tilt;

pub use drag::{CursorIcon, DragCallback, DragController, DragInfo, DragPhase, DragVisual};
pub use draggable::{CardFrame, DraggableCard};
pub use fling::{FlingPair, FlingParameters};
pub use shake::ShakeDetector;
pub use tilt::{map_range, TiltFrame, TiltMapper};
