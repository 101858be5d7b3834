//! Widget-level state for the Tiltdeck polaroid card.
//!
//! The headless model behind the card: the enumerated status and its derived
//! render phase, the fixed-interval "developing" caption cycler, and the
//! card state that wires drag events into shake detection and owns the
//! post-load develop timer. Rendering itself is the host's job; everything
//! here only produces values.

mod captions;
mod polaroid;
mod status;

pub use captions::{DevelopingCaptions, CAPTION_CYCLE_INTERVAL_MS};
pub use polaroid::{CardCallback, PolaroidCardProps, PolaroidCardState};
pub use status::{CardPhase, CardStatus};
