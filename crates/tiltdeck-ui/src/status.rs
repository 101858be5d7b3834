//! Card status and its derived render phase.

/// Inbound image status of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStatus {
    /// The image is still being produced.
    Pending,
    /// The image is available.
    Done,
    /// Production failed; the card shows a static failed visual.
    Error,
}

/// The rendering branch a card is currently in.
///
/// Derived from [`CardStatus`] plus image presence and the develop timer;
/// this is the four-way (plus develop beat) switch the renderer matches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPhase {
    /// Done but with no image to show: an empty frame.
    Placeholder,
    /// Pending: spinner plus the cycling develop captions.
    Loading,
    /// Image available but still "developing" (fade-in beat).
    Developing,
    /// Image fully revealed.
    Revealed,
    /// Error: static failed visual, no retry.
    Failed,
}
