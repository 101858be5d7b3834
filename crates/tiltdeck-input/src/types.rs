//! Raw pointer event types forwarded through the drag callbacks.

use tiltdeck_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer event as delivered by the host.
///
/// `time_ms` is the host's event timestamp in milliseconds. Only differences
/// between timestamps matter; the epoch is the host's own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            kind,
            position,
            time_ms,
        }
    }

    pub fn down(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, position, time_ms)
    }

    pub fn moved(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, position, time_ms)
    }

    pub fn up(position: Point, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, position, time_ms)
    }
}
