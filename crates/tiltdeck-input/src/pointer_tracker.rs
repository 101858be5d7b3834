//! Pointer offset tracking against a surface rectangle.

use tiltdeck_ui_graphics::{Offset, Rect};

/// Converts raw pointer coordinates into a displacement from the tracked
/// surface's center.
///
/// The offset resets to zero on pointer leave, and updates are suppressed
/// while the surface is being dragged so the tilt mapping never fights the
/// drag translation. A tracker with no known bounds reports zero.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    bounds: Option<Rect>,
    offset: Offset,
    suppressed: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the tracked surface's bounding rectangle (screen coordinates).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    pub fn clear_bounds(&mut self) {
        self.bounds = None;
        self.offset = Offset::ZERO;
    }

    /// Suppress (or resume) move updates. While suppressed the offset is
    /// pinned at zero.
    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
        if suppressed {
            self.offset = Offset::ZERO;
        }
    }

    /// Handle a pointer move at screen coordinates, returning the offset
    /// from the surface center.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Offset {
        if self.suppressed {
            return self.offset;
        }
        let Some(bounds) = self.bounds else {
            // Missing rect data defaults to a centered pointer.
            self.offset = Offset::ZERO;
            return self.offset;
        };
        let center = bounds.center();
        self.offset = Offset::new(x - center.x, y - center.y);
        self.offset
    }

    /// Handle the pointer leaving the surface.
    pub fn on_pointer_leave(&mut self) -> Offset {
        self.offset = Offset::ZERO;
        self.offset
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PointerTracker {
        let mut tracker = PointerTracker::new();
        tracker.set_bounds(Rect::new(100.0, 100.0, 200.0, 300.0));
        tracker
    }

    #[test]
    fn offset_is_relative_to_center() {
        let mut tracker = tracker();
        // Center is (200, 250).
        assert_eq!(tracker.on_pointer_move(200.0, 250.0), Offset::ZERO);
        assert_eq!(tracker.on_pointer_move(260.0, 200.0), Offset::new(60.0, -50.0));
    }

    #[test]
    fn leave_resets_offset() {
        let mut tracker = tracker();
        tracker.on_pointer_move(300.0, 400.0);
        assert_eq!(tracker.on_pointer_leave(), Offset::ZERO);
        assert_eq!(tracker.offset(), Offset::ZERO);
    }

    #[test]
    fn missing_bounds_defaults_to_zero() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.on_pointer_move(500.0, 500.0), Offset::ZERO);
    }

    #[test]
    fn suppressed_moves_are_ignored() {
        let mut tracker = tracker();
        tracker.on_pointer_move(260.0, 200.0);
        tracker.set_suppressed(true);
        assert_eq!(tracker.offset(), Offset::ZERO);
        assert_eq!(tracker.on_pointer_move(300.0, 400.0), Offset::ZERO);
        tracker.set_suppressed(false);
        assert_ne!(tracker.on_pointer_move(300.0, 400.0), Offset::ZERO);
    }
}
