//! The draggable card primitive: tilt, drag and fling wired together.

use tiltdeck_input::{PointerEvent, PointerTracker};
use tiltdeck_ui_graphics::Rect;

use crate::drag::{DragCallback, DragController, DragVisual};
use crate::fling::FlingParameters;
use crate::tilt::{TiltFrame, TiltMapper};

/// Everything the renderer needs for one frame of the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub tilt: TiltFrame,
    pub drag: DragVisual,
    pub dragging: bool,
}

/// A surface that tilts toward the pointer while hovered and can be dragged
/// and flung.
///
/// Hover tilt and drag translation never run together: the instant a drag
/// begins the pointer tracker is suppressed and the rotation lifts flat, and
/// the tracker resumes once the drag ends.
pub struct DraggableCard {
    pointer: PointerTracker,
    tilt: TiltMapper,
    drag: DragController,
    last_tick_ms: Option<i64>,
}

impl Default for DraggableCard {
    fn default() -> Self {
        Self::new()
    }
}

impl DraggableCard {
    pub fn new() -> Self {
        Self {
            pointer: PointerTracker::new(),
            tilt: TiltMapper::new(),
            drag: DragController::new(),
            last_tick_ms: None,
        }
    }

    /// Update the surface bounds used as the tilt reference frame.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.pointer.set_bounds(bounds);
    }

    pub fn set_mobile(&mut self, is_mobile: bool) {
        self.drag.set_mobile(is_mobile);
    }

    pub fn set_on_drag_start(&mut self, callback: DragCallback) {
        self.drag.set_on_drag_start(callback);
    }

    pub fn set_on_drag(&mut self, callback: DragCallback) {
        self.drag.set_on_drag(callback);
    }

    pub fn on_pointer_enter(&mut self) {
        self.drag.set_hovered(true);
    }

    /// Hover movement drives the tilt springs (unless a drag is running).
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let offset = self.pointer.on_pointer_move(x, y);
        if !self.drag.is_dragging() {
            self.tilt.set_offset(offset);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.on_pointer_leave();
        self.drag.set_hovered(false);
        if !self.drag.is_dragging() {
            self.tilt.reset();
        }
    }

    pub fn on_press(&mut self) {
        self.drag.set_pressed(true);
    }

    pub fn on_release(&mut self) {
        self.drag.set_pressed(false);
    }

    /// Drag start: freeze the tilt input, lift the card flat, raise it.
    pub fn begin_drag(&mut self, event: &PointerEvent) {
        if self.drag.is_dragging() {
            return;
        }
        self.pointer.set_suppressed(true);
        self.tilt.begin_lift();
        self.drag.begin_drag(event);
    }

    pub fn drag_by(&mut self, event: &PointerEvent) {
        self.drag.drag_by(event);
    }

    /// Drag end: the lift animation is cut short before the fling starts so
    /// the two never overlap.
    pub fn end_drag(&mut self, event: &PointerEvent) -> Option<FlingParameters> {
        let params = self.drag.end_drag(event);
        if params.is_some() {
            self.tilt.finish_lift();
            self.pointer.set_suppressed(false);
        }
        params
    }

    /// Advance all animations to `now_ms` (host frame timestamp).
    pub fn tick(&mut self, now_ms: i64) {
        let dt = match self.last_tick_ms {
            Some(last) => (now_ms - last).max(0) as f32 / 1000.0,
            None => 0.0,
        };
        self.last_tick_ms = Some(now_ms);
        self.tilt.advance(dt);
        self.drag.tick(dt);
    }

    pub fn frame(&self) -> CardFrame {
        CardFrame {
            tilt: self.tilt.frame(),
            drag: self.drag.visual(),
            dragging: self.drag.is_dragging(),
        }
    }

    pub fn drag_controller(&self) -> &DragController {
        &self.drag
    }
}
