//! Drag state machine for a card surface.

use log::debug;
use tiltdeck_input::{PointerEvent, VelocityTracker};
use tiltdeck_ui_graphics::{Point, Velocity};

use crate::fling::{FlingPair, FlingParameters};

/// The two states of a drag gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Pointer cursor requested by the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorIcon {
    Default,
    Grabbing,
}

/// Gesture info forwarded alongside raw events to the drag callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragInfo {
    pub point: Point,
    pub velocity: Velocity,
}

pub type DragCallback = Box<dyn FnMut(&PointerEvent, &DragInfo)>;

/// Visual outputs of the drag layer, consumed by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragVisual {
    /// Translation of the surface from its resting slot.
    pub translation: Point,
    /// Emphasis scale: 1.05 hovered, 1.08 pressed, 1.1 while dragging.
    pub scale: f32,
    pub cursor: CursorIcon,
    /// Whether the surface should sit above its siblings.
    pub elevated: bool,
}

/// Owns the drag lifecycle of one surface.
///
/// While idle, an optional fling animation may still be settling the surface
/// from the previous release; starting a new drag cancels it and re-seeds
/// the position from wherever the animation currently is, never compounding
/// two animations.
pub struct DragController {
    phase: DragPhase,
    is_mobile: bool,
    hovered: bool,
    pressed: bool,
    position: Point,
    pointer_origin: Point,
    position_origin: Point,
    tracker: VelocityTracker,
    fling: Option<FlingPair>,
    on_drag_start: Option<DragCallback>,
    on_drag: Option<DragCallback>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            is_mobile: false,
            hovered: false,
            pressed: false,
            position: Point::ZERO,
            pointer_origin: Point::ZERO,
            position_origin: Point::ZERO,
            tracker: VelocityTracker::new(),
            fling: None,
            on_drag_start: None,
            on_drag: None,
        }
    }

    /// Mark this surface as living in a touch-primary layout. Drag move
    /// callbacks are skipped entirely; explicit buttons replace gestures.
    pub fn set_mobile(&mut self, is_mobile: bool) {
        self.is_mobile = is_mobile;
    }

    pub fn set_on_drag_start(&mut self, callback: DragCallback) {
        self.on_drag_start = Some(callback);
    }

    pub fn set_on_drag(&mut self, callback: DragCallback) {
        self.on_drag = Some(callback);
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Recognized drag-start gesture. Idle -> Dragging.
    pub fn begin_drag(&mut self, event: &PointerEvent) {
        if self.phase == DragPhase::Dragging {
            return;
        }
        // Cancel an in-flight fling and re-seed from its current position.
        if let Some(fling) = self.fling.take() {
            self.position = fling.position();
        }
        self.phase = DragPhase::Dragging;
        self.pointer_origin = event.position;
        self.position_origin = self.position;
        self.tracker.reset();
        self.tracker.add_position(event.time_ms, event.position);
        debug!("drag start at ({}, {})", event.position.x, event.position.y);

        let info = DragInfo {
            point: event.position,
            velocity: Velocity::ZERO,
        };
        if let Some(callback) = &mut self.on_drag_start {
            callback(event, &info);
        }
    }

    /// Pointer movement while dragging: the surface follows directly.
    pub fn drag_by(&mut self, event: &PointerEvent) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        self.tracker.add_position(event.time_ms, event.position);
        self.position = Point::new(
            self.position_origin.x + event.position.x - self.pointer_origin.x,
            self.position_origin.y + event.position.y - self.pointer_origin.y,
        );

        if self.is_mobile {
            return;
        }
        let info = DragInfo {
            point: event.position,
            velocity: self.tracker.velocity(),
        };
        if let Some(callback) = &mut self.on_drag {
            callback(event, &info);
        }
    }

    /// Drag release. Dragging -> Idle, launching the fling.
    pub fn end_drag(&mut self, event: &PointerEvent) -> Option<FlingParameters> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        self.tracker.add_position(event.time_ms, event.position);
        // The release velocity is used raw: fling travel is bounded only by
        // the spring settle, so fast releases carry proportionally far.
        let velocity = self.tracker.velocity();
        let params = FlingParameters::from_release(self.position, velocity);
        debug!(
            "drag end, velocity ({:.0}, {:.0}) px/s",
            velocity.x, velocity.y
        );

        self.fling = Some(FlingPair::launch(self.position, velocity));
        self.phase = DragPhase::Idle;
        self.pressed = false;
        Some(params)
    }

    /// Advance the release animation, if any, by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(fling) = &mut self.fling {
            self.position = fling.advance(dt);
            if fling.is_finished() {
                self.fling = None;
            }
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn has_active_fling(&self) -> bool {
        self.fling.is_some()
    }

    pub fn visual(&self) -> DragVisual {
        let scale = if self.is_dragging() {
            1.1
        } else if self.pressed {
            1.08
        } else if self.hovered {
            1.05
        } else {
            1.0
        };
        DragVisual {
            translation: self.position,
            scale,
            cursor: if self.is_dragging() {
                CursorIcon::Grabbing
            } else {
                CursorIcon::Default
            },
            elevated: self.is_dragging(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tiltdeck_input::PointerEventKind;

    fn drag_sequence(controller: &mut DragController) {
        controller.begin_drag(&PointerEvent::down(Point::new(0.0, 0.0), 0));
        for i in 1..=5 {
            controller.drag_by(&PointerEvent::moved(
                Point::new(i as f32 * 10.0, 0.0),
                i * 10,
            ));
        }
    }

    #[test]
    fn phases_follow_the_gesture() {
        let mut controller = DragController::new();
        assert_eq!(controller.phase(), DragPhase::Idle);
        controller.begin_drag(&PointerEvent::down(Point::ZERO, 0));
        assert_eq!(controller.phase(), DragPhase::Dragging);
        controller.end_drag(&PointerEvent::up(Point::ZERO, 10));
        assert_eq!(controller.phase(), DragPhase::Idle);
    }

    #[test]
    fn surface_follows_pointer_while_dragging() {
        let mut controller = DragController::new();
        drag_sequence(&mut controller);
        assert_eq!(controller.position(), Point::new(50.0, 0.0));
    }

    #[test]
    fn move_events_outside_a_drag_are_ignored() {
        let mut controller = DragController::new();
        controller.drag_by(&PointerEvent::moved(Point::new(100.0, 100.0), 0));
        assert_eq!(controller.position(), Point::ZERO);
    }

    #[test]
    fn release_launches_a_fling_toward_the_projection() {
        let mut controller = DragController::new();
        drag_sequence(&mut controller);
        // Constant 1000 px/s rightward drag.
        let params = controller
            .end_drag(&PointerEvent::up(Point::new(60.0, 0.0), 60))
            .expect("was dragging");
        assert!(params.target.x > controller.position().x);
        assert!(controller.has_active_fling());
        for _ in 0..60 {
            controller.tick(0.016);
        }
        assert!(!controller.has_active_fling());
        assert!((controller.position().x - params.target.x).abs() < 0.5);
    }

    #[test]
    fn fast_release_projects_the_full_distance() {
        let mut controller = DragController::new();
        // Constant 20000 px/s rightward drag: 200 px every 10ms.
        controller.begin_drag(&PointerEvent::down(Point::new(0.0, 0.0), 0));
        for i in 1..=3 {
            controller.drag_by(&PointerEvent::moved(
                Point::new(i as f32 * 200.0, 0.0),
                i * 10,
            ));
        }
        let params = controller
            .end_drag(&PointerEvent::up(Point::new(800.0, 0.0), 40))
            .expect("was dragging");
        // 800 + 20000 * 0.2 = 4800; the projection is never clamped.
        assert!(
            (params.target.x - 4_800.0).abs() < 250.0,
            "expected target near 4800, got {}",
            params.target.x
        );
    }

    #[test]
    fn new_drag_cancels_inflight_fling_and_reseeds() {
        let mut controller = DragController::new();
        drag_sequence(&mut controller);
        controller.end_drag(&PointerEvent::up(Point::new(60.0, 0.0), 60));
        controller.tick(0.016);
        let mid_fling = controller.position();
        assert!(controller.has_active_fling());

        controller.begin_drag(&PointerEvent::down(Point::new(200.0, 200.0), 100));
        assert!(!controller.has_active_fling());
        // Position re-seeds from wherever the fling was, not its target.
        assert_eq!(controller.position(), mid_fling);
    }

    #[test]
    fn drag_callback_carries_point_and_velocity() {
        let seen: Rc<RefCell<Vec<DragInfo>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut controller = DragController::new();
        controller.set_on_drag(Box::new(move |_event, info| {
            sink.borrow_mut().push(*info);
        }));
        drag_sequence(&mut controller);
        let samples = seen.borrow();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[4].point, Point::new(50.0, 0.0));
        // ~1000 px/s rightward.
        assert!((samples[4].velocity.x - 1000.0).abs() < 150.0);
    }

    #[test]
    fn mobile_flag_skips_drag_callbacks() {
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let mut controller = DragController::new();
        controller.set_mobile(true);
        controller.set_on_drag(Box::new(move |_, _| {
            *sink.borrow_mut() += 1;
        }));
        drag_sequence(&mut controller);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn drag_start_forwards_the_raw_event() {
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let sink = kinds.clone();
        let mut controller = DragController::new();
        controller.set_on_drag_start(Box::new(move |event, _| {
            sink.borrow_mut().push(event.kind);
        }));
        controller.begin_drag(&PointerEvent::down(Point::ZERO, 0));
        // A second start while dragging is ignored.
        controller.begin_drag(&PointerEvent::down(Point::ZERO, 5));
        assert_eq!(kinds.borrow().as_slice(), &[PointerEventKind::Down]);
    }

    #[test]
    fn visual_emphasis_layers() {
        let mut controller = DragController::new();
        assert_eq!(controller.visual().scale, 1.0);
        controller.set_hovered(true);
        assert_eq!(controller.visual().scale, 1.05);
        controller.set_pressed(true);
        assert_eq!(controller.visual().scale, 1.08);
        controller.begin_drag(&PointerEvent::down(Point::ZERO, 0));
        let visual = controller.visual();
        assert_eq!(visual.scale, 1.1);
        assert_eq!(visual.cursor, CursorIcon::Grabbing);
        assert!(visual.elevated);
        controller.end_drag(&PointerEvent::up(Point::ZERO, 10));
        let visual = controller.visual();
        assert_eq!(visual.cursor, CursorIcon::Default);
        assert!(!visual.elevated);
        // Release clears the pressed emphasis too.
        assert_eq!(visual.scale, 1.05);
    }
}
