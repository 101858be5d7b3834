//! The polaroid card: status presentation plus the draggable surface.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use tiltdeck_foundation::{CardFrame, DraggableCard, ShakeDetector};
use tiltdeck_ui_graphics::Rect;
use web_time::{Duration, Instant};

use crate::captions::DevelopingCaptions;
use crate::status::{CardPhase, CardStatus};

/// Delay between the image becoming available and the revealed phase, the
/// photographic "develop" beat.
const DEVELOP_DELAY: Duration = Duration::from_millis(600);

pub type CardCallback = Box<dyn FnMut(&str)>;

/// Inbound props of the polaroid card.
pub struct PolaroidCardProps {
    pub image_url: Option<String>,
    pub caption: String,
    pub status: CardStatus,
    pub error: Option<String>,
    pub is_mobile: bool,
    pub on_shake: Option<CardCallback>,
    pub on_download: Option<CardCallback>,
}

impl PolaroidCardProps {
    pub fn new(caption: impl Into<String>, status: CardStatus) -> Self {
        Self {
            image_url: None,
            caption: caption.into(),
            status,
            error: None,
            is_mobile: false,
            on_shake: None,
            on_download: None,
        }
    }
}

/// Headless state of one polaroid card.
///
/// Owns the draggable surface, feeds its drag velocity samples into a shake
/// detector, cycles the developing captions while pending, and runs the
/// develop delay once the image lands. All timers are plain deadlines
/// cleared on `stop` (and gone on drop): nothing can fire against a
/// disposed card.
pub struct PolaroidCardState {
    caption: String,
    image_url: Option<String>,
    error: Option<String>,
    status: CardStatus,
    surface: DraggableCard,
    on_download: Option<CardCallback>,
    captions: DevelopingCaptions,
    develop_deadline: Option<Instant>,
    revealed: bool,
    epoch: Instant,
}

impl PolaroidCardState {
    pub fn new(props: PolaroidCardProps, now: Instant) -> Self {
        let PolaroidCardProps {
            image_url,
            caption,
            status,
            error,
            is_mobile,
            on_shake,
            on_download,
        } = props;

        let mut surface = DraggableCard::new();
        surface.set_mobile(is_mobile);

        // Route drag velocity samples into the shake detector; a detected
        // shake surfaces as `on_shake(caption)`.
        let detector = Rc::new(RefCell::new(ShakeDetector::new()));
        let shake_callback = Rc::new(RefCell::new(on_shake));
        let caption_for_shake = caption.clone();
        surface.set_on_drag(Box::new(move |event, info| {
            if detector.borrow_mut().on_sample(event.time_ms, info.velocity) {
                if let Some(callback) = shake_callback.borrow_mut().as_mut() {
                    callback(&caption_for_shake);
                }
            }
        }));

        let mut state = Self {
            caption,
            image_url,
            error,
            status,
            surface,
            on_download,
            captions: DevelopingCaptions::new(),
            develop_deadline: None,
            revealed: false,
            epoch: now,
        };
        state.apply_status(status, now);
        state
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> CardStatus {
        self.status
    }

    /// Update the error message shown in the failed phase.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Update the image URL. When the image arrives while the card is
    /// already `Done`, the develop delay starts from `now`.
    pub fn set_image_url(&mut self, image_url: Option<String>, now: Instant) {
        let arrived = image_url.is_some() && self.image_url.is_none();
        self.image_url = image_url;
        if self.status != CardStatus::Done {
            return;
        }
        if self.image_url.is_none() {
            self.develop_deadline = None;
        } else if arrived && !self.revealed {
            self.develop_deadline = Some(now + DEVELOP_DELAY);
        }
    }

    /// Transition the card to a new status.
    pub fn set_status(&mut self, status: CardStatus, now: Instant) {
        if status == self.status {
            return;
        }
        debug!("card '{}' -> {:?}", self.caption, status);
        self.status = status;
        self.apply_status(status, now);
    }

    fn apply_status(&mut self, status: CardStatus, now: Instant) {
        match status {
            CardStatus::Pending => {
                self.revealed = false;
                self.develop_deadline = None;
                self.captions.start(now);
            }
            CardStatus::Done => {
                self.captions.stop();
                if self.image_url.is_some() {
                    self.develop_deadline = Some(now + DEVELOP_DELAY);
                } else {
                    self.develop_deadline = None;
                }
            }
            CardStatus::Error => {
                self.captions.stop();
                self.develop_deadline = None;
            }
        }
    }

    /// The rendering branch the card is currently in.
    pub fn phase(&self) -> CardPhase {
        match self.status {
            CardStatus::Pending => CardPhase::Loading,
            CardStatus::Error => CardPhase::Failed,
            CardStatus::Done => match (&self.image_url, self.revealed) {
                (None, _) => CardPhase::Placeholder,
                (Some(_), false) => CardPhase::Developing,
                (Some(_), true) => CardPhase::Revealed,
            },
        }
    }

    /// Caption currently shown in the loading state.
    pub fn loading_caption(&self) -> &'static str {
        self.captions.current()
    }

    /// Explicit download action; fires `on_download(caption)` unconditionally.
    pub fn request_download(&mut self) {
        if let Some(callback) = &mut self.on_download {
            callback(&self.caption);
        }
    }

    /// Advance timers and surface animations to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.captions.tick(now);
        if let Some(deadline) = self.develop_deadline {
            if now >= deadline {
                self.develop_deadline = None;
                self.revealed = true;
                debug!("card '{}' developed", self.caption);
            }
        }
        let now_ms = now.saturating_duration_since(self.epoch).as_millis() as i64;
        self.surface.tick(now_ms);
    }

    /// Clear all pending timers (component teardown).
    pub fn stop(&mut self) {
        self.captions.stop();
        self.develop_deadline = None;
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.surface.set_bounds(bounds);
    }

    pub fn frame(&self) -> CardFrame {
        self.surface.frame()
    }

    /// Direct access to the draggable surface for pointer event routing.
    pub fn surface_mut(&mut self) -> &mut DraggableCard {
        &mut self.surface
    }

    pub fn next_caption_time(&self) -> Option<Instant> {
        self.captions.next_transition_time()
    }
}
