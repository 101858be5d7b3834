//! Fixed-interval caption cycling for the loading state.
//!
//! Timer-based rather than frame-based: the host only needs to wake up at
//! `next_transition_time`, not redraw continuously.

use web_time::{Duration, Instant};

/// Caption cycle interval in milliseconds.
pub const CAPTION_CYCLE_INTERVAL_MS: u64 = 2000;

const CAPTIONS: &[&str] = &[
    "Developing the shot",
    "Hold it steady",
    "Letting the colors set",
    "Almost there",
];

/// Cycles through the "developing" captions on a fixed interval while a card
/// is loading.
///
/// `stop` clears the scheduled transition, so a stopped (or dropped) cycler
/// can never fire against a disposed card.
#[derive(Debug, Clone)]
pub struct DevelopingCaptions {
    index: usize,
    next_cycle: Option<Instant>,
}

impl Default for DevelopingCaptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DevelopingCaptions {
    pub const CYCLE_INTERVAL: Duration = Duration::from_millis(CAPTION_CYCLE_INTERVAL_MS);

    pub fn new() -> Self {
        Self {
            index: 0,
            next_cycle: None,
        }
    }

    /// Begin cycling from the first caption.
    pub fn start(&mut self, now: Instant) {
        self.index = 0;
        self.next_cycle = Some(now + Self::CYCLE_INTERVAL);
    }

    /// Stop cycling and clear the pending transition.
    pub fn stop(&mut self) {
        self.next_cycle = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_cycle.is_some()
    }

    pub fn current(&self) -> &'static str {
        CAPTIONS[self.index % CAPTIONS.len()]
    }

    /// Advance if the transition time has passed. Returns `true` when the
    /// caption changed (redraw needed).
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(next) = self.next_cycle else {
            return false;
        };
        if now < next {
            return false;
        }
        self.index = (self.index + 1) % CAPTIONS.len();
        self.next_cycle = Some(now + Self::CYCLE_INTERVAL);
        true
    }

    /// The next caption transition, if cycling. Use for host scheduling.
    pub fn next_transition_time(&self) -> Option<Instant> {
        self.next_cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive_on_first_caption() {
        let captions = DevelopingCaptions::new();
        assert!(!captions.is_active());
        assert_eq!(captions.current(), CAPTIONS[0]);
    }

    #[test]
    fn tick_cycles_on_the_interval() {
        let mut captions = DevelopingCaptions::new();
        let start = Instant::now();
        captions.start(start);

        assert!(!captions.tick(start + Duration::from_millis(100)));
        assert_eq!(captions.current(), CAPTIONS[0]);

        let after = start + DevelopingCaptions::CYCLE_INTERVAL + Duration::from_millis(1);
        assert!(captions.tick(after));
        assert_eq!(captions.current(), CAPTIONS[1]);
    }

    #[test]
    fn cycle_wraps_around() {
        let mut captions = DevelopingCaptions::new();
        let mut now = Instant::now();
        captions.start(now);
        for _ in 0..CAPTIONS.len() {
            now += DevelopingCaptions::CYCLE_INTERVAL + Duration::from_millis(1);
            captions.tick(now);
        }
        assert_eq!(captions.current(), CAPTIONS[0]);
    }

    #[test]
    fn stop_clears_the_pending_transition() {
        let mut captions = DevelopingCaptions::new();
        let start = Instant::now();
        captions.start(start);
        captions.stop();
        assert!(captions.next_transition_time().is_none());
        // A stale tick after teardown is a no-op.
        assert!(!captions.tick(start + Duration::from_secs(60)));
    }

    #[test]
    fn restart_resets_to_first_caption() {
        let mut captions = DevelopingCaptions::new();
        let start = Instant::now();
        captions.start(start);
        captions.tick(start + DevelopingCaptions::CYCLE_INTERVAL + Duration::from_millis(1));
        assert_ne!(captions.current(), CAPTIONS[0]);
        captions.start(start + Duration::from_secs(10));
        assert_eq!(captions.current(), CAPTIONS[0]);
    }
}
