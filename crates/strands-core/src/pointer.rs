use crate::constants::POINTER_SAMPLE_INTERVAL;
use glam::Vec2;
use instant::Instant;

/// Last accepted pointer position, rate-limited to roughly one update per
/// display frame. Holds the viewport center until the first move event.
pub struct PointerTracker {
    pos: Vec2,
    last_sample: Option<Instant>,
}

impl PointerTracker {
    pub fn new(initial: Vec2) -> Self {
        Self {
            pos: initial,
            last_sample: None,
        }
    }

    /// Record a new pointer position. Samples arriving within
    /// `POINTER_SAMPLE_INTERVAL` of the previous accepted one are discarded;
    /// returns whether this one was kept.
    pub fn sample(&mut self, x: f32, y: f32, now: Instant) -> bool {
        if let Some(last) = self.last_sample {
            if now.duration_since(last) < POINTER_SAMPLE_INTERVAL {
                return false;
            }
        }
        self.last_sample = Some(now);
        self.pos = Vec2::new(x, y);
        true
    }

    /// Current position. The frame loop captures this once per frame and
    /// threads the snapshot into every strand update.
    #[inline]
    pub fn snapshot(&self) -> Vec2 {
        self.pos
    }
}
