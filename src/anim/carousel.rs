//! Carousel index controller.
//!
//! Tracks which item of a fixed list is active, which direction the last
//! move went, and when it happened. The slide itself is rendered purely
//! from `changed_at` against the frame clock, so the controller never
//! schedules timers - it is plain state with reactive outputs.
//!
//! Direction is committed *before* the index changes so a renderer that
//! reads both during the same transition always sees a consistent pair.

use spark_signals::{Signal, signal};

/// Duration of the slide transition in milliseconds. Renderers sample
/// progress as `(clock - changed_at) / SLIDE_MS`, eased.
pub const SLIDE_MS: u64 = 400;

/// Direction of the most recent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Cyclic index controller over `len` items.
pub struct Carousel {
    len: usize,
    active: Signal<usize>,
    direction: Signal<Direction>,
    changed_at: Signal<u64>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: signal(0),
            direction: signal(Direction::Forward),
            changed_at: signal(0),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reactive active index.
    pub fn active(&self) -> Signal<usize> {
        self.active.clone()
    }

    /// Reactive direction of the last move.
    pub fn direction(&self) -> Signal<Direction> {
        self.direction.clone()
    }

    /// Virtual time of the last move, for slide interpolation.
    pub fn changed_at(&self) -> Signal<u64> {
        self.changed_at.clone()
    }

    /// Advance to the next item, wrapping at the end. No-op when empty.
    pub fn next(&mut self, now: u64) {
        if self.len == 0 {
            return;
        }
        self.direction.set(Direction::Forward);
        self.active.set((self.active.get() + 1) % self.len);
        self.changed_at.set(now);
    }

    /// Step to the previous item, wrapping at the start. No-op when empty.
    pub fn prev(&mut self, now: u64) {
        if self.len == 0 {
            return;
        }
        self.direction.set(Direction::Backward);
        let current = self.active.get();
        self.active.set((current + self.len - 1) % self.len);
        self.changed_at.set(now);
    }

    /// Jump straight to an index (dot navigation). Direction follows the
    /// shorter apparent motion; out-of-range and same-index jumps are
    /// no-ops.
    pub fn jump_to(&mut self, index: usize, now: u64) {
        if index >= self.len || index == self.active.get() {
            return;
        }
        let dir = if index > self.active.get() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.direction.set(dir);
        self.active.set(index);
        self.changed_at.set(now);
    }

    /// Slide progress in [0, 1] at virtual time `now`.
    pub fn slide_progress(&self, now: u64) -> f32 {
        let elapsed = now.saturating_sub(self.changed_at.get());
        (elapsed as f32 / SLIDE_MS as f32).min(1.0)
    }
}
