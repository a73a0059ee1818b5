//! Cursor blink.
//!
//! A square wave over virtual time: on for half the period, off for the
//! other half. Drives the typewriter's block cursor.

use spark_signals::{Signal, signal};

use super::timer::{TimerHandle, Timers};

/// Full blink period in milliseconds (500ms on, 500ms off).
pub const BLINK_PERIOD_MS: u64 = 1000;

pub struct Blink {
    on: Signal<bool>,
    timer: Option<TimerHandle>,
    half_period: u64,
}

impl Blink {
    pub fn new() -> Self {
        Self {
            on: signal(true),
            timer: None,
            half_period: BLINK_PERIOD_MS / 2,
        }
    }

    /// Reactive visibility of the cursor.
    pub fn on(&self) -> Signal<bool> {
        self.on.clone()
    }

    /// Start blinking. Idempotent.
    pub fn start(&mut self, timers: &mut Timers) {
        if self.timer.is_some() {
            return;
        }
        self.timer = Some(timers.schedule(self.half_period));
    }

    /// Stop and force the cursor visible so a frozen screen never hides it.
    pub fn stop(&mut self, timers: &mut Timers) {
        if let Some(h) = self.timer.take() {
            timers.cancel(h);
        }
        self.on.set(true);
    }

    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.timer == Some(handle)
    }

    /// Toggle and reschedule.
    pub fn on_timer(&mut self, timers: &mut Timers) {
        self.on.set(!self.on.get());
        self.timer = Some(timers.schedule(self.half_period));
    }
}

impl Default for Blink {
    fn default() -> Self {
        Self::new()
    }
}
