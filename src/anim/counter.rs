//! Progressive value reveal.
//!
//! Counts a display value from 0 to a target over a fixed duration, in a
//! fixed number of steps, once a visibility trigger arrives. Used by the
//! stat cards (3+ years, 6+ projects, ...) and the eased GPA reveal.
//!
//! The state machine is deliberately dull: `start` schedules one tick
//! timer, each tick computes `easing(step/steps) * target` and reschedules,
//! and the final tick snaps to the exact target so no floating-point
//! residue survives. `start` is idempotent - a second visibility trigger
//! while running (or after completion) changes nothing.

use spark_signals::{Signal, signal};

use super::easing::Easing;
use super::timer::{TimerHandle, Timers};

// =============================================================================
// Config
// =============================================================================

/// Counter configuration.
#[derive(Debug, Clone, Copy)]
pub struct CounterConfig {
    /// Final value to reveal.
    pub target: f64,
    /// Total animation duration in milliseconds.
    pub duration_ms: u64,
    /// Number of ticks over the duration.
    pub steps: u32,
    /// Integral targets floor at every intermediate tick.
    pub is_integer: bool,
    /// Progression curve.
    pub easing: Easing,
}

impl CounterConfig {
    /// Linear 60-step reveal over 2 seconds, matching the stat cards.
    pub fn stat(target: f64) -> Self {
        Self {
            target,
            duration_ms: 2000,
            steps: 60,
            is_integer: target.fract() == 0.0,
            easing: Easing::Linear,
        }
    }

    /// Eased 100-step reveal over 2.5 seconds, matching the GPA counter.
    pub fn eased(target: f64) -> Self {
        Self {
            target,
            duration_ms: 2500,
            steps: 100,
            is_integer: target.fract() == 0.0,
            easing: Easing::CubicOut,
        }
    }
}

// =============================================================================
// Counter
// =============================================================================

/// Timer-driven value reveal with a reactive display value.
pub struct Counter {
    cfg: CounterConfig,
    value: Signal<f64>,
    step: u32,
    done: bool,
    timer: Option<TimerHandle>,
}

impl Counter {
    /// Create a counter at rest, displaying zero.
    pub fn new(cfg: CounterConfig) -> Self {
        Self {
            cfg,
            value: signal(0.0),
            step: 0,
            done: false,
            timer: None,
        }
    }

    /// Reactive display value. Clone this into the render pipeline.
    pub fn value(&self) -> Signal<f64> {
        self.value.clone()
    }

    /// Whether the reveal has finished (value equals target exactly).
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether a tick is currently pending.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Milliseconds between ticks. Degenerate configs (zero steps or zero
    /// duration) still produce a positive interval so ticks always fire.
    fn interval(&self) -> u64 {
        if self.cfg.steps == 0 {
            return 1;
        }
        (self.cfg.duration_ms / self.cfg.steps as u64).max(1)
    }

    /// Start the reveal. Idempotent: calling while running or after
    /// completion is a no-op, so a flapping visibility trigger can never
    /// produce two interleaved tick chains.
    pub fn start(&mut self, timers: &mut Timers) {
        if self.done || self.timer.is_some() {
            return;
        }
        if self.cfg.steps == 0 {
            // Nothing to interpolate; snap immediately.
            self.value.set(self.cfg.target);
            self.done = true;
            return;
        }
        self.timer = Some(timers.schedule(self.interval()));
    }

    /// Cancel the pending tick, freezing the display at its current value.
    /// A later `start` resumes from the same step.
    pub fn halt(&mut self, timers: &mut Timers) {
        if let Some(h) = self.timer.take() {
            timers.cancel(h);
        }
    }

    /// Skip the animation entirely (reduced-motion mode).
    pub fn finish(&mut self, timers: &mut Timers) {
        self.halt(timers);
        self.step = self.cfg.steps;
        self.value.set(self.cfg.target);
        self.done = true;
    }

    /// Whether this counter owns the fired handle.
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.timer == Some(handle)
    }

    /// Advance one tick. Call when a handle owned by this counter fires.
    pub fn on_timer(&mut self, timers: &mut Timers) {
        self.timer = None;
        self.step += 1;

        if self.step >= self.cfg.steps {
            // Final tick: exact target, no residue, no reschedule.
            self.value.set(self.cfg.target);
            self.done = true;
            return;
        }

        let t = self.step as f64 / self.cfg.steps as f64;
        let mut current = self.cfg.easing.apply(t) * self.cfg.target;
        if self.cfg.is_integer {
            current = current.floor();
        }
        self.value.set(current);
        self.timer = Some(timers.schedule(self.interval()));
    }
}

/// Format a revealed value the way the stat cards do: integers floored,
/// everything else with two decimals, suffix appended ("3+", "3.97").
pub fn format_value(value: f64, is_integer: bool, suffix: &str) -> String {
    if is_integer {
        format!("{}{}", value as i64, suffix)
    } else {
        format!("{:.2}{}", value, suffix)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a counter to completion, collecting every displayed value.
    fn run_to_end(counter: &mut Counter, timers: &mut Timers) -> Vec<f64> {
        let mut seen = Vec::new();
        counter.start(timers);
        for _ in 0..100_000 {
            if counter.is_done() {
                break;
            }
            for h in timers.advance(1) {
                if counter.owns(h) {
                    counter.on_timer(timers);
                    seen.push(counter.value().get());
                }
            }
        }
        seen
    }

    #[test]
    fn test_linear_reveal_ends_exactly_at_target() {
        let mut timers = Timers::new();
        let mut counter = Counter::new(CounterConfig::stat(6.0));
        let seen = run_to_end(&mut counter, &mut timers);

        assert_eq!(*seen.last().unwrap(), 6.0);
        assert!(counter.is_done());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_eased_reveal_ends_exactly_at_target() {
        let mut timers = Timers::new();
        let mut counter = Counter::new(CounterConfig::eased(3.97));
        let seen = run_to_end(&mut counter, &mut timers);

        // Exact equality: the final tick snaps, it does not interpolate.
        assert_eq!(*seen.last().unwrap(), 3.97);
        assert_eq!(seen.len(), 100);
    }

    #[test]
    fn test_integer_target_floors_en_route() {
        let mut timers = Timers::new();
        let mut counter = Counter::new(CounterConfig::stat(25.0));
        let seen = run_to_end(&mut counter, &mut timers);

        for v in &seen {
            assert_eq!(v.fract(), 0.0, "intermediate value {v} not floored");
        }
        assert_eq!(*seen.last().unwrap(), 25.0);
    }

    #[test]
    fn test_values_are_monotonic_nondecreasing() {
        let mut timers = Timers::new();
        let mut counter = Counter::new(CounterConfig::eased(3.97));
        let seen = run_to_end(&mut counter, &mut timers);

        let mut prev = 0.0;
        for v in seen {
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut timers = Timers::new();
        let mut counter = Counter::new(CounterConfig::stat(3.0));

        counter.start(&mut timers);
        counter.start(&mut timers);
        counter.start(&mut timers);

        // Only one tick chain exists.
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn test_start_after_done_is_noop() {
        let mut timers = Timers::new();
        let mut counter = Counter::new(CounterConfig::stat(3.0));
        run_to_end(&mut counter, &mut timers);

        counter.start(&mut timers);
        assert_eq!(timers.pending(), 0);
        assert_eq!(counter.value().get(), 3.0);
    }

    #[test]
    fn test_halt_leaves_no_pending_timers() {
        let mut timers = Timers::new();
        let mut counter = Counter::new(CounterConfig::stat(6.0));
        counter.start(&mut timers);

        // Part-way through
        for h in timers.advance(500) {
            if counter.owns(h) {
                counter.on_timer(&mut timers);
            }
        }
        counter.halt(&mut timers);
        assert_eq!(timers.pending(), 0);

        // Nothing fires after the halt, no matter how far time advances.
        assert!(timers.advance(10_000).is_empty());
    }

    #[test]
    fn test_halt_then_start_resumes() {
        let mut timers = Timers::new();
        let mut counter = Counter::new(CounterConfig::stat(60.0));
        counter.start(&mut timers);

        // Run roughly a quarter of the way, then halt.
        for _ in 0..500 {
            for h in timers.advance(1) {
                if counter.owns(h) {
                    counter.on_timer(&mut timers);
                }
            }
        }
        counter.halt(&mut timers);
        let frozen = counter.value().get();
        assert!(frozen > 0.0 && frozen < 60.0);

        // Resume and finish.
        counter.start(&mut timers);
        while !counter.is_done() {
            for h in timers.advance(1) {
                if counter.owns(h) {
                    counter.on_timer(&mut timers);
                }
            }
        }
        assert_eq!(counter.value().get(), 60.0);
    }

    #[test]
    fn test_zero_steps_snaps_immediately() {
        let mut timers = Timers::new();
        let mut counter = Counter::new(CounterConfig {
            target: 7.0,
            duration_ms: 2000,
            steps: 0,
            is_integer: true,
            easing: Easing::Linear,
        });
        counter.start(&mut timers);

        assert!(counter.is_done());
        assert_eq!(counter.value().get(), 7.0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_finish_skips_animation() {
        let mut timers = Timers::new();
        let mut counter = Counter::new(CounterConfig::eased(3.97));
        counter.start(&mut timers);
        counter.finish(&mut timers);

        assert_eq!(counter.value().get(), 3.97);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.0, true, "+"), "3+");
        assert_eq!(format_value(3.97, false, ""), "3.97");
        assert_eq!(format_value(0.0, true, ""), "0");
    }
}
