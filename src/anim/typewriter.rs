//! Typewriter cycler.
//!
//! Types out each string from a list one character at a time, pauses,
//! deletes it one character at a time, then advances to the next item
//! (wrapping at the end) and types again - forever. This is the hero
//! section's rotating role line.
//!
//! An explicit three-state machine with exactly one pending timer while
//! running, so the cancellation contract is auditable: `stop` cancels
//! that timer and the machine is inert.

use spark_signals::{Signal, signal};

use super::timer::{TimerHandle, Timers};

// =============================================================================
// Config
// =============================================================================

/// Typewriter timing configuration. Deleting is faster than typing, and
/// a fully-typed string lingers before deletion begins.
#[derive(Debug, Clone)]
pub struct TypewriterConfig {
    pub items: Vec<&'static str>,
    pub typing_interval_ms: u64,
    pub deleting_interval_ms: u64,
    pub pause_ms: u64,
}

impl TypewriterConfig {
    /// Default timings: 100ms per typed character, 50ms per deleted
    /// one, 2s pause on the full string.
    pub fn new(items: Vec<&'static str>) -> Self {
        Self {
            items,
            typing_interval_ms: 100,
            deleting_interval_ms: 50,
            pause_ms: 2000,
        }
    }
}

// =============================================================================
// State machine
// =============================================================================

/// The three phases of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appending one character per tick until the item is complete.
    Typing,
    /// Holding the complete item on screen.
    Pausing,
    /// Removing one character per tick until empty.
    Deleting,
}

/// Infinite typewriter over a fixed item list.
pub struct Typewriter {
    cfg: TypewriterConfig,
    displayed: Signal<String>,
    index: usize,
    /// Number of characters currently shown (char count, not bytes).
    shown: usize,
    phase: Phase,
    timer: Option<TimerHandle>,
}

impl Typewriter {
    pub fn new(cfg: TypewriterConfig) -> Self {
        Self {
            cfg,
            displayed: signal(String::new()),
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            timer: None,
        }
    }

    /// Reactive displayed text. Clone this into the render pipeline.
    pub fn displayed(&self) -> Signal<String> {
        self.displayed.clone()
    }

    /// Current phase, for rendering hints (e.g. cursor style).
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Item currently being typed or deleted.
    pub fn active_index(&self) -> usize {
        self.index
    }

    fn current_item(&self) -> &'static str {
        self.cfg.items[self.index]
    }

    /// First `n` characters of the current item, on char boundaries.
    fn prefix(&self, n: usize) -> String {
        self.current_item().chars().take(n).collect()
    }

    /// Start cycling. Idempotent; an empty item list stays inert and
    /// displays nothing.
    pub fn start(&mut self, timers: &mut Timers) {
        if self.cfg.items.is_empty() || self.timer.is_some() {
            return;
        }
        let delay = match self.phase {
            Phase::Typing => self.cfg.typing_interval_ms,
            Phase::Pausing => self.cfg.pause_ms,
            Phase::Deleting => self.cfg.deleting_interval_ms,
        };
        self.timer = Some(timers.schedule(delay));
    }

    /// Cancel the pending tick. The machine freezes in place and can be
    /// resumed with `start`.
    pub fn stop(&mut self, timers: &mut Timers) {
        if let Some(h) = self.timer.take() {
            timers.cancel(h);
        }
    }

    /// Show the first item in full and freeze (reduced-motion mode).
    pub fn finish(&mut self, timers: &mut Timers) {
        self.stop(timers);
        if let Some(first) = self.cfg.items.first() {
            self.index = 0;
            self.shown = first.chars().count();
            self.phase = Phase::Pausing;
            self.displayed.set((*first).to_string());
        }
    }

    /// Whether this typewriter owns the fired handle.
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.timer == Some(handle)
    }

    /// Advance one tick. Call when a handle owned by this machine fires.
    pub fn on_timer(&mut self, timers: &mut Timers) {
        self.timer = None;
        if self.cfg.items.is_empty() {
            return;
        }

        let item_len = self.current_item().chars().count();
        let next_delay = match self.phase {
            Phase::Typing => {
                self.shown += 1;
                self.displayed.set(self.prefix(self.shown));
                if self.shown >= item_len {
                    self.phase = Phase::Pausing;
                    self.cfg.pause_ms
                } else {
                    self.cfg.typing_interval_ms
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.cfg.deleting_interval_ms
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                self.displayed.set(self.prefix(self.shown));
                if self.shown == 0 {
                    // Advance to the next item, wrapping around.
                    self.index = (self.index + 1) % self.cfg.items.len();
                    self.phase = Phase::Typing;
                    self.cfg.typing_interval_ms
                } else {
                    self.cfg.deleting_interval_ms
                }
            }
        };

        self.timer = Some(timers.schedule(next_delay));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pump(tw: &mut Typewriter, timers: &mut Timers, ms: u64) -> Vec<String> {
        let mut seen = Vec::new();
        for _ in 0..ms {
            for h in timers.advance(1) {
                if tw.owns(h) {
                    tw.on_timer(timers);
                    seen.push(tw.displayed().get());
                }
            }
        }
        seen
    }

    #[test]
    fn test_types_every_prefix_in_order() {
        let mut timers = Timers::new();
        let mut tw = Typewriter::new(TypewriterConfig::new(vec![
            "Software Engineer",
            "Cloud Architect",
        ]));
        tw.start(&mut timers);

        // 17 chars * 100ms fully types the first item.
        let seen = pump(&mut tw, &mut timers, 1700);
        let item = "Software Engineer";
        let expected: Vec<String> = (1..=17)
            .map(|n| item.chars().take(n).collect())
            .collect();
        assert_eq!(seen, expected);
        assert_eq!(tw.phase(), Phase::Pausing);
    }

    #[test]
    fn test_full_cycle_advances_to_next_item() {
        let mut timers = Timers::new();
        let mut tw = Typewriter::new(TypewriterConfig::new(vec!["ab", "cd"]));
        tw.start(&mut timers);

        // Type "a", "ab" (200ms), pause (2000ms), delete "a", "" (100ms),
        // then the next tick starts typing "c".
        pump(&mut tw, &mut timers, 200);
        assert_eq!(tw.displayed().get(), "ab");

        pump(&mut tw, &mut timers, 2000);
        assert_eq!(tw.phase(), Phase::Deleting);

        pump(&mut tw, &mut timers, 100);
        assert_eq!(tw.displayed().get(), "");
        assert_eq!(tw.active_index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);

        pump(&mut tw, &mut timers, 100);
        assert_eq!(tw.displayed().get(), "c");
    }

    #[test]
    fn test_deletes_every_length_down_to_zero() {
        let mut timers = Timers::new();
        let mut tw = Typewriter::new(TypewriterConfig::new(vec!["abcd"]));
        tw.start(&mut timers);

        pump(&mut tw, &mut timers, 400); // typed
        pump(&mut tw, &mut timers, 2000); // paused
        let seen = pump(&mut tw, &mut timers, 200); // deleting at 50ms
        assert_eq!(seen, vec!["abc", "ab", "a", ""]);
    }

    #[test]
    fn test_wraps_around_the_list() {
        let mut timers = Timers::new();
        let mut tw = Typewriter::new(TypewriterConfig::new(vec!["x", "y"]));
        tw.start(&mut timers);

        // One full cycle per item: 100 type + 2000 pause + 50 delete,
        // plus the tick that begins the next item.
        pump(&mut tw, &mut timers, 2150);
        assert_eq!(tw.active_index(), 1);
        pump(&mut tw, &mut timers, 2150);
        assert_eq!(tw.active_index(), 0);
    }

    #[test]
    fn test_never_reaches_terminal_state() {
        let mut timers = Timers::new();
        let mut tw = Typewriter::new(TypewriterConfig::new(vec!["hi"]));
        tw.start(&mut timers);

        pump(&mut tw, &mut timers, 30_000);
        // Still exactly one pending tick: the loop never ends.
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn test_exactly_one_pending_timer_while_running() {
        let mut timers = Timers::new();
        let mut tw = Typewriter::new(TypewriterConfig::new(vec!["hello"]));
        tw.start(&mut timers);
        tw.start(&mut timers); // double-start is a no-op

        assert_eq!(timers.pending(), 1);
        pump(&mut tw, &mut timers, 350);
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let mut timers = Timers::new();
        let mut tw = Typewriter::new(TypewriterConfig::new(vec!["hello"]));
        tw.start(&mut timers);
        pump(&mut tw, &mut timers, 250);

        tw.stop(&mut timers);
        assert_eq!(timers.pending(), 0);

        // No state mutation after disposal.
        let frozen = tw.displayed().get();
        assert!(timers.advance(60_000).is_empty());
        assert_eq!(tw.displayed().get(), frozen);
    }

    #[test]
    fn test_empty_item_list_is_inert() {
        let mut timers = Timers::new();
        let mut tw = Typewriter::new(TypewriterConfig::new(vec![]));
        tw.start(&mut timers);

        assert_eq!(timers.pending(), 0);
        assert_eq!(tw.displayed().get(), "");
    }

    #[test]
    fn test_multibyte_items_split_on_char_boundaries() {
        let mut timers = Timers::new();
        let mut tw = Typewriter::new(TypewriterConfig::new(vec!["héllo"]));
        tw.start(&mut timers);

        let seen = pump(&mut tw, &mut timers, 500);
        assert_eq!(seen, vec!["h", "hé", "hél", "héll", "héllo"]);
    }

    #[test]
    fn test_finish_shows_first_item() {
        let mut timers = Timers::new();
        let mut tw = Typewriter::new(TypewriterConfig::new(vec!["Software Engineer"]));
        tw.start(&mut timers);
        tw.finish(&mut timers);

        assert_eq!(tw.displayed().get(), "Software Engineer");
        assert_eq!(timers.pending(), 0);
    }
}
