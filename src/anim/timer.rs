//! Virtual-time timer registry.
//!
//! Every animation in folio schedules its ticks here instead of owning a
//! thread or an OS timer. The registry keeps a monotonic virtual clock in
//! milliseconds; the event loop advances it by measured wall time, and
//! tests advance it directly - no sleeping, fully deterministic.
//!
//! # Contract
//!
//! - Timers are one-shot. A looping animation reschedules itself from its
//!   tick handler, so each widget holds exactly one pending handle at a
//!   time and double-start bugs are structurally impossible.
//! - `cancel` is idempotent and safe on stale handles.
//! - `pending()` exposes the number of live timers, so tests can assert
//!   that halting a widget mid-cycle leaves nothing behind.
//!
//! # Example
//!
//! ```
//! use folio::anim::timer::Timers;
//!
//! let mut timers = Timers::new();
//! let h = timers.schedule(100);
//! assert_eq!(timers.pending(), 1);
//!
//! let fired = timers.advance(100);
//! assert_eq!(fired, vec![h]);
//! assert_eq!(timers.pending(), 0);
//! ```

// =============================================================================
// Handle
// =============================================================================

/// Opaque handle to a scheduled timer.
///
/// Handles are never reused: each call to `schedule` mints a fresh id, so
/// a stale handle kept after cancel or fire can never alias a new timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

// =============================================================================
// Registry
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: u64,
    due: u64,
}

/// Virtual-time timer registry.
#[derive(Debug, Default)]
pub struct Timers {
    now: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl Timers {
    /// Create an empty registry at virtual time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[inline]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of pending (scheduled, not yet fired) timers.
    #[inline]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Check whether a handle refers to a still-pending timer.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.id == handle.0)
    }

    /// Schedule a one-shot timer `delay_ms` from now.
    ///
    /// A zero delay fires on the next `advance`, even `advance(0)`.
    pub fn schedule(&mut self, delay_ms: u64) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now.saturating_add(delay_ms),
        });
        TimerHandle(id)
    }

    /// Cancel a pending timer. Returns true if it was still pending.
    ///
    /// Cancelling an already-fired or already-cancelled handle is a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != handle.0);
        self.entries.len() != before
    }

    /// Advance virtual time by `dt_ms` and collect every timer that came
    /// due, ordered by due time (schedule order breaks ties).
    pub fn advance(&mut self, dt_ms: u64) -> Vec<TimerHandle> {
        self.now = self.now.saturating_add(dt_ms);
        let now = self.now;

        let mut fired: Vec<Entry> = Vec::new();
        self.entries.retain(|e| {
            if e.due <= now {
                fired.push(*e);
                false
            } else {
                true
            }
        });

        fired.sort_by_key(|e| (e.due, e.id));
        fired.into_iter().map(|e| TimerHandle(e.id)).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
