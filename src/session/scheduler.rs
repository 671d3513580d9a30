//! A single-threaded logical-clock scheduler.
//!
//! Replaces browser-style callback timers (`setTimeout`/`setInterval`)
//! with an explicit event queue: register a one-shot or repeating timer
//! carrying an event value, get back a cancellable handle, and advance the
//! clock to collect whatever fired.
//!
//! ## Determinism
//!
//! There is no wall clock and no thread. [`Scheduler::advance`] fires due
//! timers in chronological order, ties broken by registration order, and a
//! repeating timer may fire several times within a single advance. The same
//! schedule always produces the same event sequence.
//!
//! ## Stale events
//!
//! Cancelling a timer only prevents *future* firings. Events already
//! collected by an `advance` batch still reach the consumer; it is the
//! consumer's job to guard against them (the session does this with its
//! phase preconditions).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle to a scheduled timer. Used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl TimerId {
    /// Create a new timer ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct TimerEntry<E> {
    due_at_ms: u64,
    /// `Some(interval)` for repeating timers, `None` for one-shots.
    every_ms: Option<u64>,
    event: E,
}

/// Logical-clock timer queue.
///
/// Generic over the event type so consumers define their own vocabulary;
/// the scheduler never interprets events, it just stores and returns them.
#[derive(Clone, Debug, Default)]
pub struct Scheduler<E> {
    now_ms: u64,
    next_id: u64,
    timers: FxHashMap<TimerId, TimerEntry<E>>,
}

impl<E: Clone> Scheduler<E> {
    /// Create an empty scheduler at logical time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            timers: FxHashMap::default(),
        }
    }

    /// Current logical time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of live timers.
    #[must_use]
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Schedule a one-shot timer `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, event: E) -> TimerId {
        self.insert(self.now_ms + delay_ms, None, event)
    }

    /// Schedule a repeating timer, first firing `interval_ms` from now.
    ///
    /// A zero interval is treated as one millisecond to keep `advance`
    /// from looping forever.
    pub fn schedule_every(&mut self, interval_ms: u64, event: E) -> TimerId {
        let interval_ms = interval_ms.max(1);
        self.insert(self.now_ms + interval_ms, Some(interval_ms), event)
    }

    /// Cancel a timer. Returns true if it was still live.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Cancel every live timer.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Advance the clock by `elapsed_ms`, returning every event that fired.
    ///
    /// Events come back in firing order: chronological, ties broken by
    /// registration order. Repeating timers fire once per elapsed interval.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<E> {
        let target_ms = self.now_ms.saturating_add(elapsed_ms);
        let mut fired = Vec::new();

        loop {
            let next = self
                .timers
                .iter()
                .filter(|(_, entry)| entry.due_at_ms <= target_ms)
                .min_by_key(|(id, entry)| (entry.due_at_ms, id.raw()))
                .map(|(&id, _)| id);

            let Some(id) = next else { break };

            let mut expired = false;
            if let Some(entry) = self.timers.get_mut(&id) {
                fired.push(entry.event.clone());
                match entry.every_ms {
                    Some(interval) => entry.due_at_ms += interval,
                    None => expired = true,
                }
            }
            if expired {
                self.timers.remove(&id);
            }
        }

        self.now_ms = target_ms;
        fired
    }

    fn insert(&mut self, due_at_ms: u64, every_ms: Option<u64>, event: E) -> TimerId {
        let id = TimerId::new(self.next_id);
        self.next_id += 1;
        self.timers.insert(
            id,
            TimerEntry {
                due_at_ms,
                every_ms,
                event,
            },
        );
        id
    }
}
