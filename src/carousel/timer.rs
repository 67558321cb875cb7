// SPDX-License-Identifier: MPL-2.0
//! Deadline-based timers driven by the caller's clock.
//!
//! Nothing here reads the wall clock: every operation takes `now`, so the
//! carousel behaves the same under a 16 ms frame tick and in unit tests.

use std::time::{Duration, Instant};

/// A one-shot deadline that can be armed, re-armed and cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// Arms the deadline `after` from `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.0 = Some(now + after);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    pub fn at(&self) -> Option<Instant> {
        self.0
    }

    /// Returns `true` exactly once when `now` reached the deadline, then clears it.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.0 {
            Some(at) if now >= at => {
                self.0 = None;
                true
            }
            _ => false,
        }
    }
}

/// Identity of an armed auto-play timer. A fresh id is issued each time the
/// timer is started, so a stale handle can never be mistaken for the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Armed {
    id: TimerId,
    next_fire: Instant,
}

/// Repeating auto-play timer. At most one instance is armed at any time:
/// starting always replaces the previous timer instead of adding a second one.
#[derive(Debug, Clone)]
pub struct AutoPlay {
    interval: Duration,
    armed: Option<Armed>,
    next_id: u64,
}

impl AutoPlay {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            armed: None,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stops any running timer and arms a new one firing every `interval`.
    pub fn start(&mut self, now: Instant) -> TimerId {
        self.stop();
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.armed = Some(Armed {
            id,
            next_fire: now + self.interval,
        });
        id
    }

    pub fn stop(&mut self) {
        self.armed = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.armed.is_some()
    }

    /// Identity of the live timer, if any.
    #[must_use]
    pub fn current(&self) -> Option<TimerId> {
        self.armed.map(|armed| armed.id)
    }

    #[must_use]
    pub fn next_fire(&self) -> Option<Instant> {
        self.armed.map(|armed| armed.next_fire)
    }

    /// Returns `true` when the timer elapsed. Fires at most once per call;
    /// missed periods are dropped rather than replayed in a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };
        if now < armed.next_fire {
            return false;
        }

        armed.next_fire += self.interval;
        if armed.next_fire <= now {
            armed.next_fire = now + self.interval;
        }
        true
    }
}
