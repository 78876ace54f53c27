//! Single-threaded timer queue on a virtual clock.
//!
//! Page behaviour (carousel rotation, navbar debounce) is driven by timers in
//! a cooperative event loop. This queue models that loop deterministically:
//! time only moves when [`TimerQueue::advance`] or [`TimerQueue::run_for`] is
//! called, and timers fire in due order, ties broken by creation order.
//!
//! The queue does not own callbacks. Firing yields a [`TimerId`] and whoever
//! scheduled it decides what the tick means, so component state stays in the
//! component and nothing hides behind a shared closure.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry {
    due: Duration,
    /// `Some` for intervals, which reschedule after firing.
    period: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    entries: BTreeMap<TimerId, Entry>,
}

/// Intervals shorter than this would fire without bound inside one advance.
const MIN_PERIOD: Duration = Duration::from_millis(1);

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire once after `delay`.
    pub fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.insert(delay, None)
    }

    /// Fire every `period`, first after one full period.
    pub fn set_interval(&mut self, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.insert(period, Some(period))
    }

    /// Cancel a timer. Returns `false` if it had already fired or been cleared.
    pub fn clear(&mut self, id: TimerId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of live timers.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Advance the clock by `by`, returning every timer that fired in order.
    ///
    /// Use [`run_for`](Self::run_for) when a firing must be able to schedule
    /// or cancel timers before the next one is considered.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        self.run_for(by, |_, id| fired.push(id));
        fired
    }

    /// Advance the clock by `by`, handing each firing to `on_fire` as it happens.
    pub fn run_for(&mut self, by: Duration, mut on_fire: impl FnMut(&mut TimerQueue, TimerId)) {
        let until = self.now + by;
        while let Some(id) = self.pop_due(until) {
            on_fire(self, id);
        }
        self.now = until;
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                due: self.now + delay,
                period,
            },
        );
        id
    }

    /// Take the earliest timer due at or before `until`, moving the clock to it.
    fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let (id, due) = self
            .entries
            .iter()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(id, e)| (e.due, **id))
            .map(|(id, e)| (*id, e.due))?;

        self.now = due;
        let entry = self.entries.get_mut(&id)?;
        match entry.period {
            Some(period) => entry.due = due + period,
            None => {
                self.entries.remove(&id);
            }
        }
        Some(id)
    }
}
