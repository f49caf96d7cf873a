//! Virtual-clock scheduler for resolution delays.
//!
//! Resolution delays are UX pauses, so they are modelled as tasks due at a
//! point on a clock the host advances, not as sleeps. Every task carries
//! the round it was scheduled for; starting a new round cancels the
//! outstanding ones.
//!
//! Tasks due at the same instant run in scheduling order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::core::{CardUid, RoundId};

/// Deferred engine work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    /// Mark two flipped cards as a found pair.
    ResolveMatch { first: CardUid, second: CardUid },
    /// Turn two flipped cards back over.
    ResolveMismatch { first: CardUid, second: CardUid },
    /// Run the win sequence.
    Celebrate,
}

/// A task with its due time and owning round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    /// Clock reading at which the task runs.
    pub due: Duration,
    /// Round the task belongs to.
    pub round: RoundId,
    /// The work.
    pub task: Task,
    pub(super) seq: u64,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of pending tasks plus the current clock reading.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    queue: BinaryHeap<Reverse<Scheduled>>,
    next_seq: u64,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// When the next task is due, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(job)| job.due)
    }

    /// Schedule `task` to run `delay` from now. Due times saturate at
    /// `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, round: RoundId, task: Task) -> Duration {
        let due = self.now.saturating_add(delay);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled { due, round, task, seq }));
        due
    }

    /// Take the earliest task due at or before `until`.
    ///
    /// The clock moves forward to the task's due time, so work scheduled
    /// while running it is timed from that instant.
    pub fn pop_due(&mut self, until: Duration) -> Option<Scheduled> {
        let due = self.next_due()?;
        if due > until {
            return None;
        }
        let Reverse(job) = self.queue.pop()?;
        self.now = self.now.max(job.due);
        Some(job)
    }

    /// Move the clock forward to `until` (never backwards).
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Drop every task belonging to `round`. Returns how many were dropped.
    pub fn cancel_round(&mut self, round: RoundId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|Reverse(job)| job.round != round);
        before - self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_runs_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(900), RoundId(1), Task::Celebrate);
        scheduler.schedule(
            ms(500),
            RoundId(1),
            Task::ResolveMatch { first: CardUid::new(0), second: CardUid::new(1) },
        );

        assert_eq!(scheduler.next_due(), Some(ms(500)));
        assert!(scheduler.pop_due(ms(499)).is_none());

        let first = scheduler.pop_due(ms(1000)).unwrap();
        assert!(matches!(first.task, Task::ResolveMatch { .. }));
        assert_eq!(scheduler.now(), ms(500));

        let second = scheduler.pop_due(ms(1000)).unwrap();
        assert_eq!(second.task, Task::Celebrate);
        assert_eq!(scheduler.now(), ms(900));

        assert!(scheduler.pop_due(ms(1000)).is_none());
        scheduler.settle(ms(1000));
        assert_eq!(scheduler.now(), ms(1000));
    }

    #[test]
    fn test_ties_run_in_scheduling_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(10), RoundId(1), Task::Celebrate);
        scheduler.schedule(
            ms(10),
            RoundId(1),
            Task::ResolveMismatch { first: CardUid::new(2), second: CardUid::new(3) },
        );

        assert_eq!(scheduler.pop_due(ms(10)).unwrap().task, Task::Celebrate);
        assert!(matches!(scheduler.pop_due(ms(10)).unwrap().task, Task::ResolveMismatch { .. }));
    }

    #[test]
    fn test_chained_delay_starts_at_fire_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(500), RoundId(1), Task::Celebrate);

        scheduler.pop_due(ms(2000)).unwrap();
        let due = scheduler.schedule(ms(600), RoundId(1), Task::Celebrate);

        assert_eq!(due, ms(1100));
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(1), RoundId(1), Task::Celebrate);
        scheduler.schedule(ms(2), RoundId(2), Task::Celebrate);
        scheduler.schedule(ms(3), RoundId(1), Task::Celebrate);

        assert_eq!(scheduler.cancel_round(RoundId(1)), 2);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.pop_due(ms(5)).unwrap().round, RoundId(2));
        assert_eq!(scheduler.next_due(), None);
    }

    #[test]
    fn test_huge_delay_saturates() {
        let mut scheduler = Scheduler::new();
        scheduler.settle(ms(10));

        let due = scheduler.schedule(Duration::MAX, RoundId(1), Task::Celebrate);

        assert_eq!(due, Duration::MAX);
        assert!(scheduler.pop_due(ms(1000)).is_none());
        assert!(scheduler.pop_due(Duration::MAX).is_some());
    }

    #[test]
    fn test_settle_never_rewinds() {
        let mut scheduler = Scheduler::new();
        scheduler.settle(ms(50));
        scheduler.settle(ms(10));
        assert_eq!(scheduler.now(), ms(50));
    }
}
