//! Scheduler implementations.

use std::time::Duration;

use super::ticket::ResetTicket;

/// Timer facility the controller hands deferred resets to.
///
/// The controller calls `schedule` once per mismatch and `cancel` when a new
/// deal makes a pending ticket stale. When the delay elapses the host passes
/// the ticket back through `GameController::resolve_mismatch`.
///
/// Stale tickets are rejected by the controller, so `cancel` only needs to
/// free resources; the default does nothing.
pub trait Scheduler {
    /// Arrange for `ticket` to be resolved after `delay`.
    fn schedule(&mut self, delay: Duration, ticket: ResetTicket);

    /// Drop a pending ticket.
    fn cancel(&mut self, _ticket: ResetTicket) {}
}

/// Manual-clock scheduler.
///
/// Time only moves when `advance` is called, which makes deferred resets
/// testable without sleeping and lets frame-driven hosts feed their own
/// delta time.
///
/// ## Usage
///
/// ```
/// use std::time::Duration;
/// use memory_match::schedule::{Epoch, ResetTicket, Scheduler, TimerQueue};
///
/// let mut queue = TimerQueue::new();
/// let ticket = ResetTicket::new(Epoch::new(1), 0);
/// queue.schedule(Duration::from_millis(1000), ticket);
///
/// assert!(queue.advance(Duration::from_millis(999)).is_empty());
/// assert_eq!(queue.advance(Duration::from_millis(1)), vec![ticket]);
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    /// (due time, ticket), in insertion order
    entries: Vec<(Duration, ResetTicket)>,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed time on the queue's clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending tickets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time remaining until `ticket` is due, if it is pending.
    #[must_use]
    pub fn remaining(&self, ticket: ResetTicket) -> Option<Duration> {
        self.entries
            .iter()
            .find(|(_, t)| *t == ticket)
            .map(|(due, _)| due.saturating_sub(self.now))
    }

    /// Move the clock forward and take every ticket that became due.
    ///
    /// Due tickets are returned earliest first; ties keep scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ResetTicket> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let mut due: Vec<(Duration, ResetTicket)> = Vec::new();
        self.entries.retain(|&(at, ticket)| {
            if at <= now {
                due.push((at, ticket));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(at, _)| at);
        due.into_iter().map(|(_, ticket)| ticket).collect()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, ticket: ResetTicket) {
        self.entries.push((self.now.saturating_add(delay), ticket));
    }

    fn cancel(&mut self, ticket: ResetTicket) {
        self.entries.retain(|&(_, t)| t != ticket);
    }
}

/// Scheduler backed by a host callback.
///
/// Wraps e.g. a `setTimeout` binding or an event-loop timer. The callback
/// owns delivering the ticket back to the controller.
pub struct FnScheduler<F>(pub F);

impl<F> FnScheduler<F>
where
    F: FnMut(Duration, ResetTicket),
{
    /// Wrap a callback.
    pub fn new(callback: F) -> Self {
        Self(callback)
    }
}

impl<F> Scheduler for FnScheduler<F>
where
    F: FnMut(Duration, ResetTicket),
{
    fn schedule(&mut self, delay: Duration, ticket: ResetTicket) {
        (self.0)(delay, ticket);
    }
}

impl<F> std::fmt::Debug for FnScheduler<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnScheduler")
    }
}
