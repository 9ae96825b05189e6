//! Priority change flavors

use crate::queue::{AdjustPositions, ReadyQueue};
use crate::task::Prioritized;

/// Another task changed the priority of a ready task: re-seat it, then
/// preempt `current` only if the re-seated task now ranks strictly higher.
pub fn rebalance<'a, T, S>(
    scheduler: &mut S,
    current: &'a T,
    task: &'a T,
    old_priority: T::Priority,
) -> &'a T
where
    T: Prioritized + ?Sized,
    S: AdjustPositions<'a, T>,
{
    assert!(
        !core::ptr::eq(current, task),
        "usage error: a running task changing its own priority is a self-priority-change event"
    );

    scheduler.adjust_position(task, old_priority);

    if task.priority() > current.priority() {
        log::debug!("priority change: re-seated task preempts current");

        scheduler.ready(current);

        scheduler
            .next()
            .expect("ready queue cannot be empty after enqueueing the preempted task")
    } else {
        current
    }
}

/// The running task changed its own priority: it re-enters the queue under
/// the new level and the policy decides whether it runs again.
///
/// With a stable prioritized single queue a still-highest task wins the
/// CPU right back; with per-level FIFO buckets it queues behind its new
/// same-level peers and may hand over to one of them.
pub fn requeue_current<'a, T, S>(scheduler: &mut S, current: &'a T) -> &'a T
where
    T: Prioritized + ?Sized,
    S: ReadyQueue<'a, T>,
{
    scheduler.ready(current);

    scheduler
        .next()
        .expect("ready queue cannot be empty after enqueueing the current task")
}
