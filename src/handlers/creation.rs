//! Task creation flavors

use crate::idle::{is_idle, HasIdleTask};
use crate::queue::ReadyQueue;
use crate::task::{order_by_priority, Prioritized, Schedulable};

/// Cooperative: the newly created task queues up, `current` keeps the CPU.
pub fn keep_running_current<'a, T, S>(scheduler: &mut S, current: &'a T, task: &'a T) -> &'a T
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T>,
{
    scheduler.ready(task);

    current
}

/// Cooperative with idle support: as [`keep_running_current`], except that
/// a newly created task is dispatched directly instead of queueing behind
/// the idle task.
pub fn keep_running_current_with_idle<'a, T, S>(
    scheduler: &mut S,
    current: &'a T,
    task: &'a T,
) -> &'a T
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T> + HasIdleTask<'a, T>,
{
    if is_idle(scheduler, current) {
        return task;
    }

    scheduler.ready(task);

    current
}

/// Preemptive: whichever of `current` and the new task has the higher
/// priority runs; the other queues up. A tie keeps `current` on the CPU.
pub fn run_higher_priority<'a, T, S>(scheduler: &mut S, current: &'a T, task: &'a T) -> &'a T
where
    T: Prioritized + ?Sized,
    S: ReadyQueue<'a, T>,
{
    let (run, wait) = order_by_priority(current, task);

    scheduler.ready(wait);

    run
}

/// Preemptive with idle support: as [`run_higher_priority`], except that a
/// newly created task always displaces the idle task directly.
pub fn run_higher_priority_with_idle<'a, T, S>(
    scheduler: &mut S,
    current: &'a T,
    task: &'a T,
) -> &'a T
where
    T: Prioritized + ?Sized,
    S: ReadyQueue<'a, T> + HasIdleTask<'a, T>,
{
    if is_idle(scheduler, current) {
        return task;
    }

    let (run, wait) = order_by_priority(current, task);

    if core::ptr::eq(run, task) {
        log::debug!("creation: new task preempts current");
    }

    scheduler.ready(wait);

    run
}
