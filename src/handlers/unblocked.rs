//! Task unblocked flavors (group-capable)
//!
//! All flavors share one calling convention. An *intermediate* call passes
//! `current = None`: the unblocked task is enqueued and no decision is
//! made. A *terminating* call passes the current running task, optionally
//! together with a final unblocked task, and yields the dispatch decision
//! for the whole batch. The scheduler keeps no batch state; the integrator
//! must finish every batch with exactly one terminating call.

use crate::idle::{is_idle, HasIdleTask};
use crate::queue::ReadyQueue;
use crate::task::Schedulable;

fn stage<'a, T, S>(scheduler: &mut S, task: Option<&'a T>)
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T>,
{
    let task = task.expect("usage error: an intermediate unblock call must carry a task");

    scheduler.ready(task);
}

/// Preemptive: on the terminating call, dispatch the next ready task.
///
/// The previously running task is discarded from the decision; callers
/// that want it considered must re-queue it beforehand or use
/// [`run_next_with_idle`].
pub fn run_next<'a, T, S>(
    scheduler: &mut S,
    current: Option<&'a T>,
    task: Option<&'a T>,
) -> Option<&'a T>
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T>,
{
    if current.is_none() {
        stage(scheduler, task);
        return None;
    }

    if let Some(task) = task {
        scheduler.ready(task);
    }

    scheduler.next()
}

/// Preemptive with idle support: on the terminating call, the current
/// task re-enters the queue (unless it is the idle task) and the best
/// ready task runs.
pub fn run_next_with_idle<'a, T, S>(
    scheduler: &mut S,
    current: Option<&'a T>,
    task: Option<&'a T>,
) -> Option<&'a T>
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T> + HasIdleTask<'a, T>,
{
    let current = match current {
        None => {
            stage(scheduler, task);
            return None;
        }
        Some(current) => current,
    };

    if let Some(task) = task {
        scheduler.ready(task);
    }

    if !is_idle(scheduler, current) {
        scheduler.ready(current);
    }

    log::debug!("unblock: batch terminated, dispatching best ready task");

    Some(match scheduler.next() {
        Some(next) => next,
        None => scheduler.idle_task(),
    })
}

/// Cooperative: the unblocked task queues up, `current` keeps the CPU.
pub fn keep_running_current<'a, T, S>(
    scheduler: &mut S,
    current: Option<&'a T>,
    task: Option<&'a T>,
) -> Option<&'a T>
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T>,
{
    if current.is_none() {
        stage(scheduler, task);
        return None;
    }

    if let Some(task) = task {
        scheduler.ready(task);
    }

    current
}

/// Cooperative with idle support: `current` keeps the CPU unless it is the
/// idle task, in which case the best ready task runs instead.
pub fn keep_running_current_with_idle<'a, T, S>(
    scheduler: &mut S,
    current: Option<&'a T>,
    task: Option<&'a T>,
) -> Option<&'a T>
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T> + HasIdleTask<'a, T>,
{
    let current = match current {
        None => {
            stage(scheduler, task);
            return None;
        }
        Some(current) => current,
    };

    let task = match task {
        // Bare terminating call: nothing new to admit.
        None => return Some(current),
        Some(task) => task,
    };

    scheduler.ready(task);

    if is_idle(scheduler, current) {
        scheduler.next()
    } else {
        Some(current)
    }
}
