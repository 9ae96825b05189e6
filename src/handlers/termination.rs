//! Task termination flavors
//!
//! The finished task never re-enters the queue; the handler only picks a
//! successor.

use crate::idle::HasIdleTask;
use crate::queue::ReadyQueue;
use crate::task::Schedulable;

/// Dispatches the next ready task, or `None` if the queue is empty.
pub fn run_next<'a, T, S>(scheduler: &mut S, _current: &'a T) -> Option<&'a T>
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T>,
{
    scheduler.next()
}

/// Dispatches the next ready task, falling back to the idle task.
pub fn run_next_with_idle<'a, T, S>(scheduler: &mut S, _current: &'a T) -> &'a T
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T> + HasIdleTask<'a, T>,
{
    match scheduler.next() {
        Some(task) => task,
        None => scheduler.idle_task(),
    }
}
