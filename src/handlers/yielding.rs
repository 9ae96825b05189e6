//! Task yielding flavor

use crate::queue::ReadyQueue;
use crate::task::Schedulable;

/// Re-queues the yielding task and dispatches the next ready one.
///
/// The yielding task re-enters the queue behind its same-priority peers,
/// so with only one runnable task this hands the CPU straight back.
pub fn run_next<'a, T, S>(scheduler: &mut S, current: &'a T) -> &'a T
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T>,
{
    scheduler.ready(current);

    scheduler
        .next()
        .expect("ready queue cannot be empty after enqueueing the yielding task")
}
