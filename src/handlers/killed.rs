//! Task killed flavor (group-capable)
//!
//! Same calling convention as [`crate::handlers::unblocked`]: intermediate
//! calls (`current = None`) remove a victim without making a decision; the
//! terminating call settles the dispatch.
//!
//! The victim must reside in the ready queue, so this flavor is only
//! assemblable on policies with removal support. A task killing itself is
//! a termination event, not a kill.

use crate::queue::RemoveTasks;
use crate::task::Schedulable;

/// Removes the victim from the ready queue; `current` keeps the CPU.
pub fn keep_running_current<'a, T, S>(
    scheduler: &mut S,
    current: Option<&'a T>,
    task: Option<&'a T>,
) -> Option<&'a T>
where
    T: Schedulable + ?Sized,
    S: RemoveTasks<'a, T>,
{
    if let (Some(current), Some(task)) = (current, task) {
        assert!(
            !core::ptr::eq(current, task),
            "usage error: the current running task cannot be the task being killed"
        );
    }

    let current = match current {
        None => {
            let task = task.expect("usage error: an intermediate kill call must carry a task");
            scheduler.remove(task);
            return None;
        }
        Some(current) => current,
    };

    if let Some(task) = task {
        scheduler.remove(task);
    }

    Some(current)
}
