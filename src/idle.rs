//! Idle-task support
//!
//! Schedulers that guarantee a non-null dispatch decision carry an
//! [`IdleTaskSupport`] and expose it through [`HasIdleTask`]. Handler
//! flavors with `_with_idle` in their name consult the accessor when the
//! ready queue would otherwise come up empty, and to avoid parking the
//! idle task in the queue.
//!
//! The idle task is identified by pointer identity: it is the exact
//! reference handed to the scheduler at construction, never enqueued and
//! never owned.

/// Holder for the idle-task reference of a scheduler assembly.
pub struct IdleTaskSupport<'a, T: ?Sized> {
    idle_task: &'a T,
}

impl<'a, T: ?Sized> IdleTaskSupport<'a, T> {
    /// Stores the designated idle task.
    pub const fn new(idle_task: &'a T) -> Self {
        Self { idle_task }
    }

    /// Returns the idle task.
    pub fn idle_task(&self) -> &'a T {
        self.idle_task
    }
}

/// Accessor implemented by schedulers that support an idle task.
pub trait HasIdleTask<'a, T: ?Sized> {
    /// Returns the always-runnable fallback task.
    fn idle_task(&self) -> &'a T;
}

/// Returns `true` if `task` is the scheduler's idle task.
pub fn is_idle<'a, T, S>(scheduler: &S, task: &'a T) -> bool
where
    T: ?Sized,
    S: HasIdleTask<'a, T>,
{
    core::ptr::eq(task, scheduler.idle_task())
}
