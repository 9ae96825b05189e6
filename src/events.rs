//! Scheduling event surface
//!
//! One trait per scheduling event. A concrete scheduler implements exactly
//! the events it supports, each method delegating to a chosen flavor from
//! [`crate::handlers`]; integrators and drivers bound generic code by the
//! events they intend to raise, so raising an unsupported event is a
//! compile error rather than a runtime surprise.
//!
//! Two events support group operations (see the module docs of
//! [`crate::handlers::unblocked`]): their methods accept optional
//! arguments and may return `None` for intermediate calls. Every other
//! method is a terminating call and returns the task to dispatch.

use crate::task::Prioritized;

/// Raised when a new task enters the system.
pub trait CreationHandler<'a, T: ?Sized> {
    /// Decides between the current running task and the newly created one.
    fn on_task_created(&mut self, current: &'a T, task: &'a T) -> &'a T;
}

/// Raised when the current running task finishes or terminates itself.
pub trait TerminationHandler<'a, T: ?Sized> {
    /// Picks the task to run after `current` went away.
    ///
    /// Flavors without idle support return `None` when no task is ready.
    fn on_task_finished(&mut self, current: &'a T) -> Option<&'a T>;
}

/// Raised when the current running task voluntarily relinquishes the CPU.
pub trait YieldHandler<'a, T: ?Sized> {
    /// Re-queues `current` and picks the next task.
    fn on_task_yielded(&mut self, current: &'a T) -> &'a T;
}

/// Raised when the current running task blocks on an external resource.
///
/// The blocked task is held by the wait queue of the blocking primitive,
/// not by the scheduler.
pub trait BlockHandler<'a, T: ?Sized> {
    /// Picks the task to run while `current` waits.
    ///
    /// Flavors without idle support return `None` when no task is ready.
    fn on_task_blocked(&mut self, current: &'a T) -> Option<&'a T>;
}

/// Raised when a task leaves a wait queue. Supports group operations.
pub trait UnblockHandler<'a, T: ?Sized> {
    /// Admits an unblocked task and, on terminating calls, picks the task
    /// to dispatch.
    ///
    /// * `(None, Some(task))`: intermediate, enqueue only, returns `None`.
    /// * `(Some(current), None)`: terminating, fetch the decision.
    /// * `(Some(current), Some(task))`: terminating, enqueue then fetch.
    fn on_task_unblocked(&mut self, current: Option<&'a T>, task: Option<&'a T>) -> Option<&'a T>;
}

/// Raised when a ready task is killed by another task. Supports group
/// operations with the same calling convention as [`UnblockHandler`].
///
/// The killed task must be in the ready queue and must not be the current
/// running task; a task terminating itself goes through
/// [`TerminationHandler`] instead.
pub trait KillHandler<'a, T: ?Sized> {
    /// Removes a killed task and, on terminating calls, picks the task to
    /// dispatch.
    fn on_task_killed(&mut self, current: Option<&'a T>, task: Option<&'a T>) -> Option<&'a T>;
}

/// Raised when another task changed the priority of a ready task.
pub trait PriorityChangeHandler<'a, T: Prioritized + ?Sized> {
    /// Re-seats `task` and decides whether it now preempts `current`.
    ///
    /// `task` must be in the ready queue and must differ from `current`;
    /// a task changing its own priority goes through
    /// [`SelfPriorityChangeHandler`].
    fn on_task_priority_changed(
        &mut self,
        current: &'a T,
        task: &'a T,
        old_priority: T::Priority,
    ) -> &'a T;
}

/// Raised when the current running task changed its own priority.
pub trait SelfPriorityChangeHandler<'a, T: ?Sized> {
    /// Re-queues `current` under its new priority and picks the next task.
    fn on_self_priority_changed(&mut self, current: &'a T) -> &'a T;
}

/// Raised when the current running task has consumed its entire quantum.
pub trait QuantumUsedUpHandler<'a, T: ?Sized> {
    /// Penalizes or recharges `current` and picks the next task.
    fn on_quantum_used_up(&mut self, current: &'a T) -> &'a T;
}

/// Raised on every timer interrupt.
pub trait TimerHandler<'a, T: ?Sized> {
    /// Accounts the tick and decides whether `current` keeps the CPU.
    fn on_timer_interrupt(&mut self, current: &'a T) -> &'a T;
}
