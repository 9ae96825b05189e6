//! Ready-queue policies
//!
//! A policy owns the ordering discipline of the ready set and exposes the
//! two scheduling primitives every event handler is written against:
//! [`ReadyQueue::ready`] and [`ReadyQueue::next`]. Policies never own
//! tasks; they hold shared references into storage owned by the integrator.
//!
//! Optional capabilities ([`RemoveTasks`], [`AdjustPositions`]) are split
//! into their own traits so that handlers which need them (kill,
//! external priority change) can only be assembled on policies that
//! provide them.

use alloc::boxed::Box;

use crate::task::{Prioritized, Schedulable};

pub mod fifo;
pub mod hooks;
pub mod leveled;
pub mod prioritized;

pub use fifo::FifoQueue;
pub use hooks::{DequeueHook, EnqueueHook, QuantumAllocator, WithDequeueHook, WithEnqueueHook};
pub use leveled::{ArrayLevelQueue, MappedLevelQueue};
pub use prioritized::PrioritySingleQueue;

/// The scheduling primitives of a ready-queue policy.
pub trait ReadyQueue<'a, T: Schedulable + ?Sized> {
    /// Removes and returns the highest-precedence ready task.
    ///
    /// Returns `None` if no task is ready.
    fn next(&mut self) -> Option<&'a T>;

    /// Inserts a ready task per the queue discipline.
    ///
    /// The task must not already be in any ready queue, and must not be
    /// the currently running task.
    fn ready(&mut self, task: &'a T);
}

/// A policy that can remove an arbitrary ready task.
pub trait RemoveTasks<'a, T: Schedulable + ?Sized>: ReadyQueue<'a, T> {
    /// Removes the given task from the ready set.
    ///
    /// The task must currently be in this queue.
    fn remove(&mut self, task: &'a T);
}

/// A policy that can re-seat a task after its priority changed.
pub trait AdjustPositions<'a, T: Prioritized + ?Sized>: ReadyQueue<'a, T> {
    /// Moves the given ready task to the position mandated by its new
    /// priority.
    ///
    /// `old_priority` is the level the task had when it was enqueued;
    /// the task itself already reports the new level.
    fn adjust_position(&mut self, task: &'a T, old_priority: T::Priority);
}

// Boxed policies compose the same way as concrete ones, trading a vtable
// call per primitive for runtime-selected disciplines.

impl<'a, T, Q> ReadyQueue<'a, T> for Box<Q>
where
    T: Schedulable + ?Sized,
    Q: ReadyQueue<'a, T> + ?Sized,
{
    fn next(&mut self) -> Option<&'a T> {
        (**self).next()
    }

    fn ready(&mut self, task: &'a T) {
        (**self).ready(task);
    }
}

/// A ready-queue policy behind dynamic dispatch.
pub type BoxedQueue<'a, T> = Box<dyn ReadyQueue<'a, T> + 'a>;
