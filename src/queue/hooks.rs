//! Policy extensions
//!
//! Cross-cutting code injected around the scheduling primitives of a base
//! policy. An enqueue hook runs before the task reaches the base
//! [`ReadyQueue::ready`]; a dequeue hook runs after the base
//! [`ReadyQueue::next`] produced a task. Hooks compose by nesting the
//! decorators; the outermost hook runs first.
//!
//! Any `FnMut(&T)` is a hook, so one-off extensions need no named type.

use crate::queue::{AdjustPositions, ReadyQueue, RemoveTasks};
use crate::task::{Prioritized, Quantized, QuantumSpecifier, Schedulable};

/// Code injected before a task is enqueued.
pub trait EnqueueHook<T: ?Sized> {
    /// Called with the task about to be passed to the base `ready`.
    fn before_enqueue(&mut self, task: &T);
}

impl<T: ?Sized, F: FnMut(&T)> EnqueueHook<T> for F {
    fn before_enqueue(&mut self, task: &T) {
        self(task);
    }
}

/// Code injected after a task has been dequeued.
pub trait DequeueHook<T: ?Sized> {
    /// Called with the task just returned by the base `next`.
    fn after_dequeue(&mut self, task: &T);
}

impl<T: ?Sized, F: FnMut(&T)> DequeueHook<T> for F {
    fn after_dequeue(&mut self, task: &T) {
        self(task);
    }
}

/// A policy wrapper that runs a hook before every enqueue.
pub struct WithEnqueueHook<P, H> {
    base: P,
    hook: H,
}

impl<P, H> WithEnqueueHook<P, H> {
    /// Wraps `base` so that `hook` runs before each `ready` call.
    pub const fn new(base: P, hook: H) -> Self {
        Self { base, hook }
    }
}

impl<'a, T, P, H> ReadyQueue<'a, T> for WithEnqueueHook<P, H>
where
    T: Schedulable + ?Sized,
    P: ReadyQueue<'a, T>,
    H: EnqueueHook<T>,
{
    fn next(&mut self) -> Option<&'a T> {
        self.base.next()
    }

    fn ready(&mut self, task: &'a T) {
        self.hook.before_enqueue(task);
        self.base.ready(task);
    }
}

impl<'a, T, P, H> RemoveTasks<'a, T> for WithEnqueueHook<P, H>
where
    T: Schedulable + ?Sized,
    P: RemoveTasks<'a, T>,
    H: EnqueueHook<T>,
{
    fn remove(&mut self, task: &'a T) {
        self.base.remove(task);
    }
}

impl<'a, T, P, H> AdjustPositions<'a, T> for WithEnqueueHook<P, H>
where
    T: Prioritized + ?Sized,
    P: AdjustPositions<'a, T>,
    H: EnqueueHook<T>,
{
    fn adjust_position(&mut self, task: &'a T, old_priority: T::Priority) {
        // Re-seating is not an arrival; the base policy moves the task
        // without re-running enqueue hooks.
        self.base.adjust_position(task, old_priority);
    }
}

/// A policy wrapper that runs a hook after every successful dequeue.
pub struct WithDequeueHook<P, H> {
    base: P,
    hook: H,
}

impl<P, H> WithDequeueHook<P, H> {
    /// Wraps `base` so that `hook` runs after each `next` call that
    /// produced a task.
    pub const fn new(base: P, hook: H) -> Self {
        Self { base, hook }
    }
}

impl<'a, T, P, H> ReadyQueue<'a, T> for WithDequeueHook<P, H>
where
    T: Schedulable + ?Sized,
    P: ReadyQueue<'a, T>,
    H: DequeueHook<T>,
{
    fn next(&mut self) -> Option<&'a T> {
        let task = self.base.next();

        if let Some(task) = task {
            self.hook.after_dequeue(task);
        }

        task
    }

    fn ready(&mut self, task: &'a T) {
        self.base.ready(task);
    }
}

impl<'a, T, P, H> RemoveTasks<'a, T> for WithDequeueHook<P, H>
where
    T: Schedulable + ?Sized,
    P: RemoveTasks<'a, T>,
    H: DequeueHook<T>,
{
    fn remove(&mut self, task: &'a T) {
        self.base.remove(task);
    }
}

/// The canonical enqueue hook: assigns a fresh quantum on every enqueue,
/// sized by the task's current priority level.
///
/// Multilevel feedback queues install this so that a task re-entering the
/// ready set after a demotion starts with the allotment of its new level.
pub struct QuantumAllocator<S> {
    specifier: S,
}

impl<S> QuantumAllocator<S> {
    /// Creates the hook around the given quantum specifier.
    pub const fn new(specifier: S) -> Self {
        Self { specifier }
    }
}

impl<T, S> EnqueueHook<T> for QuantumAllocator<S>
where
    T: Prioritized + Quantized + ?Sized,
    S: QuantumSpecifier<T>,
{
    fn before_enqueue(&mut self, task: &T) {
        task.allocate_ticks(self.specifier.ticks_for(task.priority()));
    }
}
