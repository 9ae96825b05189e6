//! Priority-ordered single ready queue

use alloc::collections::VecDeque;
use core::ptr;

use crate::queue::{AdjustPositions, ReadyQueue, RemoveTasks};
use crate::task::Prioritized;

/// A single ordered queue keyed by task priority.
///
/// [`ReadyQueue::next`] always yields the greatest-priority ready task.
/// Insertion is stable: a task is placed behind every task of greater or
/// equal priority, so equal-priority tasks dispatch in arrival order.
/// Earliest-deadline-first scheduling relies on this for its
/// first-come-first-serve tie-break.
pub struct PrioritySingleQueue<'a, T: Prioritized + ?Sized> {
    queue: VecDeque<&'a T>,
}

impl<'a, T: Prioritized + ?Sized> PrioritySingleQueue<'a, T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self { queue: VecDeque::new() }
    }

    /// Returns the number of ready tasks.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if no task is ready.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<'a, T: Prioritized + ?Sized> Default for PrioritySingleQueue<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Prioritized + ?Sized> ReadyQueue<'a, T> for PrioritySingleQueue<'a, T> {
    fn next(&mut self) -> Option<&'a T> {
        self.queue.pop_front()
    }

    fn ready(&mut self, task: &'a T) {
        // First slot whose occupant ranks strictly below the newcomer;
        // everything of greater or equal priority stays ahead of it.
        let slot = self
            .queue
            .iter()
            .position(|ready| ready.priority() < task.priority())
            .unwrap_or(self.queue.len());

        self.queue.insert(slot, task);
        log::trace!("priority queue: task enqueued at slot {}", slot);
    }
}

impl<'a, T: Prioritized + ?Sized> RemoveTasks<'a, T> for PrioritySingleQueue<'a, T> {
    fn remove(&mut self, task: &'a T) {
        let position = self.queue.iter().position(|ready| ptr::eq(*ready, task));

        match position {
            Some(index) => {
                self.queue.remove(index);
            }
            None => panic!("usage error: task to remove is not in the ready queue"),
        }
    }
}

impl<'a, T: Prioritized + ?Sized> AdjustPositions<'a, T> for PrioritySingleQueue<'a, T> {
    fn adjust_position(&mut self, task: &'a T, _old_priority: T::Priority) {
        // Re-seating loses the original arrival slot within the new
        // priority class; the re-seated task queues behind its new peers.
        self.remove(task);
        self.ready(task);
    }
}
