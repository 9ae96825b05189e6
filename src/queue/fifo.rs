//! First-come, first-served ready queue

use alloc::collections::VecDeque;
use core::ptr;

use crate::queue::{ReadyQueue, RemoveTasks};
use crate::task::Schedulable;

/// A ready queue that dispatches tasks in arrival order.
///
/// Insertion appends at the tail; [`ReadyQueue::next`] removes the head.
/// Also serves as the per-level sub-queue of the leveled policies, where
/// its arrival order provides the stable tie-break within a priority
/// class.
pub struct FifoQueue<'a, T: Schedulable + ?Sized> {
    queue: VecDeque<&'a T>,
}

impl<'a, T: Schedulable + ?Sized> FifoQueue<'a, T> {
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

impl<'a, T: Schedulable + ?Sized> Default for FifoQueue<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Schedulable + ?Sized> ReadyQueue<'a, T> for FifoQueue<'a, T> {
    fn next(&mut self) -> Option<&'a T> {
        self.queue.pop_front()
    }

    fn ready(&mut self, task: &'a T) {
        self.queue.push_back(task);
        log::trace!("fifo: task enqueued (len={})", self.queue.len());
    }
}

impl<'a, T: Schedulable + ?Sized> RemoveTasks<'a, T> for FifoQueue<'a, T> {
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
