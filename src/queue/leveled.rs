//! Priority-bucketed ready queues
//!
//! Both policies map a priority level to a per-level sub-queue, itself any
//! ready-queue policy (typically [`FifoQueue`](crate::queue::FifoQueue),
//! which makes the dispatch order within a level first-come-first-served).
//! [`ReadyQueue::next`] scans levels from the highest downwards and yields
//! the head of the first non-empty sub-queue.
//!
//! [`ArrayLevelQueue`] backs the mapping with a static array bounded by a
//! compile-time level count: constant-time enqueue, linear scan, no
//! allocation past construction. [`MappedLevelQueue`] uses an ordered map
//! and creates sub-queues lazily on first enqueue at a level.

use alloc::collections::BTreeMap;
use core::array;

use crate::queue::{AdjustPositions, ReadyQueue, RemoveTasks};
use crate::task::{Level, Prioritized};

/// A leveled ready queue backed by a static array of sub-queues.
///
/// `LEVELS` is the number of distinct priority levels; every task priority
/// must satisfy `priority.level() < LEVELS`. All sub-queues exist from
/// construction.
pub struct ArrayLevelQueue<'a, T, Q, const LEVELS: usize>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
    Q: ReadyQueue<'a, T>,
{
    levels: [Q; LEVELS],
    _task: core::marker::PhantomData<&'a T>,
}

impl<'a, T, Q, const LEVELS: usize> ArrayLevelQueue<'a, T, Q, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
    Q: ReadyQueue<'a, T> + Default,
{
    /// Creates the queue with one default sub-queue per level.
    pub fn new() -> Self {
        Self {
            levels: array::from_fn(|_| Q::default()),
            _task: core::marker::PhantomData,
        }
    }
}

impl<'a, T, Q, const LEVELS: usize> Default for ArrayLevelQueue<'a, T, Q, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
    Q: ReadyQueue<'a, T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, Q, const LEVELS: usize> ReadyQueue<'a, T> for ArrayLevelQueue<'a, T, Q, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
    Q: ReadyQueue<'a, T>,
{
    fn next(&mut self) -> Option<&'a T> {
        for (index, level) in self.levels.iter_mut().enumerate().rev() {
            if let Some(task) = level.next() {
                log::trace!("leveled: dispatching from level {}", index);
                return Some(task);
            }
        }

        None
    }

    fn ready(&mut self, task: &'a T) {
        let level = task.priority().level();

        assert!(
            level < LEVELS,
            "usage error: priority level {} exceeds the configured maximum {}",
            level,
            LEVELS - 1
        );

        self.levels[level].ready(task);
    }
}

impl<'a, T, Q, const LEVELS: usize> RemoveTasks<'a, T> for ArrayLevelQueue<'a, T, Q, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
    Q: RemoveTasks<'a, T>,
{
    fn remove(&mut self, task: &'a T) {
        self.levels[task.priority().level()].remove(task);
    }
}

impl<'a, T, Q, const LEVELS: usize> AdjustPositions<'a, T> for ArrayLevelQueue<'a, T, Q, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
    Q: RemoveTasks<'a, T>,
{
    fn adjust_position(&mut self, task: &'a T, old_priority: T::Priority) {
        self.levels[old_priority.level()].remove(task);
        self.ready(task);
    }
}

/// A leveled ready queue backed by an ordered map of sub-queues.
///
/// Levels come into existence on the first enqueue at that priority and
/// stay allocated afterwards. Enqueue is `O(log L)` in the number of
/// populated levels; the scan is linear over them. `next` never creates a
/// level.
pub struct MappedLevelQueue<'a, T, Q>
where
    T: Prioritized + ?Sized,
    Q: ReadyQueue<'a, T>,
{
    levels: BTreeMap<T::Priority, Q>,
    _task: core::marker::PhantomData<&'a T>,
}

impl<'a, T, Q> MappedLevelQueue<'a, T, Q>
where
    T: Prioritized + ?Sized,
    Q: ReadyQueue<'a, T> + Default,
{
    /// Creates an empty queue with no levels populated.
    pub const fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
            _task: core::marker::PhantomData,
        }
    }
}

impl<'a, T, Q> Default for MappedLevelQueue<'a, T, Q>
where
    T: Prioritized + ?Sized,
    Q: ReadyQueue<'a, T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, Q> ReadyQueue<'a, T> for MappedLevelQueue<'a, T, Q>
where
    T: Prioritized + ?Sized,
    Q: ReadyQueue<'a, T> + Default,
{
    fn next(&mut self) -> Option<&'a T> {
        // Greatest key first; a populated but drained level yields nothing
        // and the scan moves on.
        self.levels.values_mut().rev().find_map(Q::next)
    }

    fn ready(&mut self, task: &'a T) {
        self.levels.entry(task.priority()).or_default().ready(task);
    }
}

impl<'a, T, Q> RemoveTasks<'a, T> for MappedLevelQueue<'a, T, Q>
where
    T: Prioritized + ?Sized,
    Q: RemoveTasks<'a, T> + Default,
{
    fn remove(&mut self, task: &'a T) {
        match self.levels.get_mut(&task.priority()) {
            Some(level) => level.remove(task),
            None => panic!("usage error: task to remove is not in the ready queue"),
        }
    }
}

impl<'a, T, Q> AdjustPositions<'a, T> for MappedLevelQueue<'a, T, Q>
where
    T: Prioritized + ?Sized,
    Q: RemoveTasks<'a, T> + Default,
{
    fn adjust_position(&mut self, task: &'a T, old_priority: T::Priority) {
        match self.levels.get_mut(&old_priority) {
            Some(level) => level.remove(task),
            None => panic!("usage error: task to re-seat is not in the ready queue"),
        }

        self.ready(task);
    }
}
