//! Shared fixture task types for the scheduler test suites.
#![allow(dead_code)]

use core::cell::Cell;

use sched_core::realtime::{Deadline, Period};
use sched_core::task::{
    AutoPriority, Prioritized, PriorityMutable, Quantized, QuantumSpecifier, Schedulable,
};

/// Highest priority level a [`SimpleTask`] can hold; level 0 is reserved
/// for the idle task.
pub const MAX_LEVEL: u32 = 3;

/// A task with a mutable priority level and a tick allotment.
pub struct SimpleTask {
    id: u32,
    priority: Cell<u32>,
    ticks: Cell<u32>,
}

impl SimpleTask {
    pub fn new(id: u32, priority: u32) -> Self {
        Self {
            id,
            priority: Cell::new(priority),
            ticks: Cell::new(0),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.ticks.get()
    }
}

impl Schedulable for SimpleTask {}

impl Prioritized for SimpleTask {
    type Priority = u32;

    fn priority(&self) -> u32 {
        self.priority.get()
    }
}

impl PriorityMutable for SimpleTask {
    fn set_priority(&self, priority: u32) {
        self.priority.set(priority);
    }
}

impl AutoPriority for SimpleTask {
    fn promote(&self) {
        if self.priority.get() < MAX_LEVEL {
            self.priority.set(self.priority.get() + 1);
        }
    }

    fn demote(&self) {
        if self.priority.get() > 1 {
            self.priority.set(self.priority.get() - 1);
        }
    }
}

impl Quantized for SimpleTask {
    type Tick = u32;

    fn tick(&self) {
        self.ticks.set(self.ticks.get() - 1);
    }

    fn used_up(&self) -> bool {
        self.ticks.get() == 0
    }

    fn allocate_ticks(&self, ticks: u32) {
        self.ticks.set(ticks);
    }
}

/// The quantum table of the multilevel feedback suites: level 1 runs to
/// completion, level 2 gets two ticks, level 3 gets one.
pub struct LevelQuanta;

impl QuantumSpecifier<SimpleTask> for LevelQuanta {
    fn ticks_for(&self, priority: u32) -> u32 {
        match priority {
            1 => u32::MAX,
            2 => 2,
            3 => 1,
            0 => panic!("the idle task never consumes quanta"),
            _ => panic!("unsupported priority level {}", priority),
        }
    }
}

/// A real-time task ranked by absolute deadline.
pub struct DeadlineTask {
    id: u32,
    deadline: Deadline,
}

impl DeadlineTask {
    pub fn new(id: u32, deadline: u64) -> Self {
        Self { id, deadline: Deadline(deadline) }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Schedulable for DeadlineTask {}

impl Prioritized for DeadlineTask {
    type Priority = Deadline;

    fn priority(&self) -> Deadline {
        self.deadline
    }
}

/// A periodic real-time task ranked by release period.
pub struct PeriodicTask {
    id: u32,
    period: Period,
}

impl PeriodicTask {
    pub fn new(id: u32, period: u64) -> Self {
        Self { id, period: Period(period) }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Schedulable for PeriodicTask {}

impl Prioritized for PeriodicTask {
    type Priority = Period;

    fn priority(&self) -> Period {
        self.period
    }
}
