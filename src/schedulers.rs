//! Reference scheduler assemblies
//!
//! Each scheduler here pairs one ready-queue policy with one handler
//! flavor per supported event. The structs carry the queue (possibly
//! decorated) and the idle-task mix-in; every event impl is a one-line
//! delegation into [`crate::handlers`], so the impl blocks double as the
//! assembly manifest.
//!
//! Custom assemblies follow the same recipe: pick a policy, pick a flavor
//! per event you support, and implement the matching traits from
//! [`crate::events`]. A flavor whose capability requirements the policy
//! cannot meet (task removal, position adjustment, an idle accessor)
//! simply will not compile into the assembly.

use crate::events::{
    BlockHandler, CreationHandler, QuantumUsedUpHandler, TerminationHandler, TimerHandler,
    UnblockHandler, YieldHandler,
};
use crate::handlers::{blocked, creation, quantum, termination, timer, unblocked, yielding};
use crate::idle::{HasIdleTask, IdleTaskSupport};
use crate::queue::{
    ArrayLevelQueue, FifoQueue, PrioritySingleQueue, QuantumAllocator, ReadyQueue, WithEnqueueHook,
};
use crate::task::{AutoPriority, Level, Prioritized, Quantized, QuantumSpecifier, Schedulable};

// MARK: - FIFO

/// First-come, first-served: cooperative everywhere, tasks run until they
/// finish, block or yield.
pub struct Fifo<'a, T: Schedulable + ?Sized> {
    queue: FifoQueue<'a, T>,
    idle: IdleTaskSupport<'a, T>,
}

impl<'a, T: Schedulable + ?Sized> Fifo<'a, T> {
    /// Creates the scheduler around the designated idle task.
    pub fn new(idle_task: &'a T) -> Self {
        Self {
            queue: FifoQueue::new(),
            idle: IdleTaskSupport::new(idle_task),
        }
    }
}

impl<'a, T: Schedulable + ?Sized> ReadyQueue<'a, T> for Fifo<'a, T> {
    fn next(&mut self) -> Option<&'a T> {
        self.queue.next()
    }

    fn ready(&mut self, task: &'a T) {
        self.queue.ready(task);
    }
}

impl<'a, T: Schedulable + ?Sized> HasIdleTask<'a, T> for Fifo<'a, T> {
    fn idle_task(&self) -> &'a T {
        self.idle.idle_task()
    }
}

impl<'a, T: Schedulable + ?Sized> CreationHandler<'a, T> for Fifo<'a, T> {
    fn on_task_created(&mut self, current: &'a T, task: &'a T) -> &'a T {
        creation::keep_running_current_with_idle(self, current, task)
    }
}

impl<'a, T: Schedulable + ?Sized> TerminationHandler<'a, T> for Fifo<'a, T> {
    fn on_task_finished(&mut self, current: &'a T) -> Option<&'a T> {
        Some(termination::run_next_with_idle(self, current))
    }
}

impl<'a, T: Schedulable + ?Sized> BlockHandler<'a, T> for Fifo<'a, T> {
    fn on_task_blocked(&mut self, current: &'a T) -> Option<&'a T> {
        Some(blocked::run_next_with_idle(self, current))
    }
}

impl<'a, T: Schedulable + ?Sized> UnblockHandler<'a, T> for Fifo<'a, T> {
    fn on_task_unblocked(&mut self, current: Option<&'a T>, task: Option<&'a T>) -> Option<&'a T> {
        unblocked::keep_running_current_with_idle(self, current, task)
    }
}

impl<'a, T: Schedulable + ?Sized> YieldHandler<'a, T> for Fifo<'a, T> {
    fn on_task_yielded(&mut self, current: &'a T) -> &'a T {
        yielding::run_next(self, current)
    }
}

impl<'a, T: Schedulable + ?Sized> TimerHandler<'a, T> for Fifo<'a, T> {
    fn on_timer_interrupt(&mut self, current: &'a T) -> &'a T {
        timer::keep_running_current(current)
    }
}

// MARK: - Round-Robin

/// Time-sliced FIFO: identical to [`Fifo`] except that every timer
/// interrupt rotates the running task to the back of the queue.
pub struct RoundRobin<'a, T: Schedulable + ?Sized> {
    queue: FifoQueue<'a, T>,
    idle: IdleTaskSupport<'a, T>,
}

impl<'a, T: Schedulable + ?Sized> RoundRobin<'a, T> {
    /// Creates the scheduler around the designated idle task.
    pub fn new(idle_task: &'a T) -> Self {
        Self {
            queue: FifoQueue::new(),
            idle: IdleTaskSupport::new(idle_task),
        }
    }
}

impl<'a, T: Schedulable + ?Sized> ReadyQueue<'a, T> for RoundRobin<'a, T> {
    fn next(&mut self) -> Option<&'a T> {
        self.queue.next()
    }

    fn ready(&mut self, task: &'a T) {
        self.queue.ready(task);
    }
}

impl<'a, T: Schedulable + ?Sized> HasIdleTask<'a, T> for RoundRobin<'a, T> {
    fn idle_task(&self) -> &'a T {
        self.idle.idle_task()
    }
}

impl<'a, T: Schedulable + ?Sized> CreationHandler<'a, T> for RoundRobin<'a, T> {
    fn on_task_created(&mut self, current: &'a T, task: &'a T) -> &'a T {
        creation::keep_running_current_with_idle(self, current, task)
    }
}

impl<'a, T: Schedulable + ?Sized> TerminationHandler<'a, T> for RoundRobin<'a, T> {
    fn on_task_finished(&mut self, current: &'a T) -> Option<&'a T> {
        Some(termination::run_next_with_idle(self, current))
    }
}

impl<'a, T: Schedulable + ?Sized> BlockHandler<'a, T> for RoundRobin<'a, T> {
    fn on_task_blocked(&mut self, current: &'a T) -> Option<&'a T> {
        Some(blocked::run_next_with_idle(self, current))
    }
}

impl<'a, T: Schedulable + ?Sized> UnblockHandler<'a, T> for RoundRobin<'a, T> {
    fn on_task_unblocked(&mut self, current: Option<&'a T>, task: Option<&'a T>) -> Option<&'a T> {
        unblocked::keep_running_current_with_idle(self, current, task)
    }
}

impl<'a, T: Schedulable + ?Sized> YieldHandler<'a, T> for RoundRobin<'a, T> {
    fn on_task_yielded(&mut self, current: &'a T) -> &'a T {
        yielding::run_next(self, current)
    }
}

impl<'a, T: Schedulable + ?Sized> TimerHandler<'a, T> for RoundRobin<'a, T> {
    fn on_timer_interrupt(&mut self, current: &'a T) -> &'a T {
        timer::run_next_with_idle(self, current)
    }
}

// MARK: - Prioritized Round-Robin

/// Fixed-priority preemptive scheduling, round-robin within each level.
///
/// `LEVELS` bounds the priority space: every task must report
/// `priority().level() < LEVELS`.
pub struct PrioritizedRoundRobin<'a, T, const LEVELS: usize>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
{
    queue: ArrayLevelQueue<'a, T, FifoQueue<'a, T>, LEVELS>,
    idle: IdleTaskSupport<'a, T>,
}

impl<'a, T, const LEVELS: usize> PrioritizedRoundRobin<'a, T, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
{
    /// Creates the scheduler around the designated idle task.
    pub fn new(idle_task: &'a T) -> Self {
        Self {
            queue: ArrayLevelQueue::new(),
            idle: IdleTaskSupport::new(idle_task),
        }
    }
}

impl<'a, T, const LEVELS: usize> ReadyQueue<'a, T> for PrioritizedRoundRobin<'a, T, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
{
    fn next(&mut self) -> Option<&'a T> {
        self.queue.next()
    }

    fn ready(&mut self, task: &'a T) {
        self.queue.ready(task);
    }
}

impl<'a, T, const LEVELS: usize> HasIdleTask<'a, T> for PrioritizedRoundRobin<'a, T, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
{
    fn idle_task(&self) -> &'a T {
        self.idle.idle_task()
    }
}

impl<'a, T, const LEVELS: usize> CreationHandler<'a, T> for PrioritizedRoundRobin<'a, T, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
{
    fn on_task_created(&mut self, current: &'a T, task: &'a T) -> &'a T {
        creation::run_higher_priority_with_idle(self, current, task)
    }
}

impl<'a, T, const LEVELS: usize> TerminationHandler<'a, T> for PrioritizedRoundRobin<'a, T, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
{
    fn on_task_finished(&mut self, current: &'a T) -> Option<&'a T> {
        Some(termination::run_next_with_idle(self, current))
    }
}

impl<'a, T, const LEVELS: usize> BlockHandler<'a, T> for PrioritizedRoundRobin<'a, T, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
{
    fn on_task_blocked(&mut self, current: &'a T) -> Option<&'a T> {
        Some(blocked::run_next_with_idle(self, current))
    }
}

impl<'a, T, const LEVELS: usize> UnblockHandler<'a, T> for PrioritizedRoundRobin<'a, T, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
{
    fn on_task_unblocked(&mut self, current: Option<&'a T>, task: Option<&'a T>) -> Option<&'a T> {
        unblocked::run_next_with_idle(self, current, task)
    }
}

impl<'a, T, const LEVELS: usize> YieldHandler<'a, T> for PrioritizedRoundRobin<'a, T, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
{
    fn on_task_yielded(&mut self, current: &'a T) -> &'a T {
        yielding::run_next(self, current)
    }
}

impl<'a, T, const LEVELS: usize> TimerHandler<'a, T> for PrioritizedRoundRobin<'a, T, LEVELS>
where
    T: Prioritized + ?Sized,
    T::Priority: Level,
{
    fn on_timer_interrupt(&mut self, current: &'a T) -> &'a T {
        timer::run_next_with_idle(self, current)
    }
}

// MARK: - Multilevel Feedback Queue

/// Multilevel feedback: leveled round-robin where a task that exhausts its
/// quantum drops one level, and every enqueue recharges the task with the
/// allotment of its current level.
///
/// `specifier` maps a priority level to its tick allotment; returning the
/// maximum tick value marks a run-to-completion level. The specifier is
/// never consulted for the idle task.
pub struct MultilevelFeedbackQueue<'a, T, Q, const LEVELS: usize>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    queue: WithEnqueueHook<ArrayLevelQueue<'a, T, FifoQueue<'a, T>, LEVELS>, QuantumAllocator<Q>>,
    idle: IdleTaskSupport<'a, T>,
}

impl<'a, T, Q, const LEVELS: usize> MultilevelFeedbackQueue<'a, T, Q, LEVELS>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    /// Creates the scheduler around the designated idle task and the
    /// per-level quantum specifier.
    pub fn new(idle_task: &'a T, specifier: Q) -> Self {
        Self {
            queue: WithEnqueueHook::new(ArrayLevelQueue::new(), QuantumAllocator::new(specifier)),
            idle: IdleTaskSupport::new(idle_task),
        }
    }
}

impl<'a, T, Q, const LEVELS: usize> ReadyQueue<'a, T> for MultilevelFeedbackQueue<'a, T, Q, LEVELS>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    fn next(&mut self) -> Option<&'a T> {
        self.queue.next()
    }

    fn ready(&mut self, task: &'a T) {
        self.queue.ready(task);
    }
}

impl<'a, T, Q, const LEVELS: usize> HasIdleTask<'a, T> for MultilevelFeedbackQueue<'a, T, Q, LEVELS>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    fn idle_task(&self) -> &'a T {
        self.idle.idle_task()
    }
}

impl<'a, T, Q, const LEVELS: usize> CreationHandler<'a, T>
    for MultilevelFeedbackQueue<'a, T, Q, LEVELS>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    fn on_task_created(&mut self, current: &'a T, task: &'a T) -> &'a T {
        creation::run_higher_priority_with_idle(self, current, task)
    }
}

impl<'a, T, Q, const LEVELS: usize> TerminationHandler<'a, T>
    for MultilevelFeedbackQueue<'a, T, Q, LEVELS>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    fn on_task_finished(&mut self, current: &'a T) -> Option<&'a T> {
        Some(termination::run_next_with_idle(self, current))
    }
}

impl<'a, T, Q, const LEVELS: usize> BlockHandler<'a, T>
    for MultilevelFeedbackQueue<'a, T, Q, LEVELS>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    fn on_task_blocked(&mut self, current: &'a T) -> Option<&'a T> {
        Some(blocked::run_next_with_idle(self, current))
    }
}

impl<'a, T, Q, const LEVELS: usize> UnblockHandler<'a, T>
    for MultilevelFeedbackQueue<'a, T, Q, LEVELS>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    fn on_task_unblocked(&mut self, current: Option<&'a T>, task: Option<&'a T>) -> Option<&'a T> {
        unblocked::run_next_with_idle(self, current, task)
    }
}

impl<'a, T, Q, const LEVELS: usize> YieldHandler<'a, T>
    for MultilevelFeedbackQueue<'a, T, Q, LEVELS>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    fn on_task_yielded(&mut self, current: &'a T) -> &'a T {
        yielding::run_next(self, current)
    }
}

impl<'a, T, Q, const LEVELS: usize> QuantumUsedUpHandler<'a, T>
    for MultilevelFeedbackQueue<'a, T, Q, LEVELS>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    fn on_quantum_used_up(&mut self, current: &'a T) -> &'a T {
        // Recharge rides on the enqueue hook once the demoted task
        // re-enters the queue.
        quantum::demote_and_run_next(self, current)
    }
}

impl<'a, T, Q, const LEVELS: usize> TimerHandler<'a, T>
    for MultilevelFeedbackQueue<'a, T, Q, LEVELS>
where
    T: AutoPriority + Quantized + ?Sized,
    T::Priority: Level,
    Q: QuantumSpecifier<T>,
{
    fn on_timer_interrupt(&mut self, current: &'a T) -> &'a T {
        timer::account_quantum_with_idle(self, current)
    }
}

// MARK: - Earliest Deadline First

/// Deadline-driven real-time scheduling over a stable single queue.
///
/// Task priorities encode deadlines so that an earlier deadline ranks
/// greater (see [`crate::realtime::Deadline`]); the queue's stable
/// insertion gives the first-come-first-serve tie-break between equal
/// deadlines.
pub struct EarliestDeadlineFirst<'a, T: Prioritized + ?Sized> {
    queue: PrioritySingleQueue<'a, T>,
    idle: IdleTaskSupport<'a, T>,
}

impl<'a, T: Prioritized + ?Sized> EarliestDeadlineFirst<'a, T> {
    /// Creates the scheduler around the designated idle task.
    pub fn new(idle_task: &'a T) -> Self {
        Self {
            queue: PrioritySingleQueue::new(),
            idle: IdleTaskSupport::new(idle_task),
        }
    }
}

impl<'a, T: Prioritized + ?Sized> ReadyQueue<'a, T> for EarliestDeadlineFirst<'a, T> {
    fn next(&mut self) -> Option<&'a T> {
        self.queue.next()
    }

    fn ready(&mut self, task: &'a T) {
        self.queue.ready(task);
    }
}

impl<'a, T: Prioritized + ?Sized> HasIdleTask<'a, T> for EarliestDeadlineFirst<'a, T> {
    fn idle_task(&self) -> &'a T {
        self.idle.idle_task()
    }
}

impl<'a, T: Prioritized + ?Sized> CreationHandler<'a, T> for EarliestDeadlineFirst<'a, T> {
    fn on_task_created(&mut self, current: &'a T, task: &'a T) -> &'a T {
        creation::run_higher_priority_with_idle(self, current, task)
    }
}

impl<'a, T: Prioritized + ?Sized> TerminationHandler<'a, T> for EarliestDeadlineFirst<'a, T> {
    fn on_task_finished(&mut self, current: &'a T) -> Option<&'a T> {
        Some(termination::run_next_with_idle(self, current))
    }
}

impl<'a, T: Prioritized + ?Sized> TimerHandler<'a, T> for EarliestDeadlineFirst<'a, T> {
    fn on_timer_interrupt(&mut self, current: &'a T) -> &'a T {
        timer::keep_running_current(current)
    }
}

// MARK: - Rate Monotonic

/// Static-priority real-time scheduling: the task with the shortest
/// release period always wins (see [`crate::realtime::Period`]).
///
/// Same assembly shape as [`EarliestDeadlineFirst`]; only the meaning of
/// the priority differs, which is entirely a property of the task type.
pub struct RateMonotonic<'a, T: Prioritized + ?Sized> {
    queue: PrioritySingleQueue<'a, T>,
    idle: IdleTaskSupport<'a, T>,
}

impl<'a, T: Prioritized + ?Sized> RateMonotonic<'a, T> {
    /// Creates the scheduler around the designated idle task.
    pub fn new(idle_task: &'a T) -> Self {
        Self {
            queue: PrioritySingleQueue::new(),
            idle: IdleTaskSupport::new(idle_task),
        }
    }
}

impl<'a, T: Prioritized + ?Sized> ReadyQueue<'a, T> for RateMonotonic<'a, T> {
    fn next(&mut self) -> Option<&'a T> {
        self.queue.next()
    }

    fn ready(&mut self, task: &'a T) {
        self.queue.ready(task);
    }
}

impl<'a, T: Prioritized + ?Sized> HasIdleTask<'a, T> for RateMonotonic<'a, T> {
    fn idle_task(&self) -> &'a T {
        self.idle.idle_task()
    }
}

impl<'a, T: Prioritized + ?Sized> CreationHandler<'a, T> for RateMonotonic<'a, T> {
    fn on_task_created(&mut self, current: &'a T, task: &'a T) -> &'a T {
        creation::run_higher_priority_with_idle(self, current, task)
    }
}

impl<'a, T: Prioritized + ?Sized> TerminationHandler<'a, T> for RateMonotonic<'a, T> {
    fn on_task_finished(&mut self, current: &'a T) -> Option<&'a T> {
        Some(termination::run_next_with_idle(self, current))
    }
}

impl<'a, T: Prioritized + ?Sized> TimerHandler<'a, T> for RateMonotonic<'a, T> {
    fn on_timer_interrupt(&mut self, current: &'a T) -> &'a T {
        timer::keep_running_current(current)
    }
}
