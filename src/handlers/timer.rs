//! Timer interrupt flavors

use crate::events::QuantumUsedUpHandler;
use crate::idle::{is_idle, HasIdleTask};
use crate::queue::ReadyQueue;
use crate::task::{Quantized, Schedulable};

/// Cooperative: the tick changes nothing, `current` keeps the CPU.
pub fn keep_running_current<'a, T: ?Sized>(current: &'a T) -> &'a T {
    current
}

/// Preemptive: the current task rotates to the back of its class and the
/// next ready task runs, which gives time-sliced round-robin.
pub fn run_next<'a, T, S>(scheduler: &mut S, current: &'a T) -> &'a T
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T>,
{
    scheduler.ready(current);

    scheduler
        .next()
        .expect("ready queue cannot be empty after enqueueing the current task")
}

/// Preemptive with idle support: as [`run_next`], but the idle task is
/// never parked in the queue and covers an empty queue.
pub fn run_next_with_idle<'a, T, S>(scheduler: &mut S, current: &'a T) -> &'a T
where
    T: Schedulable + ?Sized,
    S: ReadyQueue<'a, T> + HasIdleTask<'a, T>,
{
    // Intermediate group calls may have filled the queue since the last
    // decision, so the scan must run even when current is the idle task.
    if !is_idle(scheduler, current) {
        scheduler.ready(current);
    }

    match scheduler.next() {
        Some(task) => task,
        None => scheduler.idle_task(),
    }
}

/// Quantum accounting: `current` consumes one tick and keeps the CPU until
/// its allotment runs out, at which point the scheduler's quantum-used-up
/// handler settles the dispatch.
pub fn account_quantum<'a, T, S>(scheduler: &mut S, current: &'a T) -> &'a T
where
    T: Quantized + ?Sized,
    S: QuantumUsedUpHandler<'a, T>,
{
    current.tick();

    if current.used_up() {
        return scheduler.on_quantum_used_up(current);
    }

    current
}

/// Quantum accounting with idle support: the idle task consumes no quanta;
/// a tick that finds it running only re-checks the queue.
pub fn account_quantum_with_idle<'a, T, S>(scheduler: &mut S, current: &'a T) -> &'a T
where
    T: Quantized + ?Sized,
    S: ReadyQueue<'a, T> + HasIdleTask<'a, T> + QuantumUsedUpHandler<'a, T>,
{
    if is_idle(scheduler, current) {
        return match scheduler.next() {
            Some(task) => task,
            None => scheduler.idle_task(),
        };
    }

    current.tick();

    if current.used_up() {
        return scheduler.on_quantum_used_up(current);
    }

    current
}
