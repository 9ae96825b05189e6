//! Quantum used up flavors
//!
//! Invoked by the quantum-accounting timer flavors in
//! [`crate::handlers::timer`] once the running task's remaining ticks
//! reach zero. Every flavor re-queues the penalized task and dispatches
//! the best ready one.

use crate::queue::ReadyQueue;
use crate::task::{AutoPriority, Prioritized, Quantized, QuantumSpecifier};

/// Demotes the exhausted task one level before it re-enters the queue.
///
/// Pair with a quantum-allocating enqueue hook
/// ([`crate::queue::QuantumAllocator`]) so the task re-enters with the
/// allotment of its new, lower level; that is the multilevel feedback
/// shape.
pub fn demote_and_run_next<'a, T, S>(scheduler: &mut S, current: &'a T) -> &'a T
where
    T: AutoPriority + ?Sized,
    S: ReadyQueue<'a, T>,
{
    current.demote();

    log::debug!("quantum: current task exhausted its allotment and was demoted");

    scheduler.ready(current);

    scheduler
        .next()
        .expect("ready queue cannot be empty after enqueueing the demoted task")
}

/// Recharges the exhausted task at its current level and re-queues it.
pub fn recharge_and_run_next<'a, T, S, Q>(
    scheduler: &mut S,
    specifier: &Q,
    current: &'a T,
) -> &'a T
where
    T: Prioritized + Quantized + ?Sized,
    S: ReadyQueue<'a, T>,
    Q: QuantumSpecifier<T>,
{
    current.allocate_ticks(specifier.ticks_for(current.priority()));

    scheduler.ready(current);

    scheduler
        .next()
        .expect("ready queue cannot be empty after enqueueing the recharged task")
}

/// Demotes first, then recharges with the allotment of the new level.
pub fn demote_recharge_and_run_next<'a, T, S, Q>(
    scheduler: &mut S,
    specifier: &Q,
    current: &'a T,
) -> &'a T
where
    T: AutoPriority + Quantized + ?Sized,
    S: ReadyQueue<'a, T>,
    Q: QuantumSpecifier<T>,
{
    current.demote();

    current.allocate_ticks(specifier.ticks_for(current.priority()));

    scheduler.ready(current);

    scheduler
        .next()
        .expect("ready queue cannot be empty after enqueueing the demoted task")
}
