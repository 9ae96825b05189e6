//! Composable scheduling core for cooperative and preemptive kernels
//!
//! This crate answers one question, *which task runs next?*, and leaves
//! everything else (task control blocks, context switching, timer
//! hardware, wait queues) to the integrator. A scheduler is assembled from
//! orthogonal parts:
//!
//! - **Task capabilities** ([`task`]): traits a task type implements to
//!   advertise what the scheduler may do with it.
//! - **Ready-queue policies** ([`queue`]): the ordering discipline behind
//!   the two primitives `ready` and `next`, optionally decorated with
//!   enqueue/dequeue hooks.
//! - **Event handlers** ([`handlers`]): one flavor per scheduling event,
//!   spanning cooperative vs preemptive semantics with or without an idle
//!   task.
//! - **Assemblies** ([`schedulers`]): ready-made FIFO, round-robin,
//!   prioritized round-robin, multilevel feedback, earliest-deadline-first
//!   and rate-monotonic schedulers, each a policy plus a handler per
//!   event.
//!
//! The core is a pure decision engine: handlers never block, never
//! allocate on the dispatch path, and run one at a time under mutual
//! exclusion the integrator provides (typically by masking interrupts
//! around the call). Tasks are held as shared references; the scheduler
//! never owns or frees them, and a task must outlive its stay in the
//! ready queue.
//!
//! Precondition violations (enqueueing a task twice, killing the running
//! task, consulting a quantum specifier for the idle task) are programmer
//! errors and panic; there is no error channel at this layer.
//!
//! Scheduling events are logged through the [`log`] facade at `trace!`
//! (queue transitions) and `debug!` (dispatch decisions); the integrator
//! installs whatever sink fits the target.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod events;
pub mod handlers;
pub mod idle;
pub mod queue;
pub mod realtime;
pub mod schedulers;
pub mod task;

pub use events::{
    BlockHandler, CreationHandler, KillHandler, PriorityChangeHandler, QuantumUsedUpHandler,
    SelfPriorityChangeHandler, TerminationHandler, TimerHandler, UnblockHandler, YieldHandler,
};
pub use idle::{HasIdleTask, IdleTaskSupport};
pub use queue::{AdjustPositions, ReadyQueue, RemoveTasks};
pub use task::{
    AutoPriority, Level, Prioritized, PriorityMutable, Quantized, QuantumSpecifier, Schedulable,
};
