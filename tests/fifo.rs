//! First-come, first-served scheduler suite

mod common;

use common::SimpleTask;
use sched_core::schedulers::Fifo;
use sched_core::{
    BlockHandler, CreationHandler, ReadyQueue, TerminationHandler, TimerHandler, UnblockHandler,
    YieldHandler,
};

#[test]
fn primitives_dispatch_in_arrival_order() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2, t3) = (
        SimpleTask::new(1, 0),
        SimpleTask::new(2, 0),
        SimpleTask::new(3, 0),
    );
    let mut scheduler = Fifo::new(&idle);

    assert!(scheduler.next().is_none());

    scheduler.ready(&t1);
    scheduler.ready(&t2);
    scheduler.ready(&t3);

    assert_eq!(scheduler.next().unwrap().id(), 1);
    assert_eq!(scheduler.next().unwrap().id(), 2);
    assert_eq!(scheduler.next().unwrap().id(), 3);
    assert!(scheduler.next().is_none());
}

#[test]
fn creation_is_cooperative() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2) = (SimpleTask::new(1, 0), SimpleTask::new(2, 0));
    let mut scheduler = Fifo::new(&idle);

    // A task created over the idle task runs at once; later arrivals
    // queue up behind the running task.
    assert_eq!(scheduler.on_task_created(&idle, &t1).id(), 1);
    assert_eq!(scheduler.on_task_created(&t1, &t2).id(), 1);

    assert_eq!(scheduler.on_task_finished(&t1).unwrap().id(), 2);
}

#[test]
fn termination_falls_back_to_idle() {
    let idle = SimpleTask::new(0, 0);
    let t1 = SimpleTask::new(1, 0);
    let mut scheduler = Fifo::new(&idle);

    assert_eq!(scheduler.on_task_created(&idle, &t1).id(), 1);

    // Single-task system: creation followed by termination collapses to
    // the idle task.
    assert_eq!(scheduler.on_task_finished(&t1).unwrap().id(), 0);
}

#[test]
fn idle_task_is_never_parked() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2) = (SimpleTask::new(1, 0), SimpleTask::new(2, 5));
    let mut scheduler = Fifo::new(&idle);

    assert_eq!(scheduler.on_task_created(&idle, &t1).id(), 1);
    assert_eq!(scheduler.on_task_finished(&t1).unwrap().id(), 0);

    // The new task displaces idle directly instead of queueing behind it.
    assert_eq!(scheduler.on_task_created(&idle, &t2).id(), 2);
    assert!(scheduler.next().is_none());
}

#[test]
fn yield_rotates_through_the_queue() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2) = (SimpleTask::new(1, 0), SimpleTask::new(2, 0));
    let mut scheduler = Fifo::new(&idle);

    scheduler.ready(&t2);

    assert_eq!(scheduler.on_task_yielded(&t1).id(), 2);
    assert_eq!(scheduler.on_task_yielded(&t2).id(), 1);
}

#[test]
fn yield_with_no_peer_returns_the_yielder() {
    let idle = SimpleTask::new(0, 0);
    let t1 = SimpleTask::new(1, 0);
    let mut scheduler = Fifo::new(&idle);

    assert_eq!(scheduler.on_task_yielded(&t1).id(), 1);
}

#[test]
fn blocking_hands_over_and_unblocking_keeps_current() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2) = (SimpleTask::new(1, 0), SimpleTask::new(2, 0));
    let mut scheduler = Fifo::new(&idle);

    scheduler.ready(&t2);

    assert_eq!(scheduler.on_task_blocked(&t1).unwrap().id(), 2);

    // Cooperative unblock: the woken task queues up, current keeps going.
    assert_eq!(
        scheduler.on_task_unblocked(Some(&t2), Some(&t1)).unwrap().id(),
        2
    );
    assert_eq!(scheduler.on_task_finished(&t2).unwrap().id(), 1);
}

#[test]
fn unblocking_over_idle_dispatches_the_woken_task() {
    let idle = SimpleTask::new(0, 0);
    let t1 = SimpleTask::new(1, 0);
    let mut scheduler = Fifo::new(&idle);

    assert_eq!(
        scheduler.on_task_unblocked(Some(&idle), Some(&t1)).unwrap().id(),
        1
    );
}

#[test]
fn timer_keeps_the_current_task() {
    let idle = SimpleTask::new(0, 0);
    let t1 = SimpleTask::new(1, 0);
    let mut scheduler = Fifo::new(&idle);

    assert_eq!(scheduler.on_timer_interrupt(&t1).id(), 1);
    assert_eq!(scheduler.on_timer_interrupt(&idle).id(), 0);
}
