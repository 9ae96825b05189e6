//! Multilevel feedback queue scheduler suite

mod common;

use common::{LevelQuanta, SimpleTask};
use sched_core::schedulers::MultilevelFeedbackQueue;
use sched_core::task::{Prioritized, Quantized};
use sched_core::{
    BlockHandler, CreationHandler, ReadyQueue, TerminationHandler, TimerHandler, UnblockHandler,
};

// Level table bounded by MAX_LEVEL = 3, so four slots including the
// reserved idle level 0.
type Scheduler<'a> = MultilevelFeedbackQueue<'a, SimpleTask, LevelQuanta, 4>;

#[test]
fn enqueueing_allocates_the_level_quantum() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2, t3) = (
        SimpleTask::new(1, 1),
        SimpleTask::new(2, 2),
        SimpleTask::new(3, 3),
    );
    let mut scheduler = Scheduler::new(&idle, LevelQuanta);

    assert!(scheduler.next().is_none());

    // Fresh tasks carry no allotment until their first enqueue.
    assert!(t1.used_up());
    scheduler.ready(&t1);
    assert_eq!(t1.remaining_ticks(), u32::MAX);

    assert!(t2.used_up());
    scheduler.ready(&t2);
    assert_eq!(t2.remaining_ticks(), 2);

    assert!(t3.used_up());
    scheduler.ready(&t3);
    assert_eq!(t3.remaining_ticks(), 1);

    // Dequeue order follows the levels; nobody loses priority by waiting.
    for expected in [3, 2, 1] {
        let task = scheduler.next().unwrap();
        assert_eq!(task.id(), expected);
        assert_eq!(task.priority(), expected);
    }

    assert!(scheduler.next().is_none());
}

#[test]
fn lifecycle_events_respect_the_levels() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2, t3) = (
        SimpleTask::new(1, 1),
        SimpleTask::new(2, 2),
        SimpleTask::new(3, 3),
    );
    let mut scheduler = Scheduler::new(&idle, LevelQuanta);

    assert_eq!(scheduler.on_task_created(&idle, &t2).id(), 2);
    assert_eq!(scheduler.on_task_created(&t2, &t1).id(), 2);
    assert_eq!(scheduler.on_task_created(&t2, &t3).id(), 3);

    assert_eq!(scheduler.on_task_blocked(&t3).unwrap().id(), 2);
    assert_eq!(t3.priority(), 3);

    assert_eq!(scheduler.on_task_blocked(&t2).unwrap().id(), 1);
    assert_eq!(t2.priority(), 2);

    assert_eq!(scheduler.on_task_blocked(&t1).unwrap().id(), 0);
    assert_eq!(t1.priority(), 1);
}

#[test]
fn exhausted_quanta_demote_step_by_step() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2, t3) = (
        SimpleTask::new(1, 1),
        SimpleTask::new(2, 2),
        SimpleTask::new(3, 3),
    );
    let mut scheduler = Scheduler::new(&idle, LevelQuanta);

    scheduler.ready(&t1);
    scheduler.ready(&t2);
    scheduler.ready(&t3);

    let mut running = scheduler.next().unwrap();
    assert_eq!(running.id(), 3);

    // T3 burns its single tick: demoted to level 2, recharged to 2 ticks
    // on re-entry, and T2 takes over.
    running = scheduler.on_timer_interrupt(running);
    assert_eq!(t3.priority(), 2);
    assert_eq!(t3.remaining_ticks(), 2);
    assert_eq!(running.id(), 2);

    // T2 has one of its two ticks left.
    running = scheduler.on_timer_interrupt(running);
    assert_eq!(running.id(), 2);
    assert_eq!(running.priority(), 2);

    // T2 exhausts: down to the run-to-completion level, T3 resumes.
    running = scheduler.on_timer_interrupt(running);
    assert_eq!(running.id(), 3);
    assert_eq!(running.priority(), 2);
    assert_eq!(t2.priority(), 1);

    running = scheduler.on_timer_interrupt(running);
    assert_eq!(running.id(), 3);

    // T3 exhausts again and joins level 1; T1 finally runs.
    running = scheduler.on_timer_interrupt(running);
    assert_eq!(running.id(), 1);
    assert_eq!(running.priority(), 1);
    assert_eq!(t3.priority(), 1);
}

#[test]
fn demotion_never_drops_below_the_lowest_level() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2) = (SimpleTask::new(1, 3), SimpleTask::new(2, 3));
    let mut scheduler = Scheduler::new(&idle, LevelQuanta);

    scheduler.ready(&t1);
    scheduler.ready(&t2);

    let mut running = scheduler.next().unwrap();

    // Both tasks ping-pong down to level 1 and stay there.
    for _ in 0..12 {
        running = scheduler.on_timer_interrupt(running);
        assert!(running.priority() >= 1);
    }

    assert_eq!(t1.priority(), 1);
    assert_eq!(t2.priority(), 1);
}

#[test]
fn ticks_consumed_between_enqueues_match_the_allotment() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2) = (SimpleTask::new(1, 2), SimpleTask::new(2, 2));
    let mut scheduler = Scheduler::new(&idle, LevelQuanta);

    scheduler.ready(&t1);
    scheduler.ready(&t2);

    let mut running = scheduler.next().unwrap();
    assert_eq!(running.id(), 1);

    let allotted = t1.remaining_ticks();
    let mut consumed = 0;

    while running.id() == 1 {
        running = scheduler.on_timer_interrupt(running);
        consumed += 1;
    }

    assert_eq!(consumed, allotted);
}

#[test]
fn staged_wakeups_and_reentrant_timer() {
    let idle = SimpleTask::new(0, 0);
    let (t1, t2, t3) = (
        SimpleTask::new(1, 1),
        SimpleTask::new(2, 2),
        SimpleTask::new(3, 3),
    );
    let mut scheduler = Scheduler::new(&idle, LevelQuanta);

    scheduler.ready(&t1);
    assert_eq!(scheduler.next().unwrap().id(), 1);

    // T2 and T3 wake up while T1 runs.
    assert!(scheduler.on_task_unblocked(None, Some(&t2)).is_none());
    assert!(scheduler.on_task_unblocked(None, Some(&t3)).is_none());

    // A timer interrupt delivered mid-batch keeps T1 running (level 1 is
    // run-to-completion, so the tick cannot exhaust it).
    assert_eq!(scheduler.on_timer_interrupt(&t1).id(), 1);

    // Terminating the batch reconsiders the dispatch.
    assert_eq!(scheduler.on_task_unblocked(Some(&t1), None).unwrap().id(), 3);

    // Cascading wake-ups may terminate through a different event.
    let (t4, t5) = (SimpleTask::new(4, 3), SimpleTask::new(5, 3));

    assert!(scheduler.on_task_unblocked(None, Some(&t4)).is_none());
    assert!(scheduler.on_task_unblocked(None, Some(&t5)).is_none());

    assert_eq!(scheduler.on_task_finished(&t3).unwrap().id(), 4);
    assert_eq!(scheduler.on_task_finished(&t4).unwrap().id(), 5);
}
