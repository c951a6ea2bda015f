use super::*;

use std::cell::Cell;

fn counter() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
    let count = Rc::new(Cell::new(0));
    let tick = {
        let count = Rc::clone(&count);
        Box::new(move || count.set(count.get() + 1)) as Box<dyn FnMut()>
    };
    (count, tick)
}

// =============================================================
// Clock
// =============================================================

#[test]
fn new_scheduler_starts_at_zero_with_nothing_pending() {
    let scheduler = ManualScheduler::new();
    assert_eq!(scheduler.now_ms(), 0);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.fired(), 0);
}

#[test]
fn advance_moves_clock_even_without_timers() {
    let scheduler = ManualScheduler::new();
    scheduler.advance_by(250);
    scheduler.advance_by(250);
    assert_eq!(scheduler.now_ms(), 500);
    scheduler.advance_to(100);
    assert_eq!(scheduler.now_ms(), 500);
}

// =============================================================
// Repeating timers
// =============================================================

#[test]
fn every_fires_once_per_period() {
    let scheduler = ManualScheduler::new();
    let (count, tick) = counter();
    let _handle = scheduler.every(100, tick);

    scheduler.advance_to(99);
    assert_eq!(count.get(), 0);
    scheduler.advance_to(100);
    assert_eq!(count.get(), 1);
    scheduler.advance_to(450);
    assert_eq!(count.get(), 4);
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn dropping_interval_handle_cancels_it() {
    let scheduler = ManualScheduler::new();
    let (count, tick) = counter();
    let handle = scheduler.every(100, tick);
    scheduler.advance_to(100);
    drop(handle);
    scheduler.advance_to(1000);
    assert_eq!(count.get(), 1);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn interval_can_cancel_itself_from_its_own_tick() {
    let scheduler = ManualScheduler::new();
    let slot: Rc<RefCell<Option<ManualTimer>>> = Rc::new(RefCell::new(None));
    let count = Rc::new(Cell::new(0));
    let handle = {
        let slot = Rc::clone(&slot);
        let count = Rc::clone(&count);
        scheduler.every(
            10,
            Box::new(move || {
                count.set(count.get() + 1);
                if count.get() == 2 {
                    slot.borrow_mut().take();
                }
            }),
        )
    };
    *slot.borrow_mut() = Some(handle);

    scheduler.advance_to(100);
    assert_eq!(count.get(), 2);
    assert_eq!(scheduler.pending(), 0);
    assert!(scheduler.queue.borrow().cancelled.is_empty());
}

// =============================================================
// One-shot timers
// =============================================================

#[test]
fn after_fires_exactly_once() {
    let scheduler = ManualScheduler::new();
    let fired = Rc::new(Cell::new(0));
    let _handle = {
        let fired = Rc::clone(&fired);
        scheduler.after(500, Box::new(move || fired.set(fired.get() + 1)))
    };
    scheduler.advance_to(499);
    assert_eq!(fired.get(), 0);
    scheduler.advance_to(10_000);
    assert_eq!(fired.get(), 1);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn dropping_one_shot_before_due_cancels_it() {
    let scheduler = ManualScheduler::new();
    let fired = Rc::new(Cell::new(false));
    let handle = {
        let fired = Rc::clone(&fired);
        scheduler.after(500, Box::new(move || fired.set(true)))
    };
    drop(handle);
    scheduler.advance_to(1000);
    assert!(!fired.get());
}

#[test]
fn dropping_fired_one_shot_leaves_no_cancellation_record() {
    let scheduler = ManualScheduler::new();
    for _ in 0..100 {
        let handle = scheduler.after(10, Box::new(|| {}));
        scheduler.advance_by(20);
        drop(handle);
    }
    assert_eq!(scheduler.fired(), 100);
    assert!(scheduler.queue.borrow().cancelled.is_empty());
}

#[test]
fn one_shot_can_drop_its_own_handle_while_firing() {
    let scheduler = ManualScheduler::new();
    let slot: Rc<RefCell<Option<ManualTimer>>> = Rc::new(RefCell::new(None));
    let handle = {
        let slot = Rc::clone(&slot);
        scheduler.after(10, Box::new(move || drop(slot.borrow_mut().take())))
    };
    *slot.borrow_mut() = Some(handle);

    scheduler.advance_to(100);
    assert!(slot.borrow().is_none());
    assert_eq!(scheduler.pending(), 0);
    assert!(scheduler.queue.borrow().cancelled.is_empty());
}

#[test]
fn callbacks_can_schedule_follow_up_timers() {
    let scheduler = ManualScheduler::new();
    let fired_at = Rc::new(Cell::new(None));
    let follow_up: Rc<RefCell<Option<ManualTimer>>> = Rc::new(RefCell::new(None));
    let _handle = {
        let inner = scheduler.clone();
        let fired_at = Rc::clone(&fired_at);
        let follow_up = Rc::clone(&follow_up);
        scheduler.after(
            100,
            Box::new(move || {
                let clock = inner.clone();
                let timer = inner.after(50, Box::new(move || fired_at.set(Some(clock.now_ms()))));
                *follow_up.borrow_mut() = Some(timer);
            }),
        )
    };
    scheduler.advance_to(1000);
    assert_eq!(fired_at.get(), Some(150));
}

#[test]
fn timers_due_together_fire_in_scheduling_order() {
    let scheduler = ManualScheduler::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut handles = Vec::new();
    for label in ["a", "b", "c"] {
        let order = Rc::clone(&order);
        handles.push(scheduler.after(100, Box::new(move || order.borrow_mut().push(label))));
    }
    scheduler.advance_to(100);
    assert_eq!(*order.borrow(), ["a", "b", "c"]);
}

#[test]
fn clock_reads_due_time_inside_callback() {
    let scheduler = ManualScheduler::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _handle = {
        let clock = scheduler.clone();
        let seen = Rc::clone(&seen);
        scheduler.every(300, Box::new(move || seen.borrow_mut().push(clock.now_ms())))
    };
    scheduler.advance_to(1000);
    assert_eq!(*seen.borrow(), [300, 600, 900]);
    assert_eq!(scheduler.now_ms(), 1000);
}
