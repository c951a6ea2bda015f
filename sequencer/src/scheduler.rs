//! Timer seam between the sequencer and its host runtime.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the client implements `Scheduler` over `gloo-timers`.
//! Tests use `ManualScheduler`, a virtual clock that only moves when told to,
//! so a twelve-second timeline runs in microseconds and deterministically.
//!
//! Cancellation is ownership: dropping a handle cancels its timer.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

/// Single-threaded timer source.
pub trait Scheduler: 'static {
    /// Owning handle for a scheduled timer. Dropping it cancels the timer.
    type Handle: 'static;

    /// Run `tick` every `period_ms` until the handle is dropped.
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;

    /// Run `fire` once after `delay_ms` unless the handle is dropped first.
    fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

// =============================================================================
// MANUAL SCHEDULER
// =============================================================================

enum Task {
    Repeating { period_ms: u64, tick: Box<dyn FnMut()> },
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    id: u64,
    due_ms: u64,
    task: Task,
}

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
    /// Id of the timer whose callback is running; its entry is out of the queue.
    running: Option<u64>,
    /// Running ids whose handle was dropped from inside their own callback.
    cancelled: HashSet<u64>,
    fired: u64,
}

impl Queue {
    fn push(&mut self, due_ms: u64, task: Task) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry { id, due_ms, task });
        id
    }

    /// Remove the earliest entry due at or before `limit_ms`. Ties fire in
    /// scheduling order.
    fn pop_due(&mut self, limit_ms: u64) -> Option<Entry> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_ms <= limit_ms)
            .min_by_key(|(_, entry)| (entry.due_ms, entry.id))
            .map(|(pos, _)| pos)?;
        Some(self.entries.remove(pos))
    }
}

/// Virtual-time scheduler for deterministic tests.
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

/// Handle returned by `ManualScheduler`. Dropping it cancels the timer.
pub struct ManualTimer {
    id: u64,
    queue: Weak<RefCell<Queue>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        let Some(queue) = self.queue.upgrade() else {
            return;
        };
        let mut queue = queue.borrow_mut();
        let before = queue.entries.len();
        queue.entries.retain(|entry| entry.id != self.id);
        if queue.entries.len() == before && queue.running == Some(self.id) {
            queue.cancelled.insert(self.id);
        }
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    /// Number of timers still scheduled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Total callbacks run so far.
    #[must_use]
    pub fn fired(&self) -> u64 {
        self.queue.borrow().fired
    }

    pub fn advance_by(&self, delta_ms: u64) {
        let target = self.now_ms().saturating_add(delta_ms);
        self.advance_to(target);
    }

    /// Move the clock to `target_ms`, running every timer that comes due on
    /// the way in time order. Moving backwards is a no-op.
    pub fn advance_to(&self, target_ms: u64) {
        loop {
            let entry = {
                let mut queue = self.queue.borrow_mut();
                let Some(entry) = queue.pop_due(target_ms) else {
                    break;
                };
                queue.now_ms = queue.now_ms.max(entry.due_ms);
                queue.fired += 1;
                queue.running = Some(entry.id);
                entry
            };
            // Callbacks may schedule or cancel timers, so the queue is not
            // borrowed while they run.
            match entry.task {
                Task::Once(fire) => {
                    fire();
                    let mut queue = self.queue.borrow_mut();
                    queue.running = None;
                    queue.cancelled.remove(&entry.id);
                }
                Task::Repeating { period_ms, mut tick } => {
                    tick();
                    let mut queue = self.queue.borrow_mut();
                    queue.running = None;
                    if !queue.cancelled.remove(&entry.id) {
                        queue.entries.push(Entry {
                            id: entry.id,
                            due_ms: entry.due_ms + period_ms,
                            task: Task::Repeating { period_ms, tick },
                        });
                    }
                }
            }
        }
        let mut queue = self.queue.borrow_mut();
        queue.now_ms = queue.now_ms.max(target_ms);
    }

    fn schedule(&self, delay_ms: u64, task: Task) -> ManualTimer {
        let mut queue = self.queue.borrow_mut();
        let due_ms = queue.now_ms + delay_ms;
        let id = queue.push(due_ms, task);
        ManualTimer { id, queue: Rc::downgrade(&self.queue) }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimer;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualTimer {
        // Same floor as browsers: a zero period still advances the clock.
        let period_ms = u64::from(period_ms.max(1));
        self.schedule(period_ms, Task::Repeating { period_ms, tick })
    }

    fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> ManualTimer {
        self.schedule(u64::from(delay_ms), Task::Once(fire))
    }
}
