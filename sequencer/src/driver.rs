//! Timer-driven scene sequencer.
//!
//! DESIGN
//! ======
//! `Sequencer::start` schedules one repeating timer at the scene cadence.
//! Each tick advances `SequencerState`; the first tick that finds the deck
//! exhausted retires the repeating timer and schedules a one-shot reveal.
//! The returned `Sequencer` owns both handles, so disposing it (explicitly or
//! by drop) cancels everything it scheduled.
//!
//! Timer callbacks hold a `Weak` reference to the shared driver state, so the
//! handles stored inside it do not form a reference cycle. A timer's handle is
//! never dropped from inside its own callback: the exhausted interval is
//! parked in `retired` and released by the reveal callback.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::scheduler::Scheduler;
use crate::state::{SequencerState, Step};
use crate::timing::SequenceTiming;

type Listener = Box<dyn FnMut(SequencerState)>;

struct Shared<S: Scheduler> {
    scene_count: usize,
    timing: SequenceTiming,
    scheduler: S,
    state: Cell<SequencerState>,
    disposed: Cell<bool>,
    interval: RefCell<Option<S::Handle>>,
    retired: RefCell<Option<S::Handle>>,
    reveal: RefCell<Option<S::Handle>>,
    listener: RefCell<Listener>,
}

/// Running scene sequence. Dropping it cancels all pending timers.
pub struct Sequencer<S: Scheduler> {
    shared: Rc<Shared<S>>,
}

impl<S: Scheduler> Sequencer<S> {
    /// Start sequencing `scene_count` scenes on `scheduler`.
    ///
    /// `listener` is called after every transition with the new state. The
    /// initial state is available from `state()` and is not reported. An
    /// empty deck starts revealed and schedules nothing.
    pub fn start(
        scene_count: usize,
        timing: SequenceTiming,
        scheduler: S,
        listener: impl FnMut(SequencerState) + 'static,
    ) -> Self {
        let shared = Rc::new(Shared {
            scene_count,
            timing,
            scheduler,
            state: Cell::new(SequencerState::new(scene_count)),
            disposed: Cell::new(false),
            interval: RefCell::new(None),
            retired: RefCell::new(None),
            reveal: RefCell::new(None),
            listener: RefCell::new(Box::new(listener)),
        });

        if scene_count == 0 {
            tracing::debug!("empty scene deck; revealing immediately");
            return Self { shared };
        }

        let weak = Rc::downgrade(&shared);
        let interval = shared.scheduler.every(
            timing.scene_duration_ms(),
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    Shared::on_tick(&shared);
                }
            }),
        );
        *shared.interval.borrow_mut() = Some(interval);
        tracing::debug!(scene_count, scene_duration_ms = timing.scene_duration_ms(), "scene sequence started");

        Self { shared }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.shared.state.get()
    }

    /// Whether any timer is still scheduled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        if self.shared.disposed.get() {
            return false;
        }
        self.shared.interval.borrow().is_some()
            || (self.shared.reveal.borrow().is_some() && !self.shared.state.get().revealed())
    }

    /// Cancel every pending timer. No transition happens afterwards.
    pub fn dispose(self) {
        drop(self);
    }
}

impl<S: Scheduler> Drop for Sequencer<S> {
    fn drop(&mut self) {
        self.shared.cancel_all();
    }
}

impl<S: Scheduler> Shared<S> {
    fn on_tick(self: &Rc<Self>) {
        if self.disposed.get() {
            return;
        }
        let mut state = self.state.get();
        match state.advance(self.scene_count) {
            Step::Advanced(index) => {
                self.state.set(state);
                tracing::debug!(index, "scene advanced");
                self.notify(state);
            }
            Step::AtEnd => self.schedule_reveal(),
            Step::Finished => {}
        }
    }

    fn schedule_reveal(self: &Rc<Self>) {
        let Some(interval) = self.interval.borrow_mut().take() else {
            return;
        };
        *self.retired.borrow_mut() = Some(interval);

        let weak: Weak<Self> = Rc::downgrade(self);
        let reveal = self.scheduler.after(
            self.timing.reveal_delay_ms(),
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.on_reveal();
                }
            }),
        );
        *self.reveal.borrow_mut() = Some(reveal);
        tracing::debug!(reveal_delay_ms = self.timing.reveal_delay_ms(), "scene deck exhausted");
    }

    fn on_reveal(&self) {
        if self.disposed.get() {
            return;
        }
        let retired = self.retired.borrow_mut().take();
        drop(retired);

        let mut state = self.state.get();
        if state.reveal(self.scene_count) {
            self.state.set(state);
            tracing::debug!("reveal");
            self.notify(state);
        }
    }

    fn notify(&self, state: SequencerState) {
        let mut listener = self.listener.borrow_mut();
        (*listener)(state);
    }

    fn cancel_all(&self) {
        self.disposed.set(true);
        let interval = self.interval.borrow_mut().take();
        let retired = self.retired.borrow_mut().take();
        let reveal = self.reveal.borrow_mut().take();
        drop((interval, retired, reveal));
    }
}
