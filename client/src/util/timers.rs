//! Browser timer binding for the scene sequencer.
//!
//! `BrowserScheduler` implements the sequencer's `Scheduler` over
//! `gloo_timers::callback`. Dropping a handle drops the underlying
//! `Interval`/`Timeout`, which clears the browser timer.
//!
//! TRADE-OFFS
//! ==========
//! Timers only exist in the browser. On the server the page renders the
//! initial frame and `SequenceGuard` is never created.

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};
#[cfg(feature = "hydrate")]
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use luxe_sequencer::{Scheduler, SequenceTiming, Sequencer, SequencerState};

/// `Scheduler` backed by `setInterval`/`setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Owning handle for a browser timer.
#[cfg(feature = "hydrate")]
pub struct BrowserTimer {
    _interval: Option<Interval>,
    _timeout: Option<Timeout>,
}

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer { _interval: Some(Interval::new(period_ms, move || tick())), _timeout: None }
    }

    fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer { _interval: None, _timeout: Some(Timeout::new(delay_ms, fire)) }
    }
}

/// Owner-side slot for a running sequence.
///
/// The sequencer is `!Send`, so it lives in a local `StoredValue`; the guard
/// itself is `Copy` and can be moved into `on_cleanup`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
pub struct SequenceGuard {
    slot: StoredValue<Option<Sequencer<BrowserScheduler>>, LocalStorage>,
}

#[cfg(feature = "hydrate")]
impl SequenceGuard {
    /// Cancel every pending timer of the sequence.
    pub fn dispose(self) {
        let running = self.slot.try_update_value(Option::take).flatten();
        if let Some(sequencer) = running {
            log::debug!("splash sequence disposed");
            sequencer.dispose();
        }
    }
}

/// Start the sequence on browser timers, writing each transition to `state`.
///
/// `state` must already hold `SequencerState::new(scene_count)`; only
/// transitions are written.
#[cfg(feature = "hydrate")]
pub fn start_sequence(
    scene_count: usize,
    timing: SequenceTiming,
    state: RwSignal<SequencerState>,
) -> SequenceGuard {
    let sequencer = Sequencer::start(scene_count, timing, BrowserScheduler, move |next| {
        let _ = state.try_set(next);
    });
    log::debug!("splash sequence started with {scene_count} scenes");
    SequenceGuard { slot: StoredValue::new_local(Some(sequencer)) }
}
