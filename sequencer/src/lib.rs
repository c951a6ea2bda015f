//! # luxe-sequencer
//!
//! Scene sequencing for the LUXE splash page.
//!
//! This crate is UI-framework agnostic so the Leptos client can consume it
//! directly and so the timeline can be tested without a browser. It owns the
//! scene data model, the timing rules, the state machine that walks the deck,
//! and the timer-driven driver that advances it.
//!
//! ARCHITECTURE
//! ============
//! - `scene`: scene records, backgrounds, and the built-in deck.
//! - `timing`: per-scene cadence and the pure timeline projection.
//! - `state`: `SequencerState` and its two transitions.
//! - `scheduler`: the timer seam (`Scheduler`) plus `ManualScheduler`.
//! - `driver`: `Sequencer`, which binds state to a scheduler and owns the
//!   cancellation of every timer it created.
//! - `sparkle`: randomized decorative particle layout.

pub mod driver;
pub mod error;
pub mod scene;
pub mod scheduler;
pub mod sparkle;
pub mod state;
pub mod timing;

pub use driver::Sequencer;
pub use error::{DeckError, TimingError};
pub use scene::{Background, Scene, SceneDeck};
pub use scheduler::{ManualScheduler, ManualTimer, Scheduler};
pub use state::{SequencerState, Step};
pub use timing::SequenceTiming;
