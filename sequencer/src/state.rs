//! Sequencer state machine.
//!
//! `SequencerState` is the only mutable data in the splash page. It changes
//! through exactly two transitions: `advance` (one scene forward) and
//! `reveal` (terminal). Both take the deck length rather than the deck so the
//! state stays `Copy` and can live inside a reactive signal.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Current position in the scene sequence.
///
/// `current_index` never decreases and never exceeds `scene_count - 1`.
/// `revealed` flips to `true` once and stays there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequencerState {
    current_index: usize,
    revealed: bool,
}

/// Outcome of `SequencerState::advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Moved to the scene at this index.
    Advanced(usize),
    /// Already on the last scene; the caller should schedule the reveal.
    AtEnd,
    /// Terminal state reached earlier; nothing changes.
    Finished,
}

impl SequencerState {
    /// Initial state for a deck of `scene_count` scenes.
    ///
    /// An empty deck has nothing to show and starts revealed.
    #[must_use]
    pub fn new(scene_count: usize) -> Self {
        Self { current_index: 0, revealed: scene_count == 0 }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the sequence has reached its last scene.
    #[must_use]
    pub fn on_last_scene(&self, scene_count: usize) -> bool {
        self.current_index + 1 >= scene_count
    }

    /// Move to the next scene if there is one.
    pub fn advance(&mut self, scene_count: usize) -> Step {
        if self.revealed {
            return Step::Finished;
        }
        if self.on_last_scene(scene_count) {
            return Step::AtEnd;
        }
        self.current_index += 1;
        Step::Advanced(self.current_index)
    }

    /// Enter the terminal reveal state.
    ///
    /// Refused (returns `false`) until the last scene is showing. Returns
    /// `true` only on the call that actually flips the flag.
    pub fn reveal(&mut self, scene_count: usize) -> bool {
        if self.revealed || !self.on_last_scene(scene_count) {
            return false;
        }
        self.revealed = true;
        true
    }
}
