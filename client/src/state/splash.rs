//! Presentation mapping for the sequencer state.
//!
//! DESIGN
//! ======
//! The sequencer emits `(index, revealed)`; components only need to know
//! which panel to draw and which backdrop to paint behind it. Keeping that
//! mapping here keeps components free of index arithmetic.

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

use luxe_sequencer::{Scene, SceneDeck, SequencerState};

use crate::util::theme;

/// What the splash page should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashView<'a> {
    /// A promotional scene is playing.
    Scene(&'a Scene),
    /// Terminal logo + call-to-action panel.
    Reveal,
}

impl<'a> SplashView<'a> {
    #[must_use]
    pub fn resolve(state: SequencerState, deck: &'a SceneDeck) -> Self {
        if state.revealed() {
            return Self::Reveal;
        }
        deck.get(state.current_index()).map_or(Self::Reveal, Self::Scene)
    }
}

/// CSS background for the current position.
///
/// The last scene's gradient stays up behind the reveal panel. An empty deck
/// falls back to the plain backdrop.
#[must_use]
pub fn backdrop_css(state: SequencerState, deck: &SceneDeck) -> String {
    deck.get(state.current_index())
        .map_or_else(|| theme::BACKDROP.to_owned(), |scene| scene.background.css())
}

/// Identifier of the scene currently on screen; `None` once the reveal panel
/// is up. The splash page re-mounts its panel whenever this changes.
#[must_use]
pub fn scene_key(state: SequencerState, deck: &SceneDeck) -> Option<u32> {
    match SplashView::resolve(state, deck) {
        SplashView::Scene(scene) => Some(scene.id),
        SplashView::Reveal => None,
    }
}
