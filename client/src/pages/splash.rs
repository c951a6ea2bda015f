//! Splash page: scene deck playback followed by the brand reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the only mutable state on the site, an `RwSignal` holding
//! the `SequencerState`. In the browser it starts the sequencer on mount and
//! disposes it on unmount, so no timer can write to the signal after the page
//! is gone. Remounting starts over from the first scene.

use leptos::prelude::*;
use luxe_sequencer::{SceneDeck, SequencerState};

use crate::components::backdrop::{AmbientLight, Backdrop};
use crate::components::reveal_panel::RevealPanel;
use crate::components::scene_panel::ScenePanel;
use crate::components::sparkle_field::SparkleField;
use crate::state::splash::{backdrop_css, scene_key};

#[component]
pub fn SplashPage() -> impl IntoView {
    let deck = StoredValue::new(SceneDeck::spring_2025());
    let scene_count = deck.with_value(SceneDeck::len);
    let sequence = RwSignal::new(SequencerState::new(scene_count));

    #[cfg(feature = "hydrate")]
    {
        let timing = luxe_sequencer::SequenceTiming::default();
        let guard = crate::util::timers::start_sequence(scene_count, timing, sequence);
        on_cleanup(move || guard.dispose());
    }

    let backdrop = Memo::new(move |_| deck.with_value(|deck| backdrop_css(sequence.get(), deck)));
    // Panels only re-mount when the key changes, so entry animations replay
    // once per scene.
    let active_key = Memo::new(move |_| deck.with_value(|deck| scene_key(sequence.get(), deck)));

    view! {
        <main class="splash">
            <Backdrop background=backdrop/>
            <SparkleField/>
            <div class="splash__content">
                {move || {
                    let scene = active_key
                        .get()
                        .and_then(|id| deck.with_value(|deck| deck.iter().find(|s| s.id == id).cloned()));
                    match scene {
                        Some(scene) => view! { <ScenePanel scene/> }.into_any(),
                        None => view! { <RevealPanel/> }.into_any(),
                    }
                }}
            </div>
            <AmbientLight/>
        </main>
    }
}
