use super::*;

use luxe_sequencer::SequenceTiming;

// =============================================================
// SplashView
// =============================================================

#[test]
fn initial_state_shows_first_scene() {
    let deck = SceneDeck::spring_2025();
    let view = SplashView::resolve(SequencerState::new(deck.len()), &deck);
    let SplashView::Scene(scene) = view else {
        panic!("expected a scene, got {view:?}");
    };
    assert_eq!(scene.title, "ELEGANCE");
}

#[test]
fn each_timeline_step_maps_to_its_scene() {
    let deck = SceneDeck::spring_2025();
    let timing = SequenceTiming::default();
    let titles = [0, 4000, 8000]
        .into_iter()
        .map(|t| match SplashView::resolve(timing.state_at(deck.len(), t), &deck) {
            SplashView::Scene(scene) => scene.title.to_string(),
            SplashView::Reveal => "reveal".to_owned(),
        })
        .collect::<Vec<_>>();
    assert_eq!(titles, ["ELEGANCE", "NEW COLLECTION", "UNVEILING"]);
}

#[test]
fn revealed_state_shows_reveal_panel() {
    let deck = SceneDeck::spring_2025();
    let state = SequenceTiming::default().state_at(deck.len(), 12_500);
    assert_eq!(SplashView::resolve(state, &deck), SplashView::Reveal);
}

#[test]
fn empty_deck_shows_reveal_panel() {
    let deck = SceneDeck::default();
    assert_eq!(SplashView::resolve(SequencerState::new(0), &deck), SplashView::Reveal);
}

// =============================================================
// Backdrop and keys
// =============================================================

#[test]
fn backdrop_follows_current_scene() {
    let deck = SceneDeck::spring_2025();
    let state = SequenceTiming::default().state_at(deck.len(), 4000);
    assert_eq!(
        backdrop_css(state, &deck),
        "radial-gradient(circle at 70% 50%, #1a1a2e 0%, #0a0a0a 100%)"
    );
}

#[test]
fn backdrop_keeps_last_scene_after_reveal() {
    let deck = SceneDeck::spring_2025();
    let state = SequenceTiming::default().state_at(deck.len(), 60_000);
    assert!(backdrop_css(state, &deck).starts_with("radial-gradient(circle at 50% 50%, #1e1a1a"));
}

#[test]
fn backdrop_for_empty_deck_is_plain() {
    assert_eq!(backdrop_css(SequencerState::new(0), &SceneDeck::default()), "#0a0a0a");
}

#[test]
fn scene_key_tracks_scene_id_until_reveal() {
    let deck = SceneDeck::spring_2025();
    let timing = SequenceTiming::default();
    assert_eq!(scene_key(timing.state_at(3, 0), &deck), Some(1));
    assert_eq!(scene_key(timing.state_at(3, 8000), &deck), Some(3));
    assert_eq!(scene_key(timing.state_at(3, 12_500), &deck), None);
}
