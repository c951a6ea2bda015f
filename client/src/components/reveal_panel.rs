//! Terminal logo panel with the call to action.

use leptos::prelude::*;

use crate::components::diamond_icon::DiamondIcon;

/// Brand reveal shown once the scene deck has played.
///
/// The "NOTIFY ME" button has no handler; sign-up is not wired to anything.
#[component]
pub fn RevealPanel() -> impl IntoView {
    view! {
        <section class="reveal">
            <div class="reveal__icon">
                <DiamondIcon class="diamond-icon--sway"/>
            </div>
            <div class="reveal__copy">
                <h2 class="reveal__brand">"LUXE"</h2>
                <p class="reveal__tagline">"JEWELRY"</p>
                <div class="gold-rule gold-rule--long"></div>
                <p class="reveal__collection">"New Collection"</p>
                <p class="reveal__season">"Spring 2025"</p>
                <button class="reveal__cta" type="button">
                    "NOTIFY ME"
                </button>
            </div>
        </section>
    }
}
