//! Twinkling sparkle overlay.
//!
//! TRADE-OFFS
//! ==========
//! Sparkle positions are random, so the server renders an empty field and the
//! browser fills it after hydration. Rendering them on the server would
//! produce markup the client cannot reproduce.

use leptos::prelude::*;
use luxe_sequencer::sparkle::SparkleSpec;

#[component]
pub fn SparkleField() -> impl IntoView {
    let sparkles = RwSignal::new(Vec::<SparkleSpec>::new());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let seed = js_sys::Date::now().to_bits();
        sparkles.set(luxe_sequencer::sparkle::sparkle_field(luxe_sequencer::sparkle::SPARKLE_COUNT, seed));
    });

    view! {
        <div class="sparkle-field" aria-hidden="true">
            <For
                each=move || sparkles.get().into_iter().enumerate()
                key=|(i, _)| *i
                children=move |(_, spec)| view! { <div class="sparkle" style=spec.style()></div> }
            />
        </div>
    }
}
