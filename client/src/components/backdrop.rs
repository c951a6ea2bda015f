//! Full-bleed background layers.

use leptos::prelude::*;

use crate::util::theme;

/// Scene gradient. Re-mounted when the gradient changes so it fades in.
#[component]
pub fn Backdrop(#[prop(into)] background: Signal<String>) -> impl IntoView {
    move || {
        let css = background.get();
        view! { <div class="splash__backdrop" style=theme::background_style(&css)></div> }
    }
}

/// Slow gold glow drifting between opposite corners.
#[component]
pub fn AmbientLight() -> impl IntoView {
    view! { <div class="ambient-light" aria-hidden="true"></div> }
}
