//! Gold diamond mark shared by the scene and reveal panels.

use leptos::prelude::*;

use crate::util::theme;

/// Faceted diamond drawn with an inline gold gradient.
#[component]
pub fn DiamondIcon(
    /// Extra class for the animation variant (`diamond-icon--sway` etc).
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=format!("diamond-icon {class}")
            width="120"
            height="120"
            viewBox="0 0 100 100"
            aria-hidden="true"
        >
            <defs>
                <linearGradient id="diamondGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" style=theme::stop_style(theme::GOLD)/>
                    <stop offset="50%" style=theme::stop_style(theme::CREAM)/>
                    <stop offset="100%" style=theme::stop_style(theme::GOLD)/>
                </linearGradient>
            </defs>
            <path
                d="M 50 10 L 80 35 L 70 80 L 30 80 L 20 35 Z"
                fill="url(#diamondGradient)"
                stroke=theme::GOLD
                stroke-width="2"
            />
            <path d="M 20 35 L 50 50 L 80 35" stroke=theme::BRONZE stroke-width="1.5" fill="none"/>
            <path d="M 30 80 L 50 50 L 70 80" stroke=theme::BRONZE stroke-width="1.5" fill="none"/>
            <path d="M 50 10 L 50 50" stroke=theme::BRONZE stroke-width="1.5"/>
        </svg>
    }
}
