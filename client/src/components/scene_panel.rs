//! Panel for one promotional scene.
//!
//! The page mounts a fresh `ScenePanel` per scene, so the CSS entry
//! animations (title tracking-in, staggered copy, drawn divider) replay on
//! every advance.

use leptos::prelude::*;
use luxe_sequencer::Scene;

use crate::components::diamond_icon::DiamondIcon;

#[component]
pub fn ScenePanel(scene: Scene) -> impl IntoView {
    view! {
        <section class="scene" data-scene-id=scene.id.to_string()>
            <div class="scene__icon">
                <DiamondIcon class="diamond-icon--spin-in"/>
            </div>
            <h1 class="scene__title">{scene.title.to_string()}</h1>
            <p class="scene__subtitle">{scene.subtitle.to_string()}</p>
            <p class="scene__description">{scene.description.to_string()}</p>
            <div class="gold-rule gold-rule--short"></div>
        </section>
    }
}
