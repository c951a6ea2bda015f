//! # luxe-client
//!
//! Leptos + WASM frontend for the LUXE splash page.
//!
//! This crate maps the `(scene, revealed)` pair emitted by `luxe-sequencer`
//! onto visuals: the scene panel while the deck plays, then the logo panel
//! with its call to action. It renders on the server for the first frame and
//! hydrates in the browser, where `gloo-timers` drives the sequence.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
