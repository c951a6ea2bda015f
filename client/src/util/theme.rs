//! Brand color tokens and the web-font stylesheet.
//!
//! Components read these instead of hard-coding hex values so the inline SVG
//! and the stylesheet stay on one palette.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const GOLD: &str = "#D4AF37";
pub const CREAM: &str = "#F5F5DC";
pub const BRONZE: &str = "#B8941E";
pub const BACKDROP: &str = luxe_sequencer::scene::BASE_BACKDROP;

pub const FONT_STYLESHEET_URL: &str = "https://fonts.googleapis.com/css2?family=Montserrat:wght@300;400;600&family=Playfair+Display:wght@700&display=swap";

/// Inline `style` for an SVG gradient stop.
#[must_use]
pub fn stop_style(color: &str) -> String {
    format!("stop-color: {color}; stop-opacity: 1")
}

/// Inline `style` for a full-bleed background layer.
#[must_use]
pub fn background_style(css_background: &str) -> String {
    format!("background: {css_background};")
}
