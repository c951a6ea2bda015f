//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the splash layers (backdrop, sparkles, the active panel,
//! ambient light). They take plain props; the splash page owns the sequencer
//! state and decides which panel is mounted.

pub mod backdrop;
pub mod diamond_icon;
pub mod reveal_panel;
pub mod scene_panel;
pub mod sparkle_field;
