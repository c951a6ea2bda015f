//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The only mutable state on the page is the sequencer position; this module
//! maps it to what the presentation layer should draw.

pub mod splash;
