//! Decorative sparkle layout.
//!
//! Each sparkle is randomized independently; nothing here needs to be
//! reproducible across runs, so callers seed from whatever clock they have.

#[cfg(test)]
#[path = "sparkle_test.rs"]
mod sparkle_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const SPARKLE_COUNT: usize = 30;
/// Start delay added per sparkle index, in seconds.
pub const SPARKLE_STAGGER_S: f64 = 0.1;

/// Placement and timing of one twinkling sparkle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkleSpec {
    pub x_pct: f64,
    pub y_pct: f64,
    pub size_px: f64,
    pub delay_s: f64,
    pub repeat_delay_s: f64,
}

impl SparkleSpec {
    /// Inline CSS for an absolutely positioned sparkle.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; animation-delay: {:.1}s; --repeat-delay: {:.2}s;",
            self.x_pct, self.y_pct, self.size_px, self.size_px, self.delay_s, self.repeat_delay_s
        )
    }
}

/// Lay out `count` sparkles with an RNG seeded from `seed`.
#[must_use]
pub fn sparkle_field(count: usize, seed: u64) -> Vec<SparkleSpec> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|i| SparkleSpec {
            x_pct: rng.random_range(0.0..100.0),
            y_pct: rng.random_range(0.0..100.0),
            size_px: rng.random_range(2.0..6.0),
            delay_s: stagger(i),
            repeat_delay_s: rng.random_range(0.0..3.0),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn stagger(index: usize) -> f64 {
    index as f64 * SPARKLE_STAGGER_S
}
