//! Sequence cadence and the timeline it produces.
//!
//! The timeline is fully determined by the deck length and two durations:
//! scene `k` becomes active at `k * D`; the repeating timer fires once more at
//! `N * D`, finds the deck exhausted, and schedules the reveal `R` later.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

use crate::error::TimingError;
use crate::state::SequencerState;

pub const DEFAULT_SCENE_DURATION_MS: u32 = 4000;
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 500;

/// Per-scene display duration and post-sequence reveal delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceTiming {
    scene_duration_ms: u32,
    reveal_delay_ms: u32,
}

impl Default for SequenceTiming {
    fn default() -> Self {
        Self { scene_duration_ms: DEFAULT_SCENE_DURATION_MS, reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS }
    }
}

impl SequenceTiming {
    /// # Errors
    ///
    /// Returns `TimingError::ZeroSceneDuration` when `scene_duration_ms` is 0;
    /// a zero-period repeating timer would spin.
    pub fn new(scene_duration_ms: u32, reveal_delay_ms: u32) -> Result<Self, TimingError> {
        if scene_duration_ms == 0 {
            return Err(TimingError::ZeroSceneDuration);
        }
        Ok(Self { scene_duration_ms, reveal_delay_ms })
    }

    #[must_use]
    pub fn scene_duration_ms(&self) -> u32 {
        self.scene_duration_ms
    }

    #[must_use]
    pub fn reveal_delay_ms(&self) -> u32 {
        self.reveal_delay_ms
    }

    /// Instant at which `revealed` becomes true.
    #[must_use]
    pub fn reveal_at_ms(&self, scene_count: usize) -> u64 {
        if scene_count == 0 {
            return 0;
        }
        scene_count as u64 * u64::from(self.scene_duration_ms) + u64::from(self.reveal_delay_ms)
    }

    /// Project the sequencer state `elapsed_ms` after start.
    #[must_use]
    pub fn state_at(&self, scene_count: usize, elapsed_ms: u64) -> SequencerState {
        let mut state = SequencerState::new(scene_count);
        if scene_count == 0 {
            return state;
        }
        let ticks = elapsed_ms / u64::from(self.scene_duration_ms);
        let target = usize::try_from(ticks).unwrap_or(usize::MAX).min(scene_count - 1);
        while state.current_index() < target {
            state.advance(scene_count);
        }
        if elapsed_ms >= self.reveal_at_ms(scene_count) {
            state.reveal(scene_count);
        }
        state
    }
}
