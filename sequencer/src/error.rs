//! Error types for deck loading and timing configuration.
//!
//! The sequencer itself has no failure modes; only configuration can be
//! rejected.

/// Errors produced while building a `SceneDeck` from external data.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("invalid scene deck JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate scene id {0}")]
    DuplicateSceneId(u32),
}

/// Errors produced while validating `SequenceTiming`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimingError {
    #[error("scene duration must be greater than zero")]
    ZeroSceneDuration,
}
