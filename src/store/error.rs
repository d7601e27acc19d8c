//! Store errors.
//!
//! Transitions never fail; only construction and snapshot restore do.

use thiserror::Error;

use crate::core::ids::DeckId;

/// Errors from building or restoring a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `min_stage_count` was 0.
    #[error("minimum stage count must be at least 1")]
    ZeroMinimumStages,

    /// `initial_stage_count` below `min_stage_count`.
    #[error("initial stage count {initial} is below the minimum of {minimum}")]
    TooFewInitialStages { initial: usize, minimum: usize },

    /// Two seed decks share an id.
    #[error("duplicate deck id in configuration: {0}")]
    DuplicateDeck(DeckId),

    /// Snapshot written by an incompatible version.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedSnapshot { found: u16, expected: u16 },

    /// Snapshot bytes could not be encoded or decoded.
    #[error("snapshot codec failed: {0}")]
    Codec(#[from] bincode::Error),
}
