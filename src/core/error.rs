//! Error types surfaced by the engine.
//!
//! Player misbehaviour and bad configuration are reported as values.
//! Broken engine invariants (taking from an empty pile, moving a card that
//! is not in hand) panic instead.

use thiserror::Error;

use super::player::PlayerId;

/// Invalid engine configuration, detected before the first turn.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("kingdom must contain exactly {expected} action cards, got {actual}")]
    KingdomSize { expected: usize, actual: usize },

    #[error("kingdom lists {0} more than once")]
    DuplicateKingdomCard(String),

    #[error("kingdom card {0} is not an action card")]
    NotAnAction(String),

    #[error("hand size must be at least 1")]
    ZeroHandSize,

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a player's reply was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ViolationReason {
    #[error("chose a decision that was not offered: {0}")]
    NotOffered(String),

    #[error("returned no decision")]
    NoDecision,

    #[error("failed to decide: {0}")]
    Failed(String),

    #[error("panicked while deciding")]
    Panicked,
}

/// Errors that stop a run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{player} ({name}) violated the protocol: {reason}")]
    PlayerViolation {
        player: PlayerId,
        name: String,
        reason: ViolationReason,
    },

    #[error("turn limit of {limit} exceeded")]
    TurnLimitExceeded { limit: u32 },

    /// `play` was called again after an earlier call stopped the run.
    #[error("game already halted: {cause}")]
    Halted { cause: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// The offending seat, for protocol violations.
    #[must_use]
    pub fn violator(&self) -> Option<PlayerId> {
        match self {
            EngineError::PlayerViolation { player, .. } => Some(*player),
            _ => None,
        }
    }
}
