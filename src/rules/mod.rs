//! Game rules that do not need the engine's mutable state.
//!
//! - `options`: the legal decision set for any prompt
//! - `scoring`: final scores, ranking and the end-of-game check

pub mod options;
pub mod scoring;

pub use options::{legal_decisions, Prompt, TurnCounters};
pub use scoring::{is_game_over, rank, score_deck, GameResult, ScorePair};
