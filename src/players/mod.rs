//! Player capability and reference players.
//!
//! The engine only talks to players through [`Player`]: it hands over a
//! snapshot and the exact set of legal decisions, and expects one member
//! of that set back.
//!
//! - [`RandomPlayer`]: uniform choice from the offered set
//! - [`BigMoneyPlayer`]: plays all money, buys the best victory or money card
//! - [`PlayerRegistry`]: name to factory map for harnesses

mod big_money;
mod random;
mod registry;

use thiserror::Error;

use crate::core::decision::{Decision, DecisionSet};
use crate::core::state::GameState;

pub use big_money::BigMoneyPlayer;
pub use random::RandomPlayer;
pub use registry::{PlayerFactory, PlayerRegistry};

/// A player could not produce a decision.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecideError {
    #[error("no decision")]
    NoDecision,

    #[error("{0}")]
    Failed(String),
}

/// A participant in a game.
pub trait Player {
    /// Display name, used in snapshots, events and errors.
    fn name(&self) -> &str;

    /// Pick one decision from `options`.
    ///
    /// Returning a decision outside `options`, returning an error or
    /// panicking ends the game with a protocol violation.
    fn decide(&mut self, state: &GameState, options: &DecisionSet) -> Result<Decision, DecideError>;
}
