//! Uniformly random player.

use super::{DecideError, Player};
use crate::core::decision::{Decision, DecisionSet};
use crate::core::rng::GameRng;
use crate::core::state::GameState;

/// Picks uniformly from the offered decisions.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    name: String,
    rng: GameRng,
}

impl RandomPlayer {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        let name = name.into();
        let rng = GameRng::new(seed).for_context(&name);
        Self { name, rng }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, _state: &GameState, options: &DecisionSet) -> Result<Decision, DecideError> {
        self.rng
            .choose(options.as_slice())
            .copied()
            .ok_or(DecideError::NoDecision)
    }
}
