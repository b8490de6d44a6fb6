//! Turn snapshots.
//!
//! A `GameState` is built fresh for every prompt and every notification.
//! It is an immutable value: all fields are supplied at construction, and
//! later engine mutations never show through it.
//!
//! Snapshots only ever describe one player's view. For prompts outside
//! that player's own turn (reactions, forced discards) the turn counters
//! are 0, since they belong to the active player.

use serde::{Deserialize, Serialize};

use super::phase::TurnPhase;
use crate::zones::{Hand, Supply};

/// What a player can see when asked for a decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    player_name: String,
    hand: Hand,
    spendable_money: u32,
    available_buys: u32,
    available_actions: u32,
    phase: TurnPhase,
    supply: Supply,
}

impl GameState {
    #[must_use]
    pub fn new(
        player_name: impl Into<String>,
        hand: Hand,
        spendable_money: u32,
        available_buys: u32,
        available_actions: u32,
        phase: TurnPhase,
        supply: Supply,
    ) -> Self {
        Self {
            player_name: player_name.into(),
            hand,
            spendable_money,
            available_buys,
            available_actions,
            phase,
            supply,
        }
    }

    /// Name of the player this snapshot was built for.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn spendable_money(&self) -> u32 {
        self.spendable_money
    }

    #[must_use]
    pub fn available_buys(&self) -> u32 {
        self.available_buys
    }

    #[must_use]
    pub fn available_actions(&self) -> u32 {
        self.available_actions
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Supply counts at the time the snapshot was taken.
    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }
}
