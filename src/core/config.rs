//! Engine configuration.
//!
//! Pile sizes and the starting deck are fixed constants. What a run may
//! vary is the RNG seed, which ten action cards form the kingdom, the
//! hand size and an optional turn limit:
//!
//! ```
//! use atg_engine::core::EngineConfig;
//!
//! let config = EngineConfig::new().with_seed(7).with_turn_limit(200);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::CardType;
use crate::zones::Supply;

pub const BITCOIN_PILE: u32 = 60;
pub const ETHEREUM_PILE: u32 = 40;
pub const DOGECOIN_PILE: u32 = 30;
pub const METHOD_PILE: u32 = 14;
pub const MODULE_PILE: u32 = 8;
pub const FRAMEWORK_PILE: u32 = 8;
pub const ACTION_PILE: u32 = 10;
pub const BUG_PILE: u32 = 10;

/// Number of action types in a kingdom.
pub const KINGDOM_SIZE: usize = 10;

/// Cards every player starts with. They are not taken from the supply.
pub const STARTING_DECK: [(CardType, u32); 2] = [(CardType::Bitcoin, 7), (CardType::Method, 3)];

pub const DEFAULT_HAND_SIZE: usize = 5;

/// Settings for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for all shuffling.
    pub seed: u64,

    /// Action types with a supply pile.
    pub kingdom: Vec<CardType>,

    /// Cards drawn at game start and at every cleanup.
    pub hand_size: usize,

    /// Stop with an error after this many turns. `None` plays until the
    /// Framework pile is empty.
    pub turn_limit: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            kingdom: CardType::actions().collect(),
            hand_size: DEFAULT_HAND_SIZE,
            turn_limit: None,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_kingdom(mut self, kingdom: impl IntoIterator<Item = CardType>) -> Self {
        self.kingdom = kingdom.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = Some(limit);
        self
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if self.kingdom.len() != KINGDOM_SIZE {
            return Err(ConfigError::KingdomSize {
                expected: KINGDOM_SIZE,
                actual: self.kingdom.len(),
            });
        }
        for (i, card_type) in self.kingdom.iter().enumerate() {
            if !card_type.is_action() {
                return Err(ConfigError::NotAnAction(card_type.to_string()));
            }
            if self.kingdom[..i].contains(card_type) {
                return Err(ConfigError::DuplicateKingdomCard(card_type.to_string()));
            }
        }
        Ok(())
    }

    /// The opening supply: money, victory, kingdom and Bug piles.
    #[must_use]
    pub fn initial_supply(&self) -> Supply {
        let base = [
            (CardType::Bitcoin, BITCOIN_PILE),
            (CardType::Ethereum, ETHEREUM_PILE),
            (CardType::Dogecoin, DOGECOIN_PILE),
            (CardType::Method, METHOD_PILE),
            (CardType::Module, MODULE_PILE),
            (CardType::Framework, FRAMEWORK_PILE),
            (CardType::Bug, BUG_PILE),
        ];
        let kingdom = self.kingdom.iter().map(|&t| (t, ACTION_PILE));
        Supply::new(base.into_iter().chain(kingdom))
    }
}
