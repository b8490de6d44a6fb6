//! # atg-engine
//!
//! A referee for *Automation: The Game*, a two-player deck-building card
//! game.
//!
//! ## Design Principles
//!
//! 1. **Legal moves only**: every prompt carries the exact set of legal
//!    decisions, and any reply outside it ends the game with a violation.
//!
//! 2. **Snapshots, not shared state**: players and observers only ever see
//!    immutable `GameState` values. The supply view is an `im` map, so
//!    taking one is O(1).
//!
//! 3. **Deterministic**: every shuffle draws from one seeded RNG. The same
//!    seed and the same decisions replay the same game.
//!
//! ## Modules
//!
//! - `cards`: Card catalog and card instances
//! - `core`: Seats, RNG, phases, decisions, snapshots, configuration, errors
//! - `zones`: Supply piles and player decks
//! - `rules`: Legal decision generation, scoring, termination
//! - `effects`: Primitive card effects and each card's effect sequence
//! - `engine`: The turn state machine and effect resolver
//! - `events`: Game events and observers
//! - `players`: Player capability, reference players, registry
//! - `wire`: JSON encoding of decisions, events and snapshots

pub mod cards;
pub mod core;
pub mod effects;
pub mod engine;
pub mod events;
pub mod players;
pub mod rules;
pub mod wire;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, CardType, Category};

pub use crate::core::{
    ConfigError, Decision, DecisionSet, EngineConfig, EngineError, GameRng, GameState, PlayerId,
    PlayerMap, TurnPhase, ViolationReason,
};

pub use crate::engine::Engine;

pub use crate::events::{Event, GameObserver, LoggingObserver, NullObserver, RecordingObserver};

pub use crate::players::{BigMoneyPlayer, DecideError, Player, PlayerRegistry, RandomPlayer};

pub use crate::rules::{GameResult, Prompt, ScorePair, TurnCounters};

pub use crate::zones::{Hand, PlayerDeck, Supply};
