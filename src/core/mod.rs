//! Core types: seats, RNG, phases, decisions, snapshots, configuration
//! and errors.
//!
//! Everything here is plain data shared by the engine, the players and
//! the observers.

pub mod config;
pub mod decision;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use config::EngineConfig;
pub use decision::{Decision, DecisionSet};
pub use error::{ConfigError, EngineError, ViolationReason};
pub use phase::TurnPhase;
pub use player::{PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::GameRng;
pub use state::GameState;
