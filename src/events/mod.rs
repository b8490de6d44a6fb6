//! Game events and the observers that receive them.
//!
//! The engine reports every applied decision, and every major transition
//! (game start, turn start, end of turn, game over), as an [`Event`] to a
//! primary [`GameObserver`] and to any per-seat observers.

pub mod event;
pub mod observer;

pub use event::Event;
pub use observer::{GameObserver, LoggingObserver, NullObserver, Recording, RecordingObserver};
