//! Observer capability and the observers shipped with the crate.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::Event;
use crate::core::state::GameState;

/// Receives a snapshot and an event for everything that happens in a game.
///
/// The snapshot passed alongside an event is built for the player the
/// event concerns, or for the observer's own seat when the observer was
/// installed for one.
pub trait GameObserver {
    fn notify(&mut self, state: &GameState, event: &Event);
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn notify(&mut self, _state: &GameState, _event: &Event) {}
}

/// Forwards events to `tracing` at info level.
#[derive(Clone, Debug, Default)]
pub struct LoggingObserver {
    label: Option<String>,
}

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix each line with a label, e.g. the seat this feed belongs to.
    #[must_use]
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

impl GameObserver for LoggingObserver {
    fn notify(&mut self, state: &GameState, event: &Event) {
        match &self.label {
            Some(label) => tracing::info!(
                feed = %label,
                phase = %state.phase(),
                viewer = state.player_name(),
                "{}",
                event
            ),
            None => tracing::info!(
                phase = %state.phase(),
                viewer = state.player_name(),
                "{}",
                event
            ),
        }
    }
}

/// Shared log of every `(snapshot, event)` pair an observer received.
pub type Recording = Rc<RefCell<Vec<(GameState, Event)>>>;

/// Records every notification.
///
/// The engine takes ownership of its observers, so the recording is kept
/// behind a shared handle that the caller can read after the game.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    log: Recording,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the recorded notifications.
    #[must_use]
    pub fn handle(&self) -> Recording {
        Rc::clone(&self.log)
    }

    /// Just the recorded events, in order.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().iter().map(|(_, e)| e.clone()).collect()
    }
}

impl GameObserver for RecordingObserver {
    fn notify(&mut self, state: &GameState, event: &Event) {
        self.log.borrow_mut().push((state.clone(), event.clone()));
    }
}
