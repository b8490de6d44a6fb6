//! Turn phases.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// A phase of a turn, or a nested sub-phase entered by a card effect.
///
/// The main sequence is ACTION -> MONEY -> BUY -> CLEANUP. REACTION,
/// DISCARD, GAIN and TRASH are entered from card effects and return to
/// the phase that was active before them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase")]
pub enum TurnPhase {
    Action,
    Reaction,
    Money,
    Buy,
    Discard,
    Gain,
    Trash,
    Cleanup,
}
