//! Effect targeting.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Who an effect applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// The player who played the card.
    Actor,
    /// Every player except the actor.
    Others,
}

impl Target {
    /// Seats affected when `actor` plays the card, in turn order.
    ///
    /// `exempt` seats (those who revealed a reaction) are skipped.
    pub fn seats(self, actor: PlayerId, exempt: &[PlayerId]) -> Vec<PlayerId> {
        match self {
            Target::Actor => vec![actor],
            Target::Others => actor.others().filter(|p| !exempt.contains(p)).collect(),
        }
    }
}
