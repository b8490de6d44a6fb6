//! Asking a player for a decision.

use std::panic::{self, AssertUnwindSafe};

use super::Engine;
use crate::core::decision::Decision;
use crate::core::error::{EngineError, ViolationReason};
use crate::core::player::PlayerId;
use crate::players::DecideError;
use crate::rules::options::{legal_decisions, Prompt};

impl Engine {
    /// Put `prompt` to `seat` and return the validated reply.
    ///
    /// Returns `None` without calling the player when the game is already
    /// over or no legal decision exists. Any reply outside the offered set,
    /// a decide error or a panic becomes a `PlayerViolation`; nothing from
    /// such a reply is applied.
    pub(super) fn prompt(
        &mut self,
        seat: PlayerId,
        prompt: Prompt,
    ) -> Result<Option<Decision>, EngineError> {
        if self.game_over {
            return Ok(None);
        }

        let counters = self.counters_for(seat);
        let options = legal_decisions(prompt, &self.decks[seat], &self.supply, &counters);
        if options.is_empty() {
            return Ok(None);
        }

        let state = self.snapshot(seat, prompt.phase());
        tracing::debug!(
            player = %self.names[seat],
            phase = %prompt.phase(),
            options = options.len(),
            "prompting"
        );
        self.last_snapshot = Some(state.clone());

        let player = &mut self.players[seat];
        let reply = panic::catch_unwind(AssertUnwindSafe(|| player.decide(&state, &options)));

        let decision = match reply {
            Ok(Ok(decision)) => decision,
            Ok(Err(DecideError::NoDecision)) => {
                return Err(self.violation(seat, ViolationReason::NoDecision))
            }
            Ok(Err(DecideError::Failed(message))) => {
                return Err(self.violation(seat, ViolationReason::Failed(message)))
            }
            Err(_) => return Err(self.violation(seat, ViolationReason::Panicked)),
        };

        self.last_decision = Some(decision);
        if !options.contains(&decision) {
            let reason = ViolationReason::NotOffered(decision.description());
            return Err(self.violation(seat, reason));
        }

        tracing::debug!(player = %self.names[seat], %decision, "decision accepted");
        Ok(Some(decision))
    }

    fn violation(&self, seat: PlayerId, reason: ViolationReason) -> EngineError {
        tracing::warn!(player = %self.names[seat], %seat, %reason, "protocol violation");
        EngineError::PlayerViolation {
            player: seat,
            name: self.names[seat].clone(),
            reason,
        }
    }
}
