//! The turn state machine: ACTION, MONEY, BUY, then CLEANUP.

use super::Engine;
use crate::cards::Card;
use crate::core::decision::Decision;
use crate::core::error::EngineError;
use crate::core::phase::TurnPhase;
use crate::core::player::PlayerId;
use crate::events::Event;
use crate::rules::options::{Prompt, TurnCounters};

impl Engine {
    /// Play one full turn for the active player and pass to the next seat.
    ///
    /// Returns early, without cleanup, if the game ends mid-turn.
    pub(super) fn take_turn(&mut self) -> Result<(), EngineError> {
        self.turn_number += 1;
        self.counters = TurnCounters::start_of_turn();
        let seat = self.active;

        tracing::info!(turn = self.turn_number, player = %self.names[seat], "turn started");
        let description = format!("Turn {}: {}", self.turn_number, self.names[seat]);
        self.emit(seat, TurnPhase::Action, Event::game(description));

        self.action_phase(seat)?;
        if self.game_over {
            return Ok(());
        }
        self.money_phase(seat)?;
        self.buy_phase(seat)?;
        if self.game_over {
            return Ok(());
        }
        self.cleanup(seat);
        self.active = seat.next();
        Ok(())
    }

    fn action_phase(&mut self, seat: PlayerId) -> Result<(), EngineError> {
        while let Some(decision) = self.prompt(seat, Prompt::Action)? {
            match decision {
                Decision::PlayCard { card } => {
                    self.counters.actions -= 1;
                    self.play_from_hand(seat, card, TurnPhase::Action);
                    self.resolve_card(seat, card.card_type())?;
                    if self.game_over {
                        return Ok(());
                    }
                }
                Decision::EndPhase { phase } => {
                    self.end_phase(seat, phase);
                    break;
                }
                other => unreachable!("{other:?} offered in the action phase"),
            }
        }
        Ok(())
    }

    fn money_phase(&mut self, seat: PlayerId) -> Result<(), EngineError> {
        while let Some(decision) = self.prompt(seat, Prompt::Money)? {
            match decision {
                Decision::PlayCard { card } => {
                    self.counters.money += u32::try_from(card.value()).unwrap_or(0);
                    self.play_from_hand(seat, card, TurnPhase::Money);
                }
                Decision::EndPhase { phase } => {
                    self.end_phase(seat, phase);
                    break;
                }
                other => unreachable!("{other:?} offered in the money phase"),
            }
        }
        Ok(())
    }

    fn buy_phase(&mut self, seat: PlayerId) -> Result<(), EngineError> {
        while self.counters.buys > 0 {
            let Some(decision) = self.prompt(seat, Prompt::Buy)? else {
                break;
            };
            match decision {
                Decision::Buy { card_type } => {
                    self.counters.buys -= 1;
                    self.counters.money -= card_type.cost();
                    self.gain_from_supply(seat, card_type, TurnPhase::Buy);
                    if self.game_over {
                        return Ok(());
                    }
                }
                Decision::EndPhase { phase } => {
                    self.end_phase(seat, phase);
                    break;
                }
                other => unreachable!("{other:?} offered in the buy phase"),
            }
        }
        Ok(())
    }

    /// Discard the whole hand, draw a new one and report the end of turn.
    fn cleanup(&mut self, seat: PlayerId) {
        self.decks[seat].cleanup();
        self.decks[seat].draw(self.config.hand_size, &mut self.rng);
        let event = Event::end_turn(self.names[seat].clone());
        self.emit(seat, TurnPhase::Cleanup, event);
    }

    /// Move a card from unplayed to played and report it.
    pub(super) fn play_from_hand(&mut self, seat: PlayerId, card: Card, phase: TurnPhase) {
        assert!(self.decks[seat].play(card), "{card} is not in {}'s hand", self.names[seat]);
        let event = Event::play_card(card, self.names[seat].clone());
        self.emit(seat, phase, event);
    }

    /// Report that `seat` chose to leave `phase`.
    pub(super) fn end_phase(&mut self, seat: PlayerId, phase: TurnPhase) {
        let event = Event::game(format!("{} ended {phase} phase", self.names[seat]));
        self.emit(seat, phase, event);
    }
}
