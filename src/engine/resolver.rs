//! Card effect resolution.
//!
//! Applies the effect sequence of an action card. Effects that need a
//! choice (discards, trashing, gaining, reacting, picking a card to play
//! twice) re-enter the prompt loop as nested sub-phases. Resolution stops
//! as soon as the game is over.

use super::Engine;
use crate::cards::CardType;
use crate::core::decision::Decision;
use crate::core::error::EngineError;
use crate::core::phase::TurnPhase;
use crate::core::player::PlayerId;
use crate::effects::{effects_for, CardEffect};
use crate::events::Event;
use crate::rules::options::Prompt;

impl Engine {
    /// Resolve the effects of an action card played by `actor`.
    ///
    /// Attack cards first let every other player holding a reaction card
    /// reveal it; those players are unaffected by the card's effects on
    /// others.
    pub(super) fn resolve_card(&mut self, actor: PlayerId, card_type: CardType) -> Result<(), EngineError> {
        let exempt = if card_type.is_attack() {
            self.collect_reactions(actor)?
        } else {
            Vec::new()
        };

        for targeted in effects_for(card_type) {
            for seat in targeted.target.seats(actor, &exempt) {
                if self.game_over {
                    return Ok(());
                }
                self.apply_effect(seat, targeted.effect)?;
            }
        }
        Ok(())
    }

    /// Offer a REACTION prompt to every other seat holding a reaction card.
    /// Returns the seats that revealed one.
    fn collect_reactions(&mut self, actor: PlayerId) -> Result<Vec<PlayerId>, EngineError> {
        let mut exempt = Vec::new();
        for seat in actor.others() {
            if !self.decks[seat].holds(|c| c.card_type().is_reaction()) {
                continue;
            }
            match self.prompt(seat, Prompt::Reaction)? {
                Some(Decision::PlayCard { card }) => {
                    tracing::debug!(player = %self.names[seat], %card, "reaction revealed");
                    let event = Event::play_card(card, self.names[seat].clone());
                    self.emit(seat, TurnPhase::Reaction, event);
                    exempt.push(seat);
                }
                Some(Decision::EndPhase { phase }) => self.end_phase(seat, phase),
                Some(other) => unreachable!("{other:?} offered as a reaction"),
                None => {}
            }
        }
        Ok(exempt)
    }

    fn apply_effect(&mut self, seat: PlayerId, effect: CardEffect) -> Result<(), EngineError> {
        match effect {
            CardEffect::DrawCards(count) => {
                self.decks[seat].draw(count as usize, &mut self.rng);
            }
            CardEffect::AddActions(n) => self.counters.actions += n,
            CardEffect::AddBuys(n) => self.counters.buys += n,
            CardEffect::AddMoney(n) => self.counters.money += n,
            CardEffect::DiscardAndRedraw => {
                let discarded = self.discard_loop(seat, None)?;
                self.decks[seat].draw(discarded, &mut self.rng);
            }
            CardEffect::DiscardDownTo(size) => {
                let excess = self.decks[seat].unplayed().len().saturating_sub(size);
                self.discard_loop(seat, Some(excess))?;
            }
            CardEffect::DiscardPerEmptyPile => {
                let count = self.supply.empty_piles();
                self.discard_loop(seat, Some(count))?;
            }
            CardEffect::GainCard(card_type) => {
                if self.supply.is_available(card_type) {
                    self.gain_from_supply(seat, card_type, TurnPhase::Action);
                }
            }
            CardEffect::TrashAndGain { extra_cost } => self.trash_and_gain(seat, extra_cost)?,
            CardEffect::PlayActionTwice => self.play_twice(seat)?,
        }
        Ok(())
    }

    /// Prompt `seat` to discard.
    ///
    /// With `Some(n)` the discard is mandatory and repeats `n` times or
    /// until the hand is empty. With `None` it is optional and repeats
    /// until the player ends the phase. Returns the number discarded.
    fn discard_loop(&mut self, seat: PlayerId, required: Option<usize>) -> Result<usize, EngineError> {
        let prompt = Prompt::Discard {
            mandatory: required.is_some(),
        };
        let mut discarded = 0;

        while required.map_or(true, |n| discarded < n) {
            match self.prompt(seat, prompt)? {
                Some(Decision::Discard { card }) => {
                    assert!(
                        self.decks[seat].discard_from_hand(card),
                        "{card} is not in {}'s hand",
                        self.names[seat]
                    );
                    let event = Event::discard_card(card.card_type(), self.names[seat].clone());
                    self.emit(seat, TurnPhase::Discard, event);
                    discarded += 1;
                }
                Some(Decision::EndPhase { phase }) => {
                    self.end_phase(seat, phase);
                    break;
                }
                Some(other) => unreachable!("{other:?} offered as a discard"),
                None => break,
            }
        }
        Ok(discarded)
    }

    /// Trash a card from hand, then gain a card costing up to
    /// `extra_cost` more.
    fn trash_and_gain(&mut self, seat: PlayerId, extra_cost: u32) -> Result<(), EngineError> {
        let trashed = match self.prompt(seat, Prompt::Trash)? {
            Some(Decision::Trash { card }) => card,
            Some(other) => unreachable!("{other:?} offered as a trash"),
            None => return Ok(()),
        };

        assert!(
            self.decks[seat].trash_from_hand(trashed),
            "{trashed} is not in {}'s hand",
            self.names[seat]
        );
        let event = Event::trash_card(trashed.card_type(), self.names[seat].clone());
        self.emit(seat, TurnPhase::Trash, event);

        let max_cost = trashed.cost() + extra_cost;
        match self.prompt(seat, Prompt::Gain { max_cost })? {
            Some(Decision::Gain { card_type }) => {
                self.gain_from_supply(seat, card_type, TurnPhase::Gain);
            }
            Some(other) => unreachable!("{other:?} offered as a gain"),
            None => {}
        }
        Ok(())
    }

    /// Let `seat` pick an action card from hand and resolve it twice.
    ///
    /// The chosen card moves to played once and costs no action.
    fn play_twice(&mut self, seat: PlayerId) -> Result<(), EngineError> {
        let card = match self.prompt(seat, Prompt::PlayTwice)? {
            Some(Decision::PlayCard { card }) => card,
            Some(Decision::EndPhase { .. }) => {
                // The action phase carries on, so this is not a phase end.
                let description = format!("{} declined to play an action twice", self.names[seat]);
                self.emit(seat, TurnPhase::Action, Event::game(description));
                return Ok(());
            }
            Some(other) => unreachable!("{other:?} offered to play twice"),
            None => return Ok(()),
        };

        self.play_from_hand(seat, card, TurnPhase::Action);
        for _ in 0..2 {
            if self.game_over {
                break;
            }
            self.resolve_card(seat, card.card_type())?;
        }
        Ok(())
    }
}
