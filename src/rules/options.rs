//! Legal decision generation.
//!
//! `legal_decisions` is a pure function of the prompt, the prompted
//! player's deck, the supply and the turn counters. The engine calls it
//! for every prompt and rejects any reply outside the returned set.
//!
//! Ordering is deterministic: card decisions follow hand order, card type
//! decisions follow catalog order, and `EndPhase` (when offered) is last.

use serde::{Deserialize, Serialize};

use crate::core::decision::{Decision, DecisionSet};
use crate::core::phase::TurnPhase;
use crate::zones::{PlayerDeck, Supply};

/// The question being put to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// Play action cards or move on to money.
    Action,
    /// Play money cards or move on to buying.
    Money,
    /// Buy cards or end the turn.
    Buy,
    /// Discard a card from hand. Mandatory discards cannot be declined.
    Discard { mandatory: bool },
    /// Gain a card costing at most `max_cost`. Cannot be declined.
    Gain { max_cost: u32 },
    /// Trash a card from hand. Cannot be declined.
    Trash,
    /// Reveal a reaction card against an attack, or decline.
    Reaction,
    /// Choose an action card to play twice, or decline.
    PlayTwice,
}

impl Prompt {
    /// The phase reported in the snapshot for this prompt.
    #[must_use]
    pub const fn phase(self) -> TurnPhase {
        match self {
            Prompt::Action | Prompt::PlayTwice => TurnPhase::Action,
            Prompt::Money => TurnPhase::Money,
            Prompt::Buy => TurnPhase::Buy,
            Prompt::Discard { .. } => TurnPhase::Discard,
            Prompt::Gain { .. } => TurnPhase::Gain,
            Prompt::Trash => TurnPhase::Trash,
            Prompt::Reaction => TurnPhase::Reaction,
        }
    }

    /// Whether the prompt offers `EndPhase`.
    #[must_use]
    pub const fn is_optional(self) -> bool {
        match self {
            Prompt::Discard { mandatory } => !mandatory,
            Prompt::Gain { .. } | Prompt::Trash => false,
            Prompt::Action | Prompt::Money | Prompt::Buy | Prompt::Reaction | Prompt::PlayTwice => {
                true
            }
        }
    }
}

/// Resources of the active player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCounters {
    pub actions: u32,
    pub buys: u32,
    pub money: u32,
}

impl TurnCounters {
    /// Counters at the start of a turn: one action, one buy, no money.
    #[must_use]
    pub const fn start_of_turn() -> Self {
        Self {
            actions: 1,
            buys: 1,
            money: 0,
        }
    }

    /// Counters shown to a player prompted outside their own turn.
    #[must_use]
    pub const fn off_turn() -> Self {
        Self {
            actions: 0,
            buys: 0,
            money: 0,
        }
    }
}

impl Default for TurnCounters {
    fn default() -> Self {
        Self::start_of_turn()
    }
}

/// Every decision the prompted player may legally return.
#[must_use]
pub fn legal_decisions(
    prompt: Prompt,
    deck: &PlayerDeck,
    supply: &Supply,
    counters: &TurnCounters,
) -> DecisionSet {
    let mut set = DecisionSet::new();
    let hand = deck.unplayed();

    match prompt {
        Prompt::Action => {
            if counters.actions >= 1 {
                hand.iter()
                    .filter(|c| c.is_action())
                    .for_each(|c| set.push(Decision::play(*c)));
            }
        }
        Prompt::PlayTwice => {
            hand.iter()
                .filter(|c| c.is_action())
                .for_each(|c| set.push(Decision::play(*c)));
        }
        Prompt::Money => {
            hand.iter()
                .filter(|c| c.is_money())
                .for_each(|c| set.push(Decision::play(*c)));
        }
        Prompt::Buy => {
            if counters.buys >= 1 {
                supply
                    .iter()
                    .filter(|&(t, n)| n > 0 && t.is_buyable() && t.cost() <= counters.money)
                    .for_each(|(t, _)| set.push(Decision::buy(t)));
            }
        }
        Prompt::Discard { .. } => {
            hand.iter().for_each(|c| set.push(Decision::discard(*c)));
        }
        Prompt::Gain { max_cost } => {
            supply
                .iter()
                .filter(|&(t, n)| n > 0 && t.is_buyable() && t.cost() <= max_cost)
                .for_each(|(t, _)| set.push(Decision::gain(t)));
        }
        Prompt::Trash => {
            hand.iter().for_each(|c| set.push(Decision::trash(*c)));
        }
        Prompt::Reaction => {
            hand.iter()
                .filter(|c| c.card_type().is_reaction())
                .for_each(|c| set.push(Decision::play(*c)));
        }
    }

    if prompt.is_optional() {
        set.push(Decision::end_phase(prompt.phase()));
    }
    set
}
