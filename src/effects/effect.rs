//! Effect definitions.
//!
//! Every action card resolves as a fixed sequence of primitive effects,
//! each aimed at either the player who played the card or at every other
//! player. The sequences live in `effects_for`.

use serde::{Deserialize, Serialize};

use super::targeting::Target;
use crate::cards::CardType;

/// A primitive game effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Draw cards into the unplayed hand.
    DrawCards(u32),
    /// Add to the turn's remaining actions.
    AddActions(u32),
    /// Add to the turn's remaining buys.
    AddBuys(u32),
    /// Add to the turn's spendable money.
    AddMoney(u32),
    /// Discard any number of cards, then draw that many.
    DiscardAndRedraw,
    /// Discard until at most this many cards remain in hand.
    DiscardDownTo(usize),
    /// Gain a card of this type from the supply, without a decision.
    GainCard(CardType),
    /// Discard one card per empty supply pile.
    DiscardPerEmptyPile,
    /// Trash a card from hand, then gain one costing up to `extra_cost`
    /// more than it.
    TrashAndGain { extra_cost: u32 },
    /// Choose an action card in hand and resolve it twice.
    PlayActionTwice,
}

/// A primitive effect paired with who it applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetedEffect {
    pub effect: CardEffect,
    pub target: Target,
}

impl TargetedEffect {
    /// Effect on the player who played the card.
    #[must_use]
    pub const fn actor(effect: CardEffect) -> Self {
        Self {
            effect,
            target: Target::Actor,
        }
    }

    /// Effect on every other player.
    #[must_use]
    pub const fn others(effect: CardEffect) -> Self {
        Self {
            effect,
            target: Target::Others,
        }
    }
}

use CardEffect::*;

const BACKLOG: &[TargetedEffect] = &[
    TargetedEffect::actor(AddActions(1)),
    TargetedEffect::actor(DiscardAndRedraw),
];

const DAILY_SCRUM: &[TargetedEffect] = &[
    TargetedEffect::actor(DrawCards(4)),
    TargetedEffect::actor(AddBuys(1)),
    TargetedEffect::others(DrawCards(1)),
];

const IPO: &[TargetedEffect] = &[
    TargetedEffect::actor(DrawCards(2)),
    TargetedEffect::actor(AddActions(1)),
    TargetedEffect::actor(AddMoney(2)),
];

const HACK: &[TargetedEffect] = &[
    TargetedEffect::actor(AddMoney(2)),
    TargetedEffect::others(DiscardDownTo(3)),
];

const MONITORING: &[TargetedEffect] = &[TargetedEffect::actor(DrawCards(2))];

const TECH_DEBT: &[TargetedEffect] = &[
    TargetedEffect::actor(DrawCards(1)),
    TargetedEffect::actor(AddActions(1)),
    TargetedEffect::actor(AddMoney(1)),
    TargetedEffect::actor(DiscardPerEmptyPile),
];

const REFACTOR: &[TargetedEffect] = &[TargetedEffect::actor(TrashAndGain { extra_cost: 2 })];

const PARALLELIZATION: &[TargetedEffect] = &[TargetedEffect::actor(PlayActionTwice)];

const CODE_REVIEW: &[TargetedEffect] = &[
    TargetedEffect::actor(DrawCards(1)),
    TargetedEffect::actor(AddActions(2)),
];

const EVERGREEN_TEST: &[TargetedEffect] = &[
    TargetedEffect::actor(DrawCards(2)),
    TargetedEffect::others(GainCard(CardType::Bug)),
];

/// The effects of playing a card, in resolution order.
///
/// Money and victory cards have no effects; money is counted by the
/// engine when played.
#[must_use]
pub const fn effects_for(card_type: CardType) -> &'static [TargetedEffect] {
    match card_type {
        CardType::Backlog => BACKLOG,
        CardType::DailyScrum => DAILY_SCRUM,
        CardType::Ipo => IPO,
        CardType::Hack => HACK,
        CardType::Monitoring => MONITORING,
        CardType::TechDebt => TECH_DEBT,
        CardType::Refactor => REFACTOR,
        CardType::Parallelization => PARALLELIZATION,
        CardType::CodeReview => CODE_REVIEW,
        CardType::EvergreenTest => EVERGREEN_TEST,
        CardType::Bug
        | CardType::Method
        | CardType::Module
        | CardType::Framework
        | CardType::Bitcoin
        | CardType::Ethereum
        | CardType::Dogecoin => &[],
    }
}
