//! A fixed-priority money strategy, used as a baseline opponent.

use super::{DecideError, Player};
use crate::cards::{Card, CardType, Category};
use crate::core::decision::{Decision, DecisionSet};
use crate::core::phase::TurnPhase;
use crate::core::state::GameState;

/// Buy order, best first. Anything else is passed over.
const BUY_PRIORITY: [CardType; 3] = [CardType::Framework, CardType::Dogecoin, CardType::Ethereum];

/// Plays every money card and buys the best affordable money or Framework.
///
/// Never plays action cards of its own. Reveals reactions when attacked,
/// discards its least useful cards when forced to, and gains the most
/// expensive card offered.
#[derive(Clone, Debug)]
pub struct BigMoneyPlayer {
    name: String,
}

impl BigMoneyPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lower is more willing to part with.
fn keep_rank(card: &Card) -> (u8, u32) {
    let category = match card.category() {
        Category::Victory => 0,
        Category::Action => 1,
        Category::Money => 2,
    };
    (category, card.cost())
}

fn first_card_decision(options: &DecisionSet) -> Option<Decision> {
    options
        .iter()
        .find(|d| matches!(d, Decision::PlayCard { .. }))
        .copied()
}

fn cheapest(options: &DecisionSet) -> Option<Decision> {
    options
        .iter()
        .filter_map(|d| match d {
            Decision::Discard { card } | Decision::Trash { card } => Some((keep_rank(card), *d)),
            _ => None,
        })
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, d)| d)
}

fn choose_buy(options: &DecisionSet) -> Option<Decision> {
    BUY_PRIORITY
        .iter()
        .map(|t| Decision::buy(*t))
        .find(|d| options.contains(d))
}

fn choose_gain(options: &DecisionSet) -> Option<Decision> {
    options
        .iter()
        .filter_map(|d| match d {
            Decision::Gain { card_type } => Some((card_type.cost(), *d)),
            _ => None,
        })
        .max_by_key(|(cost, _)| *cost)
        .map(|(_, d)| d)
}

impl Player for BigMoneyPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, state: &GameState, options: &DecisionSet) -> Result<Decision, DecideError> {
        let end = Decision::end_phase(state.phase());
        let preferred = match state.phase() {
            TurnPhase::Money | TurnPhase::Reaction => first_card_decision(options),
            TurnPhase::Buy => choose_buy(options),
            TurnPhase::Discard | TurnPhase::Trash => {
                if options.contains(&end) {
                    Some(end)
                } else {
                    cheapest(options)
                }
            }
            TurnPhase::Gain => choose_gain(options),
            TurnPhase::Action | TurnPhase::Cleanup => None,
        };

        preferred
            .or_else(|| options.contains(&end).then_some(end))
            .or_else(|| options.iter().next().copied())
            .ok_or(DecideError::NoDecision)
    }
}
