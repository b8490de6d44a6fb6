//! Decisions: the choices a player returns to the engine.
//!
//! A `Decision` is a closed set of variants. The engine only ever hands a
//! player a `DecisionSet` built by the generator in `rules::options`, and
//! only ever applies a decision that is a member of that set.

use serde::{Deserialize, Serialize};

use super::phase::TurnPhase;
use crate::cards::{Card, CardType};

/// A single choice offered to (and returned by) a player.
///
/// Serialized with a `"type"` discriminant, e.g.
/// `{"type":"buy","card_type":"FRAMEWORK"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Decision {
    /// Buy one card of this type from the supply.
    Buy { card_type: CardType },
    /// Play (or reveal, during a reaction) this card from hand.
    PlayCard { card: Card },
    /// Discard this card from hand.
    Discard { card: Card },
    /// Gain one card of this type from the supply.
    Gain { card_type: CardType },
    /// Trash this card from hand.
    Trash { card: Card },
    /// Finish the given phase.
    EndPhase { phase: TurnPhase },
}

impl Decision {
    #[must_use]
    pub const fn buy(card_type: CardType) -> Self {
        Self::Buy { card_type }
    }

    #[must_use]
    pub const fn play(card: Card) -> Self {
        Self::PlayCard { card }
    }

    #[must_use]
    pub const fn discard(card: Card) -> Self {
        Self::Discard { card }
    }

    #[must_use]
    pub const fn gain(card_type: CardType) -> Self {
        Self::Gain { card_type }
    }

    #[must_use]
    pub const fn trash(card: Card) -> Self {
        Self::Trash { card }
    }

    #[must_use]
    pub const fn end_phase(phase: TurnPhase) -> Self {
        Self::EndPhase { phase }
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Decision::Buy { card_type } => format!("Buy card: {card_type}"),
            Decision::PlayCard { card } => format!("Play card: {card}"),
            Decision::Discard { card } => format!("Discard card: {card}"),
            Decision::Gain { card_type } => format!("Gain card: {card_type}"),
            Decision::Trash { card } => format!("Trash card: {card}"),
            Decision::EndPhase { phase } => format!("End phase: {phase}"),
        }
    }

    #[must_use]
    pub const fn is_end_phase(&self) -> bool {
        matches!(self, Decision::EndPhase { .. })
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

/// An ordered, duplicate-free set of decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionSet {
    options: Vec<Decision>,
}

impl DecisionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decision, ignoring duplicates.
    pub fn push(&mut self, decision: Decision) {
        if !self.options.contains(&decision) {
            self.options.push(decision);
        }
    }

    #[must_use]
    pub fn contains(&self, decision: &Decision) -> bool {
        self.options.contains(decision)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether the set offers a way to end the phase.
    #[must_use]
    pub fn has_end_phase(&self) -> bool {
        self.options.iter().any(Decision::is_end_phase)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decision> {
        self.options.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Decision] {
        &self.options
    }
}

impl FromIterator<Decision> for DecisionSet {
    fn from_iter<I: IntoIterator<Item = Decision>>(iter: I) -> Self {
        let mut set = DecisionSet::new();
        for decision in iter {
            set.push(decision);
        }
        set
    }
}

impl<'a> IntoIterator for &'a DecisionSet {
    type Item = &'a Decision;
    type IntoIter = std::slice::Iter<'a, Decision>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
