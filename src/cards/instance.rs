//! Card instances - one physical card in a game.
//!
//! A `Card` pairs a `CardType` with an id unique within the game. Two cards
//! of the same type are only told apart by their id, so equality and
//! hashing cover both fields.

use serde::{Deserialize, Serialize};

use super::kind::{CardType, Category};

/// Unique id of a card instance within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A concrete card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    card_type: CardType,
    id: CardId,
}

impl Card {
    #[must_use]
    pub const fn new(card_type: CardType, id: CardId) -> Self {
        Self { card_type, id }
    }

    #[must_use]
    pub const fn card_type(&self) -> CardType {
        self.card_type
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.card_type.category()
    }

    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.card_type.cost()
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.card_type.value()
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.card_type.description()
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        self.card_type.is_action()
    }

    #[must_use]
    pub fn is_money(&self) -> bool {
        self.card_type.is_money()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}(id: {})]", self.description(), self.id)
    }
}

/// Hands out sequential card ids.
#[derive(Clone, Debug, Default)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new card of the given type.
    pub fn mint(&mut self, card_type: CardType) -> Card {
        let id = CardId(self.next);
        self.next += 1;
        Card::new(card_type, id)
    }

    /// Number of cards minted so far.
    #[must_use]
    pub fn minted(&self) -> u32 {
        self.next
    }
}
