//! Supply piles shared by both players.
//!
//! `Supply` maps each configured card type to the number of copies left.
//! Counts are set once at construction and afterwards only go down, one
//! card per buy or gain.
//!
//! The piles live in an `im::OrdMap`, so cloning a `Supply` for a snapshot
//! is O(1) and the clone is unaffected by later takes from the original.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardType;

/// Remaining copies per card type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    piles: OrdMap<CardType, u32>,
}

impl Supply {
    /// Create a supply from (type, count) pairs.
    ///
    /// Panics if a card type appears twice.
    pub fn new(piles: impl IntoIterator<Item = (CardType, u32)>) -> Self {
        let mut map = OrdMap::new();
        for (card_type, count) in piles {
            if map.insert(card_type, count).is_some() {
                panic!("Supply pile for {card_type:?} configured twice");
            }
        }
        Self { piles: map }
    }

    /// Copies left of a card type. Unconfigured types have 0.
    #[must_use]
    pub fn count(&self, card_type: CardType) -> u32 {
        self.piles.get(&card_type).copied().unwrap_or(0)
    }

    /// Whether the card type has a pile in this supply (even an empty one).
    #[must_use]
    pub fn contains(&self, card_type: CardType) -> bool {
        self.piles.contains_key(&card_type)
    }

    /// Whether at least one copy is left.
    #[must_use]
    pub fn is_available(&self, card_type: CardType) -> bool {
        self.count(card_type) > 0
    }

    /// Configured card types in catalog order.
    pub fn card_types(&self) -> impl Iterator<Item = CardType> + '_ {
        self.piles.keys().copied()
    }

    /// (type, count) pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (CardType, u32)> + '_ {
        self.piles.iter().map(|(t, n)| (*t, *n))
    }

    /// Number of configured piles with no cards left.
    #[must_use]
    pub fn empty_piles(&self) -> usize {
        self.piles.values().filter(|&&n| n == 0).count()
    }

    /// Number of piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Remove one card of the given type.
    ///
    /// Panics if the pile is missing or empty: callers only take what the
    /// decision generator has already checked is available.
    pub fn take(&mut self, card_type: CardType) {
        match self.piles.get_mut(&card_type) {
            Some(count) if *count > 0 => *count -= 1,
            Some(_) => panic!("Supply pile for {card_type:?} is empty"),
            None => panic!("No supply pile for {card_type:?}"),
        }
    }
}
