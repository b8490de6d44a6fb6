//! Per-player card zones.
//!
//! Each player privately owns a draw pile, a hand and a discard pile. The
//! hand is split into cards already played this turn and cards still
//! available. Cards only enter a deck through `gain` and only leave it
//! through `trash`; every other operation moves cards between zones.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Inline capacity for hand partitions. Hands rarely exceed this.
type HandCards = SmallVec<[Card; 8]>;

/// Read-only copy of a hand, handed out in snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    played: HandCards,
    unplayed: HandCards,
}

impl Hand {
    #[must_use]
    pub fn new(played: impl IntoIterator<Item = Card>, unplayed: impl IntoIterator<Item = Card>) -> Self {
        Self {
            played: played.into_iter().collect(),
            unplayed: unplayed.into_iter().collect(),
        }
    }

    /// Cards played this turn, in play order.
    #[must_use]
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    /// Cards still available to play, discard or trash.
    #[must_use]
    pub fn unplayed(&self) -> &[Card] {
        &self.unplayed
    }

    /// Played cards followed by unplayed cards.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.played.iter().chain(self.unplayed.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.played.len() + self.unplayed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A player's private draw pile, hand and discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerDeck {
    /// Top of the pile is the end of the vector.
    draw_pile: Vec<Card>,
    played: HandCards,
    unplayed: HandCards,
    discard: Vec<Card>,
}

impl PlayerDeck {
    /// A deck whose cards all start in the draw pile, top last.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            draw_pile: cards,
            ..Self::default()
        }
    }

    /// A deck with explicit zone contents. The hand starts unplayed.
    #[must_use]
    pub fn from_zones(draw_pile: Vec<Card>, hand: Vec<Card>, discard: Vec<Card>) -> Self {
        Self {
            draw_pile,
            played: HandCards::new(),
            unplayed: hand.into_iter().collect(),
            discard,
        }
    }

    pub fn shuffle_draw_pile(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw_pile);
    }

    /// Draw up to `count` cards into the unplayed hand.
    ///
    /// When the draw pile runs out the discard pile is shuffled into it.
    /// Stops early if both are empty. Returns the number of cards drawn.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;
        while drawn < count {
            if self.draw_pile.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.draw_pile.append(&mut self.discard);
                rng.shuffle(&mut self.draw_pile);
            }
            let Some(card) = self.draw_pile.pop() else {
                break;
            };
            self.unplayed.push(card);
            drawn += 1;
        }
        drawn
    }

    /// Move a card from unplayed to played.
    ///
    /// Returns false if the card is not in the unplayed hand.
    pub fn play(&mut self, card: Card) -> bool {
        match take_card(&mut self.unplayed, card) {
            Some(card) => {
                self.played.push(card);
                true
            }
            None => false,
        }
    }

    /// Move a card from the unplayed hand to the discard pile.
    pub fn discard_from_hand(&mut self, card: Card) -> bool {
        match take_card(&mut self.unplayed, card) {
            Some(card) => {
                self.discard.push(card);
                true
            }
            None => false,
        }
    }

    /// Remove a card from the unplayed hand permanently.
    pub fn trash_from_hand(&mut self, card: Card) -> bool {
        take_card(&mut self.unplayed, card).is_some()
    }

    /// Add a newly acquired card to the discard pile.
    pub fn gain(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Move the whole hand, played and unplayed, to the discard pile.
    pub fn cleanup(&mut self) {
        self.discard.extend(self.played.drain(..));
        self.discard.extend(self.unplayed.drain(..));
    }

    #[must_use]
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    #[must_use]
    pub fn unplayed(&self) -> &[Card] {
        &self.unplayed
    }

    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Whether the unplayed hand holds a card matching the predicate.
    pub fn holds(&self, predicate: impl Fn(&Card) -> bool) -> bool {
        self.unplayed.iter().any(predicate)
    }

    #[must_use]
    pub fn hand_view(&self) -> Hand {
        Hand {
            played: self.played.clone(),
            unplayed: self.unplayed.clone(),
        }
    }

    /// Every card the player owns, in any zone.
    pub fn owned_cards(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile
            .iter()
            .chain(self.played.iter())
            .chain(self.unplayed.iter())
            .chain(self.discard.iter())
    }

    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.draw_pile.len() + self.played.len() + self.unplayed.len() + self.discard.len()
    }
}

fn take_card(cards: &mut HandCards, card: Card) -> Option<Card> {
    let pos = cards.iter().position(|c| *c == card)?;
    Some(cards.remove(pos))
}
