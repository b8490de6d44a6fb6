//! Scoring and termination.
//!
//! The game ends the moment the Framework pile is empty. A player's score
//! is the sum of the point values of every card they own, wherever it
//! sits; Bugs count -1.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType, Category};
use crate::core::player::PlayerId;
use crate::zones::{PlayerDeck, Supply};

/// The pile whose exhaustion ends the game.
pub const TERMINAL_PILE: CardType = CardType::Framework;

/// Final score of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePair {
    pub seat: PlayerId,
    pub name: String,
    pub score: i32,
}

/// Outcome derived from ranked scores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single highest score.
    Winner(PlayerId),
    /// Top scores tied.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Result of a ranking produced by `rank`.
    #[must_use]
    pub fn from_ranking(ranking: &[ScorePair]) -> Self {
        match ranking {
            [first, second, ..] if first.score == second.score => GameResult::Draw,
            [first, ..] => GameResult::Winner(first.seat),
            [] => GameResult::Draw,
        }
    }
}

#[must_use]
pub fn is_game_over(supply: &Supply) -> bool {
    supply.count(TERMINAL_PILE) == 0
}

/// Victory points of a set of cards. Money and action cards score nothing.
pub fn score_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> i32 {
    cards
        .into_iter()
        .filter(|c| c.category() == Category::Victory)
        .map(Card::value)
        .sum()
}

#[must_use]
pub fn score_deck(deck: &PlayerDeck) -> i32 {
    score_cards(deck.owned_cards())
}

/// Sort scores highest first. Equal scores keep seat order.
#[must_use]
pub fn rank(mut scores: Vec<ScorePair>) -> Vec<ScorePair> {
    scores.sort_by_key(|s| s.seat);
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}
