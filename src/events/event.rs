//! Game event types.
//!
//! Events describe something that already happened. They are only ever
//! sent to observers and never fed back into the engine.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType};

/// Something that happened during a game.
///
/// Serialized with a `"type"` discriminant, e.g.
/// `{"type":"gain_card","card_type":"BUG","player_name":"bob"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A card was played or revealed from hand.
    PlayCard { card: Card, player_name: String },
    /// A card was bought or gained into a discard pile.
    GainCard {
        card_type: CardType,
        player_name: String,
    },
    /// A card was discarded from hand.
    DiscardCard {
        card_type: CardType,
        player_name: String,
    },
    /// A card was trashed from hand.
    TrashCard {
        card_type: CardType,
        player_name: String,
    },
    /// A player finished cleanup.
    EndTurn { player_name: String },
    /// Free-text notification (game start, turn start, phase changes, game over).
    GameEvent { description: String },
}

impl Event {
    pub fn play_card(card: Card, player_name: impl Into<String>) -> Self {
        Self::PlayCard {
            card,
            player_name: player_name.into(),
        }
    }

    pub fn gain_card(card_type: CardType, player_name: impl Into<String>) -> Self {
        Self::GainCard {
            card_type,
            player_name: player_name.into(),
        }
    }

    pub fn discard_card(card_type: CardType, player_name: impl Into<String>) -> Self {
        Self::DiscardCard {
            card_type,
            player_name: player_name.into(),
        }
    }

    pub fn trash_card(card_type: CardType, player_name: impl Into<String>) -> Self {
        Self::TrashCard {
            card_type,
            player_name: player_name.into(),
        }
    }

    pub fn end_turn(player_name: impl Into<String>) -> Self {
        Self::EndTurn {
            player_name: player_name.into(),
        }
    }

    pub fn game(description: impl Into<String>) -> Self {
        Self::GameEvent {
            description: description.into(),
        }
    }

    /// Name of the acting player, if the event has one.
    #[must_use]
    pub fn player_name(&self) -> Option<&str> {
        match self {
            Event::PlayCard { player_name, .. }
            | Event::GainCard { player_name, .. }
            | Event::DiscardCard { player_name, .. }
            | Event::TrashCard { player_name, .. }
            | Event::EndTurn { player_name } => Some(player_name),
            Event::GameEvent { .. } => None,
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Event::PlayCard { card, player_name } => format!("{player_name} played card: {card}"),
            Event::GainCard {
                card_type,
                player_name,
            } => format!("{player_name} gained card: {card_type}"),
            Event::DiscardCard {
                card_type,
                player_name,
            } => format!("{player_name} discarded card: {card_type}"),
            Event::TrashCard {
                card_type,
                player_name,
            } => format!("{player_name} trashed card: {card_type}"),
            Event::EndTurn { player_name } => format!("{player_name} ended their turn"),
            Event::GameEvent { description } => description.clone(),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_descriptions() {
        let card = Card::new(CardType::Ipo, CardId(40));
        assert_eq!(
            Event::play_card(card, "alice").description(),
            "alice played card: [IPO(id: 40)]"
        );
        assert_eq!(
            Event::gain_card(CardType::Bug, "bob").description(),
            "bob gained card: Bug"
        );
        assert_eq!(Event::game("Game over").description(), "Game over");
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Event::end_turn("alice").player_name(), Some("alice"));
        assert_eq!(Event::game("x").player_name(), None);
    }

    #[test]
    fn test_tagged_json_shape() {
        let json = serde_json::to_string(&Event::gain_card(CardType::Bug, "bob")).unwrap();
        assert_eq!(json, r#"{"type":"gain_card","card_type":"BUG","player_name":"bob"}"#);

        let json = serde_json::to_string(&Event::game("Turn 1")).unwrap();
        assert_eq!(json, r#"{"type":"game_event","description":"Turn 1"}"#);
    }
}
