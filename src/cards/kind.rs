//! Card catalog - the static identity of every card in the game.
//!
//! `CardType` is the closed set of card identities. Each identity carries
//! a fixed `CardSpec` (category, cost, point value, description). There is
//! no runtime registration: the catalog is the match in `CardType::spec`.
//!
//! ## Value
//!
//! The meaning of `value` depends on the category:
//! - Money: money produced when the card is played
//! - Victory: points contributed at scoring time (Bug is negative)
//! - Action: always 0

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, IntoEnumIterator};

/// Broad category of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Money,
    Action,
    Victory,
}

/// Static data for one card identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    pub description: &'static str,
    pub category: Category,
    pub cost: u32,
    pub value: i32,
}

impl CardSpec {
    const fn new(description: &'static str, category: Category, cost: u32, value: i32) -> Self {
        Self {
            description,
            category,
            cost,
            value,
        }
    }
}

/// Every card identity in the game.
///
/// Declaration order is the catalog order: it is used to order supply
/// views and card-type decisions deterministically.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter, EnumCount,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Bug,
    Method,
    Module,
    Framework,
    Bitcoin,
    Ethereum,
    Dogecoin,
    Backlog,
    DailyScrum,
    Ipo,
    Hack,
    Monitoring,
    TechDebt,
    Refactor,
    Parallelization,
    CodeReview,
    EvergreenTest,
}

impl CardType {
    /// Look up the static data for this card.
    #[must_use]
    pub const fn spec(self) -> CardSpec {
        use Category::{Action, Money, Victory};

        match self {
            CardType::Bug => CardSpec::new("Bug", Victory, 0, -1),
            CardType::Method => CardSpec::new("Method", Victory, 2, 1),
            CardType::Module => CardSpec::new("Module", Victory, 5, 3),
            CardType::Framework => CardSpec::new("Framework", Victory, 8, 6),
            CardType::Bitcoin => CardSpec::new("Bitcoin", Money, 1, 1),
            CardType::Ethereum => CardSpec::new("Ethereum", Money, 3, 2),
            CardType::Dogecoin => CardSpec::new("Dogecoin", Money, 6, 3),
            CardType::Backlog => CardSpec::new("Backlog", Action, 2, 0),
            CardType::DailyScrum => CardSpec::new("Daily Scrum", Action, 5, 0),
            CardType::Ipo => CardSpec::new("IPO", Action, 5, 0),
            CardType::Hack => CardSpec::new("Hack", Action, 4, 0),
            CardType::Monitoring => CardSpec::new("Monitoring", Action, 2, 0),
            CardType::TechDebt => CardSpec::new("Tech Debt", Action, 4, 0),
            CardType::Refactor => CardSpec::new("Refactor", Action, 4, 0),
            CardType::Parallelization => CardSpec::new("Parallelization", Action, 4, 0),
            CardType::CodeReview => CardSpec::new("Code Review", Action, 3, 0),
            CardType::EvergreenTest => CardSpec::new("Evergreen Test", Action, 5, 0),
        }
    }

    #[must_use]
    pub const fn category(self) -> Category {
        self.spec().category
    }

    #[must_use]
    pub const fn cost(self) -> u32 {
        self.spec().cost
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.spec().value
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        self.spec().description
    }

    #[must_use]
    pub fn is_action(self) -> bool {
        self.category() == Category::Action
    }

    #[must_use]
    pub fn is_money(self) -> bool {
        self.category() == Category::Money
    }

    /// Attack cards let other players react before their forced effect.
    #[must_use]
    pub const fn is_attack(self) -> bool {
        matches!(self, CardType::Hack | CardType::EvergreenTest)
    }

    /// Reaction cards may be revealed from hand to ignore an attack.
    #[must_use]
    pub const fn is_reaction(self) -> bool {
        matches!(self, CardType::Monitoring)
    }

    /// Whether the card may be bought or voluntarily gained.
    ///
    /// Bug only ever enters a deck through an attack.
    #[must_use]
    pub const fn is_buyable(self) -> bool {
        !matches!(self, CardType::Bug)
    }

    /// All card types in catalog order.
    pub fn all() -> impl Iterator<Item = CardType> {
        CardType::iter()
    }

    /// All action card types in catalog order.
    pub fn actions() -> impl Iterator<Item = CardType> {
        CardType::iter().filter(|t| t.category() == Category::Action)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
