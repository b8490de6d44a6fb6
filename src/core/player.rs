//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! A seat at the table. Seat 0 always takes the first turn.
//!
//! ## PlayerMap
//!
//! One value per seat, indexed by `PlayerId`. The engine keeps decks,
//! players, names and per-seat observers in `PlayerMap`s.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a game.
pub const SEAT_COUNT: usize = 2;

/// A seat at the table (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The seat that takes the first turn.
    pub const FIRST: PlayerId = PlayerId(0);

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEAT_COUNT as u8).map(PlayerId)
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % SEAT_COUNT as u8)
    }

    /// Every other seat, in turn order starting after this one.
    pub fn others(self) -> impl Iterator<Item = PlayerId> {
        (1..SEAT_COUNT as u8).map(move |offset| PlayerId((self.0 + offset) % SEAT_COUNT as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One value per seat, stored inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: [T; SEAT_COUNT],
}

impl<T> PlayerMap<T> {
    /// Build one value per seat from a factory, called in seat order.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            seats: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Build from the first and second seat's values.
    pub fn pair(first: T, second: T) -> Self {
        Self {
            seats: [first, second],
        }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }

    /// (seat, value) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.seats.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
