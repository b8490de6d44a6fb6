//! Card zones: the shared supply and each player's private deck.
//!
//! ## Key Types
//!
//! - `Supply`: remaining copies per card type, cheap to snapshot
//! - `PlayerDeck`: draw pile, split hand and discard pile of one player
//! - `Hand`: read-only copy of a hand for snapshots

pub mod deck;
pub mod supply;

pub use deck::{Hand, PlayerDeck};
pub use supply::Supply;
