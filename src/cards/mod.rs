//! Card system: the static catalog and concrete card instances.
//!
//! ## Key Types
//!
//! - `CardType`: Closed set of card identities
//! - `CardSpec`: Static data (category, cost, value, description)
//! - `Category`: Money, Action or Victory
//! - `Card`: A concrete card (`CardType` + unique `CardId`)
//! - `CardIdAllocator`: Mints cards with fresh ids

pub mod instance;
pub mod kind;

pub use instance::{Card, CardId, CardIdAllocator};
pub use kind::{CardSpec, CardType, Category};
