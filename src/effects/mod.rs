//! Card effects.
//!
//! - `CardEffect`: the primitive effects action cards are built from
//! - `Target`: whether an effect hits the actor or everyone else
//! - `effects_for`: the fixed effect sequence of each card type
//!
//! The engine interprets these in `engine::resolver`.

mod effect;
mod targeting;

pub use effect::{effects_for, CardEffect, TargetedEffect};
pub use targeting::Target;
