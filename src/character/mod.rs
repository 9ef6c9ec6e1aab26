//! Combatant state, growth and healing.

mod healing;
mod progression;
pub mod types;

pub use types::*;
