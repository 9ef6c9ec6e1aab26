//! Strike resolution and the battle engine.

pub mod battle;
pub mod math;

pub use battle::*;
pub use math::*;
