//! Shared balance constants and the campaign loop.

pub mod campaign;
pub mod constants;

pub use campaign::*;
pub use constants::*;
