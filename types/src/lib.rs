//! Common types for the wheelhouse roulette engine.
//!
//! Wheel facts (the red/black partition, colors, the table grid), bet kinds
//! with the payout table, and the error taxonomy shared by the engine and
//! its callers.

mod bets;
mod error;
mod outcome;
mod wheel;

pub use bets::*;
pub use error::*;
pub use outcome::*;
pub use wheel::*;
