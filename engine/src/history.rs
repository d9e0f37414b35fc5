//! In-memory spin history.
//!
//! One record per resolved spin, kept for the lifetime of the engine. There
//! is no persistence across sessions.

use serde::Serialize;
use wheelhouse_types::Bet;

/// Record of one resolved spin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SpinRecord {
    /// Drawn number.
    pub result: u8,
    /// Total staked across the bet set.
    pub stake: u64,
    /// Gross payout returned.
    pub payout: u64,
    /// Balance after settlement.
    pub balance_after: u64,
    /// The bet set the spin settled.
    pub bets: Vec<Bet>,
}
