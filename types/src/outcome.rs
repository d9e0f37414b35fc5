use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a resolved spin, handed back to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Drawn number in `0..=36`.
    pub result: u8,
    /// Gross payout summed over all winning bets.
    pub total_payout: u64,
    /// Balance after deducting the stake and crediting the payout.
    pub new_balance: u64,
}

impl SpinOutcome {
    /// Key of the table cell the UI should highlight.
    pub fn highlight_key(&self) -> String {
        self.result.to_string()
    }
}

impl fmt::Display for SpinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Winning number: {}", self.result)
    }
}
