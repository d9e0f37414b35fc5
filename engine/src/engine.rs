//! The betting state machine.

use tracing::{debug, info};
use wheelhouse_types::{payout_for_key, Bet, BetError, SpinOutcome};

use crate::history::SpinRecord;
use crate::rng::Wheel;

/// Single-session betting engine.
///
/// Owns the account balance, the selected chip denomination, and the active
/// bet set. The flow is select chip → place bets → resolve → idle;
/// resolution is instantaneous and always returns to idle, win or lose.
///
/// Invariants:
/// - each key appears at most once in the active bet set;
/// - a placed bet always carries a strictly positive chip value;
/// - the stake is validated against the balance before any draw is consumed,
///   so the settlement subtraction cannot underflow.
#[derive(Clone, Debug)]
pub struct BettingEngine {
    balance: u64,
    selected_chip: Option<u64>,
    bets: Vec<Bet>,
    history: Vec<SpinRecord>,
}

impl BettingEngine {
    /// New engine with the starting balance shown by the table UI.
    pub fn new(initial_balance: u64) -> Self {
        Self {
            balance: initial_balance,
            selected_chip: None,
            bets: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Current account balance.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Currently selected chip denomination, if any.
    pub fn selected_chip(&self) -> Option<u64> {
        self.selected_chip
    }

    /// Active bet set.
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Total staked across the active bet set.
    pub fn total_staked(&self) -> u64 {
        self.bets.iter().map(|b| b.amount).sum()
    }

    /// Records of every spin resolved by this engine.
    pub fn history(&self) -> &[SpinRecord] {
        &self.history
    }

    /// Select the chip denomination used for subsequent bets. Zero clears
    /// the selection; existing bets are unaffected either way.
    pub fn select_chip(&mut self, value: u64) {
        self.selected_chip = (value > 0).then_some(value);
    }

    /// Place the selected chip on a table cell.
    ///
    /// Accumulates onto an existing bet with the same key, otherwise appends
    /// a new one. Returns the total now riding on that key (the UI's chip
    /// token label). No stake limit is enforced here; the total is validated
    /// against the balance at resolution.
    pub fn place_bet(&mut self, key: &str) -> Result<u64, BetError> {
        let chip = self.selected_chip.ok_or(BetError::NoChipSelected)?;
        let amount = match self.bets.iter_mut().find(|b| b.key == key) {
            Some(bet) => {
                bet.amount += chip;
                bet.amount
            }
            None => {
                self.bets.push(Bet {
                    key: key.to_string(),
                    amount: chip,
                });
                chip
            }
        };
        debug!(key, amount, "bet placed");
        Ok(amount)
    }

    /// Empty the bet set and unset the chip selection.
    pub fn clear_bets(&mut self) {
        self.bets.clear();
        self.selected_chip = None;
    }

    /// Resolve a spin: draw once, settle every bet per the payout table, and
    /// reset for the next round.
    ///
    /// Fails without consuming a draw, and without touching any state, when
    /// the bet set is empty or the stake exceeds the balance.
    pub fn resolve_spin<W: Wheel>(&mut self, wheel: &mut W) -> Result<SpinOutcome, BetError> {
        if self.bets.is_empty() {
            return Err(BetError::EmptyBetSet);
        }
        let stake = self.total_staked();
        if stake > self.balance {
            return Err(BetError::InsufficientBalance {
                stake,
                balance: self.balance,
            });
        }

        let result = wheel.spin();
        let total_payout: u64 = self
            .bets
            .iter()
            .map(|bet| payout_for_key(&bet.key, bet.amount, result))
            .sum();

        self.balance = self.balance - stake + total_payout;
        self.history.push(SpinRecord {
            result,
            stake,
            payout: total_payout,
            balance_after: self.balance,
            bets: std::mem::take(&mut self.bets),
        });
        self.selected_chip = None;

        info!(
            result,
            stake,
            total_payout,
            balance = self.balance,
            "spin resolved"
        );
        Ok(SpinOutcome {
            result,
            total_payout,
            new_balance: self.balance,
        })
    }
}
