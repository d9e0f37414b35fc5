//! Bet kinds, key parsing, and the payout table.
//!
//! Table cells are identified by string keys: `"0"`..`"36"` for straight
//! bets, `"red"` / `"black"` / `"even"` / `"odd"` for the even-money outside
//! bets, `"1 to 12"` / `"13 to 24"` / `"25 to 36"` for dozens, and `"2to1"`
//! for the column cells.

use serde::{Deserialize, Serialize};

use crate::wheel::{is_red, WHEEL_MAX};

/// A chip bet riding on one table cell.
///
/// Keys are unique within the active set; placing on an already-bet key
/// accumulates into the existing amount instead of adding a duplicate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    pub key: String,
    pub amount: u64,
}

/// Dozen ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dozen {
    First,  // 1-12
    Second, // 13-24
    Third,  // 25-36
}

/// Roulette bet kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetKind {
    /// Single number 0-36.
    Straight(u8),
    Red,
    Black,
    Even,
    Odd,
    Dozen(Dozen),
    Column,
}

impl BetKind {
    /// Parse a table-cell key.
    ///
    /// Unknown keys return `None`. The engine still accepts them at
    /// placement; they simply pay nothing at resolution.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "red" => Some(Self::Red),
            "black" => Some(Self::Black),
            "even" => Some(Self::Even),
            "odd" => Some(Self::Odd),
            "1 to 12" => Some(Self::Dozen(Dozen::First)),
            "13 to 24" => Some(Self::Dozen(Dozen::Second)),
            "25 to 36" => Some(Self::Dozen(Dozen::Third)),
            "2to1" => Some(Self::Column),
            _ => {
                if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let number: u8 = key.parse().ok()?;
                (number <= WHEEL_MAX).then_some(Self::Straight(number))
            }
        }
    }

    /// Whether this bet wins when `result` is drawn.
    ///
    /// The column cells win unconditionally: the table never checks which
    /// column the drawn number is actually in. Kept as-is deliberately.
    pub fn wins(&self, result: u8) -> bool {
        match self {
            Self::Straight(number) => *number == result,
            Self::Red => is_red(result),
            Self::Black => result != 0 && !is_red(result),
            Self::Even => result != 0 && result % 2 == 0,
            Self::Odd => result % 2 == 1,
            Self::Dozen(Dozen::First) => (1..=12).contains(&result),
            Self::Dozen(Dozen::Second) => (13..=24).contains(&result),
            Self::Dozen(Dozen::Third) => (25..=36).contains(&result),
            Self::Column => true,
        }
    }

    /// Gross payout multiplier applied to the whole bet amount. The stake is
    /// deducted separately at resolution, so a straight win nets 35x.
    pub fn payout_multiplier(&self) -> u64 {
        match self {
            Self::Straight(_) => 36,
            Self::Red | Self::Black | Self::Even | Self::Odd => 2,
            Self::Dozen(_) | Self::Column => 3,
        }
    }
}

/// Gross payout for `amount` riding on `key` when `result` is drawn.
/// Unparsable keys pay nothing.
pub fn payout_for_key(key: &str, amount: u64, result: u8) -> u64 {
    match BetKind::from_key(key) {
        Some(kind) if kind.wins(result) => amount * kind.payout_multiplier(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_outside_bets() {
        assert_eq!(BetKind::from_key("red"), Some(BetKind::Red));
        assert_eq!(BetKind::from_key("black"), Some(BetKind::Black));
        assert_eq!(BetKind::from_key("even"), Some(BetKind::Even));
        assert_eq!(BetKind::from_key("odd"), Some(BetKind::Odd));
        assert_eq!(
            BetKind::from_key("1 to 12"),
            Some(BetKind::Dozen(Dozen::First))
        );
        assert_eq!(
            BetKind::from_key("13 to 24"),
            Some(BetKind::Dozen(Dozen::Second))
        );
        assert_eq!(
            BetKind::from_key("25 to 36"),
            Some(BetKind::Dozen(Dozen::Third))
        );
        assert_eq!(BetKind::from_key("2to1"), Some(BetKind::Column));
    }

    #[test]
    fn test_from_key_straight() {
        assert_eq!(BetKind::from_key("0"), Some(BetKind::Straight(0)));
        assert_eq!(BetKind::from_key("17"), Some(BetKind::Straight(17)));
        assert_eq!(BetKind::from_key("36"), Some(BetKind::Straight(36)));
    }

    #[test]
    fn test_from_key_rejects_unknown() {
        assert_eq!(BetKind::from_key("37"), None);
        assert_eq!(BetKind::from_key("-1"), None);
        assert_eq!(BetKind::from_key("+7"), None);
        assert_eq!(BetKind::from_key(""), None);
        assert_eq!(BetKind::from_key("RED"), None);
        // The column key is "2to1"; "2 to 1" is only display text.
        assert_eq!(BetKind::from_key("2 to 1"), None);
    }

    #[test]
    fn test_wins_straight() {
        assert!(BetKind::Straight(17).wins(17));
        assert!(!BetKind::Straight(17).wins(18));
        assert!(BetKind::Straight(0).wins(0));
    }

    #[test]
    fn test_wins_colors() {
        assert!(BetKind::Red.wins(1));
        assert!(BetKind::Red.wins(36));
        assert!(!BetKind::Red.wins(2));
        assert!(!BetKind::Red.wins(0)); // Zero loses

        assert!(BetKind::Black.wins(2));
        assert!(BetKind::Black.wins(35));
        assert!(!BetKind::Black.wins(1));
        assert!(!BetKind::Black.wins(0)); // Zero loses
    }

    #[test]
    fn test_wins_even_odd() {
        assert!(BetKind::Even.wins(2));
        assert!(BetKind::Even.wins(36));
        assert!(!BetKind::Even.wins(1));
        assert!(!BetKind::Even.wins(0)); // Zero loses

        assert!(BetKind::Odd.wins(1));
        assert!(BetKind::Odd.wins(35));
        assert!(!BetKind::Odd.wins(2));
        assert!(!BetKind::Odd.wins(0));
    }

    #[test]
    fn test_wins_dozens() {
        assert!(BetKind::Dozen(Dozen::First).wins(1));
        assert!(BetKind::Dozen(Dozen::First).wins(12));
        assert!(!BetKind::Dozen(Dozen::First).wins(13));
        assert!(!BetKind::Dozen(Dozen::First).wins(0));

        assert!(BetKind::Dozen(Dozen::Second).wins(13));
        assert!(BetKind::Dozen(Dozen::Second).wins(24));
        assert!(!BetKind::Dozen(Dozen::Second).wins(25));

        assert!(BetKind::Dozen(Dozen::Third).wins(25));
        assert!(BetKind::Dozen(Dozen::Third).wins(36));
        assert!(!BetKind::Dozen(Dozen::Third).wins(24));
    }

    #[test]
    fn test_column_always_wins() {
        for result in 0..=36 {
            assert!(BetKind::Column.wins(result));
        }
    }

    #[test]
    fn test_payout_multipliers() {
        assert_eq!(BetKind::Straight(17).payout_multiplier(), 36);
        assert_eq!(BetKind::Red.payout_multiplier(), 2);
        assert_eq!(BetKind::Black.payout_multiplier(), 2);
        assert_eq!(BetKind::Even.payout_multiplier(), 2);
        assert_eq!(BetKind::Odd.payout_multiplier(), 2);
        assert_eq!(BetKind::Dozen(Dozen::First).payout_multiplier(), 3);
        assert_eq!(BetKind::Column.payout_multiplier(), 3);
    }

    #[test]
    fn test_payout_for_key() {
        assert_eq!(payout_for_key("17", 20, 17), 720);
        assert_eq!(payout_for_key("17", 20, 5), 0);
        assert_eq!(payout_for_key("red", 20, 1), 40);
        assert_eq!(payout_for_key("red", 20, 2), 0);
        assert_eq!(payout_for_key("1 to 12", 10, 12), 30);
        assert_eq!(payout_for_key("2to1", 10, 0), 30);
        // Unknown keys pay nothing
        assert_eq!(payout_for_key("banana", 100, 17), 0);
    }

    #[test]
    fn test_bet_serde_roundtrip() {
        let bet = Bet {
            key: "13 to 24".to_string(),
            amount: 25,
        };
        let json = serde_json::to_string(&bet).unwrap();
        let decoded: Bet = serde_json::from_str(&json).unwrap();
        assert_eq!(bet, decoded);
    }
}
