//! Wheelhouse betting engine.
//!
//! A single-session roulette betting state machine: select a chip, place
//! bets on table-cell keys, resolve a spin against an injected wheel, and
//! settle the balance per the payout table in `wheelhouse-types`.
//!
//! ## Determinism
//! All randomness flows through the [`Wheel`] trait. Production callers use
//! the ChaCha8-backed [`WheelRng`]; tests inject seeded or scripted wheels
//! to pin outcomes.
//!
//! ## Flow
//! ```rust
//! use wheelhouse_engine::{BettingEngine, WheelRng};
//!
//! let mut engine = BettingEngine::new(100);
//! engine.select_chip(10);
//! engine.place_bet("red").unwrap();
//! let mut wheel = WheelRng::seeded(7);
//! let outcome = engine.resolve_spin(&mut wheel).unwrap();
//! assert_eq!(engine.balance(), outcome.new_balance);
//! assert!(engine.bets().is_empty());
//! ```

mod engine;
mod history;
mod rng;

pub use engine::BettingEngine;
pub use history::SpinRecord;
pub use rng::{Wheel, WheelRng};
