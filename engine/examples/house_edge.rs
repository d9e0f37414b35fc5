//! Monte Carlo house-edge estimates for each bet key.
//!
//! Run with `cargo run --release --example house_edge`. Note the column
//! cells: they pay on every spin, so their "house edge" comes out strongly
//! negative. That is the table behaving as shipped, not an estimator bug.

use wheelhouse_engine::{BettingEngine, WheelRng};

const TRIALS: u64 = 200_000;
const BET: u64 = 10;

#[derive(Default, Clone)]
struct Stats {
    trials: u64,
    total_net: f64,
    total_net_sq: f64,
    total_wagered: f64,
}

impl Stats {
    fn add(&mut self, net: i64, wagered: u64) {
        let n = net as f64;
        self.trials += 1;
        self.total_net += n;
        self.total_net_sq += n * n;
        self.total_wagered += wagered as f64;
    }

    fn mean_net(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_net / self.trials as f64
        }
    }

    fn house_edge(&self) -> f64 {
        let mean_wagered = self.total_wagered / self.trials.max(1) as f64;
        if mean_wagered == 0.0 {
            0.0
        } else {
            -self.mean_net() / mean_wagered
        }
    }

    fn stderr(&self) -> f64 {
        if self.trials <= 1 {
            return 0.0;
        }
        let mean = self.mean_net();
        let var = (self.total_net_sq / self.trials as f64) - mean * mean;
        (var.max(0.0) / self.trials as f64).sqrt()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let keys = [
        "17", "red", "black", "even", "odd", "1 to 12", "13 to 24", "25 to 36", "2to1",
    ];

    println!(
        "{:<10} {:>12} {:>12} {:>10}",
        "bet", "mean net", "house edge", "stderr"
    );
    for key in keys {
        let mut wheel = WheelRng::seeded(0xC0FFEE);
        let mut engine = BettingEngine::new(TRIALS * BET);
        let mut stats = Stats::default();
        for _ in 0..TRIALS {
            engine.select_chip(BET);
            engine.place_bet(key)?;
            let outcome = engine.resolve_spin(&mut wheel)?;
            stats.add(outcome.total_payout as i64 - BET as i64, BET);
        }
        println!(
            "{:<10} {:>12.4} {:>11.2}% {:>10.4}",
            key,
            stats.mean_net(),
            stats.house_edge() * 100.0,
            stats.stderr()
        );
    }
    Ok(())
}
