//! Proportional payout computation.
//!
//! Pure functions over the bet ledger; no book state involved.

use serde::{Deserialize, Serialize};

use crate::book::Bet;

/// One bettor's line in the settlement report. Losing bets are listed
/// with a zero payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub bettor: String,
    /// The fruit the stake backed.
    pub entity: usize,
    pub stake: f64,
    /// Share of the distributable pot, zero for losing bets.
    pub amount: f64,
}

/// The outcome of settling a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub winner: usize,
    /// Total wagered across all bets.
    pub pot: f64,
    /// The house cut, `pot * tax_rate`.
    pub tax: f64,
    /// What remains for the winning bettors.
    pub distributable: f64,
    /// Total staked on the winning fruit.
    pub total_winning: f64,
    /// One line per bet, in placement order.
    pub payouts: Vec<Payout>,
}

impl Settlement {
    /// False for the degenerate cases: an empty pot or no stake on the
    /// winner. Reported as "no payouts" rather than an error.
    pub fn has_payouts(&self) -> bool {
        self.payouts.iter().any(|p| p.amount > 0.0)
    }
}

/// Split the taxed pot across the winning bets, proportional to stake.
pub fn compute(bets: &[Bet], winner: usize, tax_rate: f64) -> Settlement {
    let pot: f64 = bets.iter().map(|b| b.amount).sum();
    let tax = pot * tax_rate;
    let distributable = pot - tax;
    let total_winning: f64 = bets
        .iter()
        .filter(|b| b.entity == winner)
        .map(|b| b.amount)
        .sum();

    let payouts = bets
        .iter()
        .map(|bet| {
            let amount = if bet.entity == winner && total_winning > 0.0 {
                distributable * bet.amount / total_winning
            } else {
                0.0
            };
            Payout {
                bettor: bet.bettor.clone(),
                entity: bet.entity,
                stake: bet.amount,
                amount,
            }
        })
        .collect();

    Settlement {
        winner,
        pot,
        tax,
        distributable,
        total_winning,
        payouts,
    }
}
