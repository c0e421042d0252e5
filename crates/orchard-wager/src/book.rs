//! The pre-round bet ledger and its settlement gate.

use serde::{Deserialize, Serialize};

use crate::payout::{self, Settlement};

/// A single pre-round bet. Immutable once placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    /// Who placed it.
    pub bettor: String,
    /// The fruit index the stake backs.
    pub entity: usize,
    /// Stake in currency units, always positive.
    pub amount: f64,
}

/// Why a bet or settlement was refused. All of these are recoverable;
/// the caller reports the message and may retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WagerError {
    #[error("no fruit with index {0} in this round")]
    EntityOutOfRange(usize),
    #[error("stake must be a positive finite amount, got {0}")]
    NonPositiveStake(f64),
    #[error("{bettor} already has a bet on fruit {entity}")]
    DuplicateBet { bettor: String, entity: usize },
    #[error("betting is closed")]
    BettingClosed,
    #[error("the round was already settled for fruit {0}")]
    AlreadySettled(usize),
}

/// Book lifecycle. Settled is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BookState {
    AcceptingBets,
    Settled { winner: usize },
}

/// The bet ledger for one round. Accepts bets until the round is
/// settled, then answers payout queries for the recorded winner.
#[derive(Debug, Clone)]
pub struct WagerBook {
    entity_count: usize,
    tax_rate: f64,
    bets: Vec<Bet>,
    state: BookState,
}

impl WagerBook {
    /// A fresh book for a round with `entity_count` fruits.
    pub fn new(entity_count: usize, tax_rate: f64) -> Self {
        Self {
            entity_count,
            tax_rate,
            bets: Vec::new(),
            state: BookState::AcceptingBets,
        }
    }

    /// Record a bet. A bettor may back several fruits but only once
    /// each; two bettors may back the same fruit.
    pub fn place_bet(
        &mut self,
        bettor: &str,
        entity: usize,
        amount: f64,
    ) -> Result<(), WagerError> {
        if self.state != BookState::AcceptingBets {
            return Err(WagerError::BettingClosed);
        }
        if entity >= self.entity_count {
            return Err(WagerError::EntityOutOfRange(entity));
        }
        // is_finite throws out NaN and the infinities, the comparison the rest
        if !(amount.is_finite() && amount > 0.0) {
            return Err(WagerError::NonPositiveStake(amount));
        }
        if self
            .bets
            .iter()
            .any(|b| b.bettor == bettor && b.entity == entity)
        {
            return Err(WagerError::DuplicateBet {
                bettor: bettor.to_string(),
                entity,
            });
        }

        self.bets.push(Bet {
            bettor: bettor.to_string(),
            entity,
            amount,
        });
        Ok(())
    }

    /// Settle the round for `winner`. The payout is a pure function of
    /// the ledger and the winner, so settling again with the same
    /// winner returns the same result; naming a different winner is
    /// refused.
    pub fn settle(&mut self, winner: usize) -> Result<Settlement, WagerError> {
        if let BookState::Settled { winner: settled } = self.state {
            if settled != winner {
                return Err(WagerError::AlreadySettled(settled));
            }
        }

        self.state = BookState::Settled { winner };
        Ok(payout::compute(&self.bets, winner, self.tax_rate))
    }

    /// All recorded bets in placement order.
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// True when nobody has bet yet.
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// How many fruits this book accepts bets on.
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }
}
