//! Wagering for ORCHARD.
//!
//! Holds the pre-round bet ledger, bet validation, and the proportional
//! payout computation that settles a round. No simulation dependency;
//! operates on plain data.

pub mod book;
pub mod payout;

pub use book::{Bet, WagerBook, WagerError};
pub use payout::{Payout, Settlement};

#[cfg(test)]
mod tests;
