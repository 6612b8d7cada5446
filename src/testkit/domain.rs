//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for ids, sessions and populated
//! ledgers so tests focus on assertions rather than construction
//! boilerplate.

use crate::application::ledger::StakeLedger;
use crate::domain::{CustomerId, MarketId, RankedStake};
use crate::port::inbound::StakeService;

/// Create a [`CustomerId`]; `id` must be positive.
pub fn customer(id: u32) -> CustomerId {
    CustomerId::new(id)
}

/// Create a [`MarketId`]; `id` must be positive.
pub fn market(id: u32) -> MarketId {
    MarketId::new(id)
}

/// Render leaderboard entries as `customer=stake` strings.
pub fn rendered(entries: &[RankedStake]) -> Vec<String> {
    entries.iter().map(ToString::to_string).collect()
}

/// A default ledger in which customers `1..=customers` each stake
/// `customer * 100` on `market_id`.
///
/// # Panics
///
/// Panics if a generated stake is rejected.
pub fn ledger_with_ladder(market_id: i64, customers: i64) -> StakeLedger {
    let ledger = StakeLedger::default();
    for customer in 1..=customers {
        if let Err(error) = ledger.submit_stake(customer, market_id, customer * 100) {
            panic!("seed stake rejected: {error}");
        }
    }
    ledger
}
