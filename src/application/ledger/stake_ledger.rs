//! The ledger service over per-market books.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;

use super::book::MarketBook;
use crate::domain::{
    BettingError, CustomerId, MarketId, RankedStake, Stake, StakeOutcome, DEFAULT_MAX_STAKE,
    DEFAULT_TOP_LIMIT,
};
use crate::port::inbound::StakeService;

/// Records each customer's highest stake per market.
#[derive(Debug)]
pub struct StakeLedger {
    markets: DashMap<MarketId, Arc<RwLock<MarketBook>>>,
    max_stake: u32,
    top_limit: usize,
}

impl Default for StakeLedger {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STAKE, DEFAULT_TOP_LIMIT)
    }
}

impl StakeLedger {
    /// Create an empty ledger accepting stakes up to `max_stake` and
    /// returning `top_limit` entries from [`StakeService::top_stakes`].
    #[must_use]
    pub fn new(max_stake: u32, top_limit: usize) -> Self {
        Self {
            markets: DashMap::new(),
            max_stake,
            top_limit,
        }
    }

    /// The customer's recorded maximum on the market, if any.
    #[must_use]
    pub fn max_stake(&self, customer_id: CustomerId, market_id: MarketId) -> Option<Stake> {
        self.existing_book(market_id)?
            .read()
            .max_stake(customer_id)
    }

    /// Number of markets that have received at least one stake.
    #[must_use]
    pub fn market_count(&self) -> usize {
        self.markets.len()
    }

    /// Number of distinct customers who have staked on the market.
    #[must_use]
    pub fn customer_count(&self, market_id: MarketId) -> usize {
        self.existing_book(market_id)
            .map_or(0, |book| book.read().customer_count())
    }

    /// Check every market's ranking against its max-stake records.
    #[cfg(any(test, feature = "testkit"))]
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.markets
            .iter()
            .all(|entry| entry.value().read().is_consistent())
    }

    fn existing_book(&self, market_id: MarketId) -> Option<Arc<RwLock<MarketBook>>> {
        self.markets.get(&market_id).map(|e| Arc::clone(e.value()))
    }

    fn book(&self, market_id: MarketId) -> Arc<RwLock<MarketBook>> {
        Arc::clone(self.markets.entry(market_id).or_default().value())
    }
}

impl StakeService for StakeLedger {
    fn submit_stake(
        &self,
        customer_id: i64,
        market_id: i64,
        stake: i64,
    ) -> Result<StakeOutcome, BettingError> {
        let customer_id = CustomerId::try_from(customer_id)?;
        let market_id = MarketId::try_from(market_id)?;
        let stake = Stake::try_new(stake, self.max_stake)?;

        let book = self.book(market_id);
        let recorded = book.read().max_stake(customer_id);
        if let Some(current) = recorded.filter(|current| stake <= *current) {
            return Ok(StakeOutcome::Unchanged { current });
        }
        // Re-checked under the write lock; a concurrent raise may have won.
        let outcome = book.write().raise(customer_id, stake);
        Ok(outcome)
    }

    fn top_stakes_limited(
        &self,
        market_id: i64,
        limit: usize,
    ) -> Result<Vec<RankedStake>, BettingError> {
        let market_id = MarketId::try_from(market_id)?;
        Ok(self
            .existing_book(market_id)
            .map(|book| book.read().top(limit))
            .unwrap_or_default())
    }

    fn default_limit(&self) -> usize {
        self.top_limit
    }

    fn max_stake_limit(&self) -> u32 {
        self.max_stake
    }
}
