//! Stake submission and ranking port.

use crate::domain::{BettingError, RankedStake, StakeOutcome};

/// Port for recording stakes and reading market leaderboards.
///
/// Inputs are raw integers as parsed by the transport; implementations
/// validate them before touching any state, so a rejected call never leaves
/// partial effects behind.
pub trait StakeService: Send + Sync {
    /// Record `stake` for the customer on the market if it beats their
    /// current maximum there.
    ///
    /// # Errors
    ///
    /// - [`BettingError::InvalidCustomerId`] if `customer_id <= 0`
    /// - [`BettingError::InvalidMarketId`] if `market_id <= 0`
    /// - [`BettingError::InvalidStakeAmount`] if `stake < 0`
    /// - [`BettingError::StakeTooHigh`] if `stake` exceeds the ceiling
    fn submit_stake(
        &self,
        customer_id: i64,
        market_id: i64,
        stake: i64,
    ) -> Result<StakeOutcome, BettingError>;

    /// Return up to `limit` entries for the market, highest stake first.
    ///
    /// Customers sharing a stake are ordered by ascending customer id. An
    /// unknown market yields an empty list.
    ///
    /// # Errors
    ///
    /// [`BettingError::InvalidMarketId`] if `market_id <= 0`.
    fn top_stakes_limited(
        &self,
        market_id: i64,
        limit: usize,
    ) -> Result<Vec<RankedStake>, BettingError>;

    /// Ceiling applied to every submitted stake.
    fn max_stake_limit(&self) -> u32;

    /// Leaderboard length used by [`top_stakes`](Self::top_stakes).
    fn default_limit(&self) -> usize;

    /// Return the market's leaderboard at the default length (20).
    ///
    /// # Errors
    ///
    /// [`BettingError::InvalidMarketId`] if `market_id <= 0`.
    fn top_stakes(&self, market_id: i64) -> Result<Vec<RankedStake>, BettingError> {
        self.top_stakes_limited(market_id, self.default_limit())
    }
}
