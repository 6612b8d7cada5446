//! Stake amounts and leaderboard entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::BettingError;
use super::id::CustomerId;

/// Default ceiling on a single stake.
pub const DEFAULT_MAX_STAKE: u32 = 1_000_000;

/// Default number of entries returned by a top-stakes query.
pub const DEFAULT_TOP_LIMIT: usize = 20;

/// A validated, non-negative stake amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Stake(u32);

impl Stake {
    /// Validate a raw stake against `0 ..= max`.
    ///
    /// Negative values fail with [`BettingError::InvalidStakeAmount`]; values
    /// above `max` fail with [`BettingError::StakeTooHigh`].
    pub fn try_new(value: i64, max: u32) -> Result<Self, BettingError> {
        if value < 0 {
            return Err(BettingError::InvalidStakeAmount { value });
        }
        match u32::try_from(value) {
            Ok(amount) if amount <= max => Ok(Self(amount)),
            _ => Err(BettingError::StakeTooHigh { value, limit: max }),
        }
    }

    /// Get the raw amount.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Stake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of a market leaderboard.
///
/// Displays as `customerId=stake`, the wire format of the high-stakes query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedStake {
    pub customer_id: CustomerId,
    pub stake: Stake,
}

impl fmt::Display for RankedStake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.customer_id, self.stake)
    }
}

/// What a stake submission did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakeOutcome {
    /// The stake became the customer's new maximum for the market.
    Raised {
        /// The maximum it replaced, if the customer had staked before.
        previous: Option<Stake>,
    },
    /// The stake did not exceed the recorded maximum; nothing changed.
    Unchanged {
        /// The maximum that remains in force.
        current: Stake,
    },
}

impl StakeOutcome {
    /// Return `true` if the submission changed the ledger.
    #[must_use]
    pub const fn is_raised(&self) -> bool {
        matches!(self, Self::Raised { .. })
    }
}
