//! Stake ledger configuration.

use serde::Deserialize;

use crate::domain::{DEFAULT_MAX_STAKE, DEFAULT_TOP_LIMIT};

/// Stake ceiling and leaderboard length.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Largest stake accepted on a single submission.
    pub max_stake: u32,
    /// Number of entries in a high-stakes response.
    pub top_limit: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_stake: DEFAULT_MAX_STAKE,
            top_limit: DEFAULT_TOP_LIMIT,
        }
    }
}
