//! Session store and sweeper configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::session::{
    DEFAULT_SESSION_TTL, DEFAULT_SHUTDOWN_GRACE, DEFAULT_SWEEP_INTERVAL,
};

/// Session lifetime and background sweep settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Lifetime granted on creation and each renewal.
    pub ttl_secs: u64,
    /// Interval between background sweeps of expired sessions.
    pub sweep_interval_secs: u64,
    /// How long shutdown waits for the sweeper before aborting it.
    pub shutdown_grace_secs: u64,
}

impl SessionConfig {
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    #[must_use]
    pub const fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    #[must_use]
    pub const fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_SESSION_TTL.as_secs(),
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL.as_secs(),
            shutdown_grace_secs: DEFAULT_SHUTDOWN_GRACE.as_secs(),
        }
    }
}
