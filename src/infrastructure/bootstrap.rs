//! Composition root: builds the in-memory services from configuration.

use std::sync::Arc;

use crate::adapter::inbound::http::AppState;
use crate::application::ledger::StakeLedger;
use crate::application::session::{SessionStore, Sweeper};
use crate::infrastructure::config::settings::Config;

/// The stateful services behind the request layer.
#[derive(Debug, Clone)]
pub struct Services {
    pub sessions: Arc<SessionStore>,
    pub ledger: Arc<StakeLedger>,
}

impl Services {
    /// Build an empty session store and ledger sized by `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(config.session.ttl())),
            ledger: Arc::new(StakeLedger::new(
                config.ledger.max_stake,
                config.ledger.top_limit,
            )),
        }
    }

    /// Request-handler state sharing these services.
    #[must_use]
    pub fn app_state(&self) -> AppState {
        AppState::in_memory(Arc::clone(&self.sessions), Arc::clone(&self.ledger))
    }

    /// A sweeper for the session store on the configured interval.
    #[must_use]
    pub fn sweeper(&self, config: &Config) -> Sweeper {
        Sweeper::new(Arc::clone(&self.sessions), config.session.sweep_interval())
    }
}
