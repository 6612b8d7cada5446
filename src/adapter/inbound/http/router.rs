//! Shared handler state and the routing table.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handler;
use crate::application::ledger::StakeLedger;
use crate::application::session::SessionStore;
use crate::port::inbound::{SessionService, StakeService};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionService>,
    pub stakes: Arc<dyn StakeService>,
}

impl AppState {
    #[must_use]
    pub fn new(sessions: Arc<dyn SessionService>, stakes: Arc<dyn StakeService>) -> Self {
        Self { sessions, stakes }
    }

    /// State backed by the in-memory store and ledger.
    #[must_use]
    pub fn in_memory(sessions: Arc<SessionStore>, ledger: Arc<StakeLedger>) -> Self {
        Self::new(sessions, ledger)
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    // Path segments share one parameter name so the routes do not conflict.
    Router::new()
        .route("/health", get(handler::health))
        .route("/{id}/session", get(handler::session))
        .route("/{id}/stake", post(handler::stake))
        .route("/{id}/highstakes", get(handler::high_stakes))
        .fallback(handler::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
