//! Request handlers.
//!
//! Handlers parse raw path, query and body values, run the checks that must
//! precede authentication, and delegate to the ports held in [`AppState`].

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::response::ApiError;
use super::AppState;
use crate::domain::{BettingError, CustomerId, MarketId, Stake};
use crate::port::inbound::SessionService;

/// Query string accepted by the stake endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct StakeQuery {
    pub sessionkey: Option<String>,
}

/// `GET /{customerId}/session`: the customer's session key.
pub async fn session(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<String, ApiError> {
    let customer_id = CustomerId::try_from(parse_id("customerId", &raw)?)?;
    let session = state.sessions.create_or_get_session(customer_id);
    Ok(session.key().to_string())
}

/// `POST /{marketId}/stake?sessionkey=KEY`: record a stake.
pub async fn stake(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Query(query): Query<StakeQuery>,
    body: Bytes,
) -> Result<String, ApiError> {
    let market_id = parse_id("marketId", &raw)?;
    MarketId::try_from(market_id)?;
    let stake = parse_stake(&body)?;
    Stake::try_new(stake, state.stakes.max_stake_limit())?;
    let customer_id = authenticate(state.sessions.as_ref(), query.sessionkey.as_deref())?;

    let outcome = state
        .stakes
        .submit_stake(i64::from(customer_id.value()), market_id, stake)?;
    info!(
        customer_id = customer_id.value(),
        market_id,
        stake,
        raised = outcome.is_raised(),
        "Stake submitted"
    );
    Ok(String::new())
}

/// `GET /{marketId}/highstakes`: the market leaderboard as `c=s` pairs.
pub async fn high_stakes(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<String, ApiError> {
    let market_id = parse_id("marketId", &raw)?;
    let entries = state.stakes.top_stakes(market_id)?;
    Ok(entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(","))
}

/// `GET /health`.
pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Resolve a session key to its customer.
///
/// # Errors
///
/// - [`BettingError::MissingParameter`] for an absent or blank key
/// - [`BettingError::InvalidSession`] if the key names no live session
/// - [`BettingError::SessionNotFound`] if no customer is bound to it
pub fn authenticate(
    sessions: &dyn SessionService,
    key: Option<&str>,
) -> Result<CustomerId, BettingError> {
    let key = key
        .filter(|key| !key.trim().is_empty())
        .ok_or(BettingError::MissingParameter { name: "sessionkey" })?;
    if !sessions.validate_session(Some(key)) {
        return Err(BettingError::InvalidSession);
    }
    sessions
        .customer_id(Some(key))
        .ok_or(BettingError::SessionNotFound)
}

fn parse_id(name: &'static str, raw: &str) -> Result<i64, BettingError> {
    raw.parse().map_err(|_| BettingError::InvalidParameterFormat {
        name,
        raw: raw.to_string(),
    })
}

/// Read `stake` from a JSON body, as an integer or a string holding one.
fn parse_stake(body: &[u8]) -> Result<i64, BettingError> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("stake").and_then(stake_value))
        .ok_or(BettingError::MissingParameter { name: "stake" })
}

fn stake_value(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str()?.trim().parse().ok())
}
