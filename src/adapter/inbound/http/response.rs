//! Error-to-response mapping for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::domain::BettingError;

/// A rejected request, rendered as a plain-text error response.
#[derive(Debug)]
pub struct ApiError(pub BettingError);

impl ApiError {
    /// HTTP status for the wrapped error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        status_for(&self.0)
    }
}

/// Map a betting error to its response status.
///
/// Session failures get their own codes; every other rule violation is a
/// bad request.
#[must_use]
pub const fn status_for(error: &BettingError) -> StatusCode {
    match error {
        BettingError::InvalidSession => StatusCode::FORBIDDEN,
        BettingError::SessionNotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    }
}

impl From<BettingError> for ApiError {
    fn from(value: BettingError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(kind = self.0.kind(), status = status.as_u16(), error = %self.0, "Request rejected");
        (status, self.0.to_string()).into_response()
    }
}
