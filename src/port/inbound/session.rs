//! Session lifecycle port.

use std::sync::Arc;

use crate::domain::{CustomerId, Session};

/// Port for issuing and checking customer sessions.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`); calls arrive
/// concurrently from every request worker.
pub trait SessionService: Send + Sync {
    /// Return the customer's live session, renewing it, or issue a new one.
    ///
    /// `customer_id` is trusted: the caller has already validated it.
    /// Always succeeds.
    fn create_or_get_session(&self, customer_id: CustomerId) -> Arc<Session>;

    /// Return `true` if `key` names a live session.
    ///
    /// An absent or empty key is invalid. Finding an expired session removes
    /// it. Validation does not renew the session.
    fn validate_session(&self, key: Option<&str>) -> bool;

    /// Resolve `key` to the customer bound to it.
    ///
    /// Returns `None` (the "no customer" sentinel) under the same conditions
    /// in which [`validate_session`](Self::validate_session) returns `false`,
    /// with the same lazy removal of expired sessions.
    fn customer_id(&self, key: Option<&str>) -> Option<CustomerId>;
}
