//! Customer sessions.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

use super::id::{CustomerId, SessionKey};

/// Return the current wall-clock time as epoch milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// An authenticated customer session.
///
/// The customer and key are fixed for the session's lifetime. The expiry is
/// updated in place on renewal, so every holder of an `Arc<Session>` observes
/// the new value. A session is live while `now <= expires_at`.
#[derive(Debug)]
pub struct Session {
    customer_id: CustomerId,
    key: SessionKey,
    expires_at_ms: AtomicI64,
}

impl Session {
    /// Create a session expiring at `expires_at_ms` (epoch milliseconds).
    #[must_use]
    pub fn new(customer_id: CustomerId, key: SessionKey, expires_at_ms: i64) -> Self {
        Self {
            customer_id,
            key,
            expires_at_ms: AtomicI64::new(expires_at_ms),
        }
    }

    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    #[must_use]
    pub const fn key(&self) -> &SessionKey {
        &self.key
    }

    /// Expiry as epoch milliseconds.
    #[must_use]
    pub fn expires_at_millis(&self) -> i64 {
        self.expires_at_ms.load(Ordering::Acquire)
    }

    /// Expiry as a UTC timestamp.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.expires_at_millis()).unwrap_or_default()
    }

    /// Return `true` if the session is still valid at `now_ms`.
    #[must_use]
    pub fn is_live_at(&self, now_ms: i64) -> bool {
        now_ms <= self.expires_at_millis()
    }

    /// Return `true` if the session has expired at `now_ms`.
    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        !self.is_live_at(now_ms)
    }

    /// Push the expiry to `now_ms + ttl_ms`, unless the session has already
    /// expired at `now_ms`.
    ///
    /// An expired session is never revived: once a reader has seen it expire,
    /// it stays expired. Concurrent renewals keep the later expiry.
    pub fn try_renew(&self, now_ms: i64, ttl_ms: i64) -> bool {
        let renewed = now_ms.saturating_add(ttl_ms);
        self.expires_at_ms
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (now_ms <= current).then_some(current.max(renewed))
            })
            .is_ok()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session{{customer_id={}, key={}, expires_at={}}}",
            self.customer_id,
            self.key,
            self.expires_at().to_rfc3339()
        )
    }
}
