//! In-memory session store.
//!
//! Two concurrent maps back the store: the primary `key -> session` map and
//! a `customer -> key` index. Both are sharded [`DashMap`]s, so operations on
//! different keys rarely contend and no single lock serializes traffic.
//!
//! Lock order is always `customers` before `sessions`. Paths that start from
//! the session side (validation, sweeping) release the session shard before
//! touching the customer index, so the two orders never interleave.

use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::key::KeyGenerator;
use crate::domain::session::now_millis;
use crate::domain::{CustomerId, Session, SessionKey};
use crate::port::inbound::SessionService;

/// Default session lifetime, refreshed on every create-or-get.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(10 * 60);

/// Owns every live session and the customer index over them.
#[derive(Debug)]
pub struct SessionStore {
    /// Primary storage: session key -> session.
    sessions: DashMap<SessionKey, Arc<Session>>,
    /// Customer index: customer id -> key of their current session.
    customers: DashMap<CustomerId, SessionKey>,
    keys: KeyGenerator,
    ttl_ms: i64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    /// Create an empty store whose sessions live for `ttl` after each renewal.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            customers: DashMap::new(),
            keys: KeyGenerator::new(),
            ttl_ms: i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX),
        }
    }

    /// Session lifetime applied on creation and renewal.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms.unsigned_abs())
    }

    /// Number of sessions currently held, live or not yet swept.
    #[must_use]
    pub fn active_session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Remove every session that has expired by now.
    ///
    /// Returns the number of sessions removed.
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(now_millis())
    }

    /// Remove every session that has expired at `now_ms`.
    pub fn sweep_expired_at(&self, now_ms: i64) -> usize {
        let expired: Vec<SessionKey> = self
            .sessions
            .iter()
            .filter(|entry| entry.value().is_expired_at(now_ms))
            .map(|entry| entry.key().clone())
            .collect();

        expired
            .iter()
            .filter(|key| self.evict(key.as_str(), now_ms))
            .count()
    }

    /// Find the live session for `key`, evicting it if it has expired.
    fn lookup(&self, key: Option<&str>) -> Option<Arc<Session>> {
        let key = key.filter(|k| !k.is_empty())?;
        let session = self.sessions.get(key).map(|e| Arc::clone(e.value()))?;

        let now = now_millis();
        if session.is_live_at(now) {
            return Some(session);
        }
        self.evict(key, now);
        None
    }

    /// Remove `key` from both maps if it is still expired at `now_ms`.
    ///
    /// The expiry is re-checked under the shard lock so a concurrent renewal
    /// wins. The customer index entry is only dropped while it still points
    /// at this key.
    fn evict(&self, key: &str, now_ms: i64) -> bool {
        let Some((_, session)) = self
            .sessions
            .remove_if(key, |_, s| s.is_expired_at(now_ms))
        else {
            return false;
        };
        self.customers
            .remove_if(&session.customer_id(), |_, k| k.as_str() == key);
        true
    }

    /// Renew the session registered under `key`, if it is still live and
    /// still belongs to `customer_id`.
    ///
    /// A stale index entry may name a key that was evicted and reissued to
    /// another customer; that session is never handed out.
    fn renew(
        &self,
        customer_id: CustomerId,
        key: &SessionKey,
        now_ms: i64,
    ) -> Option<Arc<Session>> {
        let session = self
            .sessions
            .get(key)
            .map(|e| Arc::clone(e.value()))
            .filter(|session| session.customer_id() == customer_id)?;
        if !session.try_renew(now_ms, self.ttl_ms) {
            return None;
        }
        // An evictor may have removed it between the read and the renewal.
        self.sessions.contains_key(key).then_some(session)
    }

    /// Create and register a session under a fresh key.
    ///
    /// A generated key that collides with a held session is discarded and
    /// regenerated; keys are never reused while still present.
    fn issue(&self, customer_id: CustomerId, now_ms: i64) -> Arc<Session> {
        loop {
            let key = self.keys.generate(now_millis());
            if let Entry::Vacant(slot) = self.sessions.entry(key.clone()) {
                let session = Arc::new(Session::new(
                    customer_id,
                    key,
                    now_ms.saturating_add(self.ttl_ms),
                ));
                slot.insert(Arc::clone(&session));
                return session;
            }
        }
    }
}

impl SessionService for SessionStore {
    fn create_or_get_session(&self, customer_id: CustomerId) -> Arc<Session> {
        let now = now_millis();
        match self.customers.entry(customer_id) {
            Entry::Occupied(mut entry) => {
                if let Some(session) = self.renew(customer_id, entry.get(), now) {
                    return session;
                }
                self.sessions.remove_if(entry.get(), |_, s| {
                    s.customer_id() == customer_id && s.is_expired_at(now)
                });
                let session = self.issue(customer_id, now);
                entry.insert(session.key().clone());
                session
            }
            Entry::Vacant(entry) => {
                let session = self.issue(customer_id, now);
                entry.insert(session.key().clone());
                session
            }
        }
    }

    fn validate_session(&self, key: Option<&str>) -> bool {
        self.lookup(key).is_some()
    }

    fn customer_id(&self, key: Option<&str>) -> Option<CustomerId> {
        self.lookup(key).map(|session| session.customer_id())
    }
}
