//! Identifier types with proper encapsulation.
//!
//! Raw integers arriving from the transport are converted through
//! `TryFrom<i64>`, which is the single place positivity is enforced. Once a
//! value is a [`CustomerId`] or [`MarketId`] it is known to be valid.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::BettingError;

/// Customer identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(u32);

impl CustomerId {
    /// Create a `CustomerId` without range checks.
    ///
    /// Callers must guarantee `id > 0`.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for CustomerId {
    type Error = BettingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u32::try_from(value) {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(BettingError::InvalidCustomerId { value }),
        }
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Betting market identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MarketId(u32);

impl MarketId {
    /// Create a `MarketId` without range checks.
    ///
    /// Callers must guarantee `id > 0`.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for MarketId {
    type Error = BettingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u32::try_from(value) {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(BettingError::InvalidMarketId { value }),
        }
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session key - a short alphanumeric token identifying a session.
///
/// Example: `"QWER12A"`. The inner String is private so keys are only
/// produced by the key generator or parsed from request input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    /// Create a new `SessionKey` from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the session key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SessionKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::borrow::Borrow<str> for SessionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}
