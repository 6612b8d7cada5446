//! Betting errors raised when a request violates a domain rule.
//!
//! Every variant is a synchronous, immediate failure raised at the point of
//! validation, before any state is touched. Mapping these to transport-level
//! responses (status codes) is the request layer's job, not the domain's.
//!
//! # Examples
//!
//! ```
//! use stakeboard::domain::error::BettingError;
//! use stakeboard::domain::id::MarketId;
//!
//! let result = MarketId::try_from(0);
//! assert!(matches!(result, Err(BettingError::InvalidMarketId { value: 0 })));
//! ```

use thiserror::Error;

/// Errors that occur when betting invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BettingError {
    /// Customer ids must be positive.
    #[error("invalid customer id: must be positive, got {value}")]
    InvalidCustomerId {
        /// The rejected customer id.
        value: i64,
    },

    /// Market ids must be positive.
    #[error("invalid market id: must be positive, got {value}")]
    InvalidMarketId {
        /// The rejected market id.
        value: i64,
    },

    /// Stakes cannot be negative.
    #[error("invalid stake amount: cannot be negative, got {value}")]
    InvalidStakeAmount {
        /// The rejected stake.
        value: i64,
    },

    /// Stakes cannot exceed the configured ceiling.
    #[error("stake too high: limit is {limit}, got {value}")]
    StakeTooHigh {
        /// The rejected stake.
        value: i64,
        /// The ceiling in force when the stake was rejected.
        limit: u32,
    },

    /// The presented session key is unknown or has expired.
    #[error("invalid session")]
    InvalidSession,

    /// The session validated but no customer is bound to it any more.
    #[error("session not found")]
    SessionNotFound,

    /// A required request parameter was absent.
    #[error("missing required parameter: {name}")]
    MissingParameter {
        /// Name of the missing parameter.
        name: &'static str,
    },

    /// A request parameter was present but could not be parsed.
    #[error("invalid parameter format for {name}: {raw:?}")]
    InvalidParameterFormat {
        /// Name of the malformed parameter.
        name: &'static str,
        /// The raw text that failed to parse.
        raw: String,
    },
}

impl BettingError {
    /// Stable machine-readable name for this error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCustomerId { .. } => "invalid_customer_id",
            Self::InvalidMarketId { .. } => "invalid_market_id",
            Self::InvalidStakeAmount { .. } => "invalid_stake_amount",
            Self::StakeTooHigh { .. } => "stake_too_high",
            Self::InvalidSession => "invalid_session",
            Self::SessionNotFound => "session_not_found",
            Self::MissingParameter { .. } => "missing_parameter",
            Self::InvalidParameterFormat { .. } => "invalid_parameter_format",
        }
    }
}
