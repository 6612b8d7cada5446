//! Transport-agnostic domain types: identifiers, stakes, sessions, errors.

pub mod error;
pub mod id;
pub mod session;
pub mod stake;

pub use error::BettingError;
pub use id::{CustomerId, MarketId, SessionKey};
pub use session::Session;
pub use stake::{RankedStake, Stake, StakeOutcome, DEFAULT_MAX_STAKE, DEFAULT_TOP_LIMIT};
