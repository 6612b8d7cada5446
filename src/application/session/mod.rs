//! Session issuance, renewal, validation and expiry.

pub mod key;
pub mod store;
pub mod sweeper;

pub use key::KeyGenerator;
pub use store::{SessionStore, DEFAULT_SESSION_TTL};
pub use sweeper::{
    ShutdownOutcome, Sweeper, SweeperHandle, DEFAULT_SHUTDOWN_GRACE, DEFAULT_SWEEP_INTERVAL,
    MIN_SWEEP_INTERVAL,
};
