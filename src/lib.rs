//! Stakeboard - In-memory betting sessions and per-market stake leaderboards.
//!
//! Customers obtain short-lived session keys, submit stakes on markets, and
//! read each market's highest stakes. All state lives in memory.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Ids, sessions, stakes and the betting error vocabulary
//! - **`port`** - Inbound service traits (`SessionService`, `StakeService`)
//! - **`application`** - The session store with its background sweeper, and
//!   the stake ledger
//! - **`adapter`** - HTTP routes (axum) and the command line (clap)
//! - **`infrastructure`** - Configuration, wiring and the tokio runtime
//!
//! # Features
//!
//! - `testkit` - Expose [`testkit`] helpers to integration tests
//!
//! # Example
//!
//! ```
//! use stakeboard::application::ledger::StakeLedger;
//! use stakeboard::application::session::SessionStore;
//! use stakeboard::domain::CustomerId;
//! use stakeboard::port::{SessionService, StakeService};
//!
//! let sessions = SessionStore::default();
//! let ledger = StakeLedger::default();
//!
//! let session = sessions.create_or_get_session(CustomerId::new(7));
//! assert!(sessions.validate_session(Some(session.key().as_str())));
//!
//! ledger.submit_stake(7, 1, 500).unwrap();
//! let top = ledger.top_stakes(1).unwrap();
//! assert_eq!(top[0].to_string(), "7=500");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
