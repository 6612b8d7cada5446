//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌──────────────┐        ┌───────────────────────────┐
//!        │ HTTP adapter │──────▶│ SessionService (port)     │◀── SessionStore
//!        │ CLI adapter  │──────▶│ StakeService   (port)     │◀── StakeLedger
//!        └──────────────┘        └───────────────────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`SessionService`] - Session issuance, renewal and validation
//! - [`StakeService`] - Stake submission and leaderboard queries

pub mod inbound;

pub use inbound::{SessionService, StakeService};
