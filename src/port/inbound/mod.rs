//! Inbound (driving) ports consumed by inbound adapters.
//!
//! The request layer talks to the core only through these traits. Both are
//! synchronous: every operation is in-memory and returns quickly.
//!
//! # Modules
//!
//! - [`session`]: session lifecycle use cases
//! - [`stake`]: stake submission and ranking use cases

pub mod session;
pub mod stake;

pub use session::SessionService;
pub use stake::StakeService;
