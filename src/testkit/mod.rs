//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for ids, sessions and populated ledgers.
//! - [`config`] - Canonical test configurations that ignore the process
//!   environment.

pub mod config;
pub mod domain;
