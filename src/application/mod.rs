//! Application layer: the stateful engines behind the inbound ports.
//!
//! - [`session`] - [`SessionStore`](session::SessionStore) and its background sweeper
//! - [`ledger`] - [`StakeLedger`](ledger::StakeLedger) and per-market books

pub mod ledger;
pub mod session;
