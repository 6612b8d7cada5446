//! Infrastructure configuration modules.

pub mod ledger;
pub mod logging;
pub mod server;
pub mod session;
pub mod settings;

pub use settings::Config;
