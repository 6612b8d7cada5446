//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests. Every
//! constructor bypasses the process environment so overrides set by the
//! developer's shell never leak into assertions.

use crate::infrastructure::config::settings::Config;

/// Default configuration, with no environment overrides applied.
///
/// # Panics
///
/// Never in practice: the empty document is always valid.
pub fn defaults() -> Config {
    parse("")
}

/// Parse `toml` with no environment overrides applied.
///
/// # Panics
///
/// Panics if `toml` is not a valid configuration.
pub fn parse(toml: &str) -> Config {
    match Config::parse_toml_with_env(toml, |_| None) {
        Ok(config) => config,
        Err(error) => panic!("invalid test config: {error}"),
    }
}

/// Configuration with short session timings for sweeper and expiry tests.
pub fn fast_sessions(ttl_secs: u64) -> Config {
    parse(&format!(
        "[session]\nttl_secs = {ttl_secs}\nsweep_interval_secs = 1\nshutdown_grace_secs = 1\n"
    ))
}
