//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all service settings.
//! Configuration is loaded from a TOML file; the listener port and worker
//! pool size can be overridden from the environment.
//!
//! # Example
//!
//! ```no_run
//! use stakeboard::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::ledger::LedgerConfig;
use super::logging::{LoggingConfig, LOG_FORMATS};
use super::server::ServerConfig;
use super::session::SessionConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding `server.port`.
pub const PORT_ENV: &str = "STAKEBOARD_PORT";

/// Environment variable overriding `server.worker_threads`.
pub const THREAD_POOL_SIZE_ENV: &str = "STAKEBOARD_THREAD_POOL_SIZE";

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub ledger: LedgerConfig,
    pub logging: LoggingConfig,
    /// Environment overrides that could not be parsed. Reported once
    /// logging is up.
    #[serde(skip)]
    ignored_overrides: Vec<String>,
}

impl Config {
    /// Parse configuration from a TOML string.
    ///
    /// Environment overrides are applied after parsing and before
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |name| std::env::var(name).ok())
    }

    /// Parse configuration using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_env<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when it exists, otherwise start from defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for an existing file; defaults still go
    /// through overrides and validation.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(PORT_ENV) {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => self.ignored_overrides.push(format!("{PORT_ENV}={raw}")),
            }
        }
        if let Some(raw) = lookup(THREAD_POOL_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(threads) => self.server.worker_threads = threads,
                Err(_) => self
                    .ignored_overrides
                    .push(format!("{THREAD_POOL_SIZE_ENV}={raw}")),
            }
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(invalid("port", "must be greater than 0"));
        }
        if self.server.worker_threads == 0 {
            return Err(invalid("worker_threads", "must be greater than 0"));
        }
        if self.session.ttl_secs == 0 {
            return Err(invalid("ttl_secs", "must be greater than 0"));
        }
        if self.session.sweep_interval_secs == 0 {
            return Err(invalid("sweep_interval_secs", "must be greater than 0"));
        }
        if self.ledger.max_stake == 0 {
            return Err(invalid("max_stake", "must be greater than 0"));
        }
        if self.ledger.top_limit == 0 {
            return Err(invalid("top_limit", "must be greater than 0"));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(invalid(
                "format",
                &format!("must be one of {}", LOG_FORMATS.join(", ")),
            ));
        }
        Ok(())
    }

    /// Environment overrides that were present but unparseable.
    #[must_use]
    pub fn ignored_overrides(&self) -> &[String] {
        &self.ignored_overrides
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
        for raw in &self.ignored_overrides {
            tracing::warn!(override = %raw, "Ignoring malformed environment override");
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
    .into()
}
