use std::fmt::Display;
use std::path::Path;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate the configuration file without starting the service.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;

    println!("Configuration Check");
    field("Config", path.display());
    println!("Configuration file is valid");

    for line in summary(&config) {
        println!("{line}");
    }
    for raw in config.ignored_overrides() {
        println!("  warning: ignored malformed override {raw}");
    }
    Ok(())
}

/// Human-readable summary lines for `config`.
pub fn summary(config: &Config) -> Vec<String> {
    vec![
        "Summary".to_string(),
        format_field("Listen", config.server.bind_address()),
        format_field("Workers", config.server.worker_threads),
        format_field("Session TTL", format!("{}s", config.session.ttl_secs)),
        format_field(
            "Sweep interval",
            format!("{}s", config.session.sweep_interval_secs),
        ),
        format_field("Max stake", config.ledger.max_stake),
        format_field("Top limit", config.ledger.top_limit),
        format_field(
            "Logging",
            format!("{} ({})", config.logging.level, config.logging.format),
        ),
    ]
}

fn field(label: &str, value: impl Display) {
    println!("{}", format_field(label, value));
}

fn format_field(label: &str, value: impl Display) -> String {
    format!("  {label:<16}{value}")
}
