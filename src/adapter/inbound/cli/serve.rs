//! Handler for the `serve` command.

use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::runtime;

/// Execute the serve command, blocking until the service stops.
pub fn execute(args: &ServeArgs) -> Result<()> {
    let config = resolve_config(args)?;
    config.init_logging();
    info!(config = %args.config.display(), "Stakeboard starting");

    let rt = runtime::build_runtime(&config)?;
    rt.block_on(runtime::run(config))
}

/// Load the config file (or defaults) and apply command-line overrides.
///
/// # Errors
///
/// Returns an error if the file is unreadable or invalid, or if an override
/// produces an invalid configuration.
pub fn resolve_config(args: &ServeArgs) -> Result<Config> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }
    config.validate()?;
    Ok(config)
}
