use super::command::{CheckCommand, Cli, Commands};
use super::{check, serve};
use crate::error::Result;

/// Dispatch a parsed command line to its handler.
///
/// # Errors
///
/// Propagates the handler's error.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Serve(args) => serve::execute(args),
        Commands::Check(CheckCommand::Config(arg)) => check::config::execute_config(&arg.config),
    }
}
