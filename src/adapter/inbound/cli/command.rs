//! Command-line interface definitions.
//!
//! Defines the CLI structure for the stakeboard service using `clap`: a
//! `serve` command that runs the HTTP service and `check` commands that
//! validate its inputs without starting it.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// In-memory betting session and stake ranking service
#[derive(Parser, Debug)]
#[command(name = "stakeboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the stakeboard CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service (foreground)
    Serve(ServeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `stakeboard check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(clap::Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for `stakeboard serve`.
#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Path to the configuration file. Defaults apply when it is absent.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override the listener port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}
