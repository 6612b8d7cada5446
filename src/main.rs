use clap::Parser;
use stakeboard::adapter::inbound::cli::{command::Cli, dispatch};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    dispatch(&cli)?;
    Ok(())
}
