//! Tessera CLI: the `tessera` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = support::load_config_or_exit(cli.config.as_deref());
    tracing::debug!(safety_level = %config.assumptions.level, "resolved kernel config");

    match cli.command {
        Commands::Bytes { input } => commands::bytes::run(input, &config, cli.json),
        Commands::Number { value, float } => commands::number::run(value, float, cli.json),
        Commands::Combine { values } => commands::combine::run(values, cli.json),
        Commands::Tags => commands::tags::run(cli.json),
    }
}
