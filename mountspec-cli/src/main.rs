//! Entry point for the mountspec CLI.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Respects RUST_LOG, warnings only by default so stdout stays clean.
    if let Err(e) = tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init()
    {
        eprintln!("[ERROR] Failed to initialize tracing: {}", e);
    }

    let cli = Cli::parse();
    tracing::debug!(runtime = %cli.global.runtime, "mountspec starting");

    match cli.command {
        Commands::Parse(args) => commands::parse::execute(args, &cli.global),
        Commands::Format(args) => commands::format::execute(args, &cli.global),
        Commands::Modes => commands::modes::execute(),
    }
}
