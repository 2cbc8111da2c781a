// src/main.rs

use anyhow::Result;
use clap::Parser;
use selcat::cli::Cli;
use selcat::config::ConfigBuilder;
use selcat::execute;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "selcat=debug".parse()?
                } else {
                    "selcat=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting selcat v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = Cli::parse();

    // --- Configuration & Execution ---
    let config = ConfigBuilder::from_cli(&cli).build()?;
    log::debug!("Configuration built successfully.");

    let outcome = execute(cli.command.mode(), &config, cli.command.paths().to_vec());

    // Every outcome has already been shown to the user; none is a process error.
    log::debug!("Finished: {:?}", outcome);
    Ok(())
}
