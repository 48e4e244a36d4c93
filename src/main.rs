//! Lifeboat - Main Entry Point
//!
//! Titanic survival classification pipeline with a small CLI.

use clap::Parser;
use lifeboat::cli::{cmd_inspect, cmd_run, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifeboat=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data,
            train_fraction,
            seed,
            max_depth,
            output,
        } => {
            cmd_run(&data, train_fraction, seed, max_depth, output.as_deref())?;
        }
        Commands::Inspect { data } => {
            cmd_inspect(&data)?;
        }
    }

    Ok(())
}
