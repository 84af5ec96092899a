//! CLI entry point - the composition root.
//!
//! Resolves configuration, initialises logging, bootstraps the database
//! and routes the parsed command to its handler.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use standup_core::DatabaseConfig;
use tracing_subscriber::EnvFilter;

use standup_cli::{Cli, CliError, bootstrap, run};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn start(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = DatabaseConfig::from_env(cli.database_url)?;
    let ctx = bootstrap(&config)
        .await
        .map_err(|e| CliError::Database(format!("{e:#}")))?;

    run(&ctx, command).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match start(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
