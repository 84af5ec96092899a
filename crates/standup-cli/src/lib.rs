#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary entry point
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, bootstrap_with};
pub use commands::{Commands, ListStandupsArgs, StandupsCommand, TimeCommand, UsersCommand};
pub use error::CliError;
pub use parser::Cli;

/// Dispatch a parsed command to its handler.
pub async fn run(ctx: &CliContext, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Init => {
            handlers::init::execute(ctx);
            Ok(())
        }
        Commands::Standups { command } => handlers::standups::execute(ctx, command).await,
        Commands::Users { command } => handlers::users::execute(ctx, command).await,
        Commands::Time { command } => handlers::time::execute(ctx, command).await,
        Commands::History { standup_id, json } => {
            handlers::history::execute(ctx, standup_id, json).await
        }
    }
}
