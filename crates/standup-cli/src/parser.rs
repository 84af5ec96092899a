//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for inspecting and maintaining the standup database.
#[derive(Parser)]
#[command(name = "standup")]
#[command(about = "Inspect and maintain the standup database")]
#[command(version)]
pub struct Cli {
    /// Database URL (overrides STANDUP_DATABASE_URL)
    #[arg(long = "database-url", global = true)]
    pub database_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
