//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call the service or a repository
//!   3. Format output for the terminal
//!
//! Handlers should NOT manage database connections.

pub mod history;
pub mod init;
pub mod standups;
pub mod time;
pub mod users;
