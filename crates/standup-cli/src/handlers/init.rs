//! `init` command handler.

use crate::bootstrap::CliContext;

/// Report the database that bootstrap created or opened.
///
/// The schema itself is applied during bootstrap.
pub fn execute(ctx: &CliContext) {
    println!("Database ready at {}", ctx.database_url);
}
