//! `history` command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_history_table, print_json};

/// Print the earlier texts of a standup.
///
/// History rows outlive their standup, so a deleted standup can still have
/// entries; an unknown ID simply prints none.
pub async fn execute(ctx: &CliContext, standup_id: i64, json: bool) -> Result<(), CliError> {
    let entries = ctx.repos().edit_history.list_for_standup(standup_id).await?;

    if json {
        return print_json(&entries);
    }
    if entries.is_empty() {
        println!("Standup {standup_id} has no edits.");
        return Ok(());
    }
    print!("{}", format_history_table(&entries));
    Ok(())
}
