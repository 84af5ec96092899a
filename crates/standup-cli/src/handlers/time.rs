//! `time` command handlers.

use standup_core::StandupTime;

use crate::bootstrap::CliContext;
use crate::commands::TimeCommand;
use crate::error::CliError;
use crate::presentation::format_time_table;

/// Execute a `time` subcommand.
pub async fn execute(ctx: &CliContext, command: TimeCommand) -> Result<(), CliError> {
    match command {
        TimeCommand::Show { channel_id } => {
            let time = ctx.repos().times.get_by_channel_id(&channel_id).await?;
            println!("{} ({}): {}", time.channel, time.channel_id, time.time);
        }
        TimeCommand::Set {
            channel_id,
            channel,
            time,
        } => {
            let saved = ctx
                .service()
                .set_standup_time(StandupTime::new(channel_id, channel, time))
                .await?;
            println!("Reminder for {} set to {}", saved.channel_id, saved.time);
        }
        TimeCommand::Clear { channel_id } => {
            ctx.service().disable_reminders(&channel_id).await?;
            println!("Reminders disabled for {channel_id}");
        }
        TimeCommand::List => {
            let times = ctx.repos().times.list().await?;
            if times.is_empty() {
                println!("No reminder times configured.");
            } else {
                print!("{}", format_time_table(&times));
            }
        }
    }
    Ok(())
}
