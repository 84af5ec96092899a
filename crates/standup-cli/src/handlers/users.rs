//! `users` command handlers.

use standup_core::StandupUser;

use crate::bootstrap::CliContext;
use crate::commands::UsersCommand;
use crate::error::CliError;
use crate::presentation::{format_user_table, print_json};

/// Execute a `users` subcommand.
pub async fn execute(ctx: &CliContext, command: UsersCommand) -> Result<(), CliError> {
    match command {
        UsersCommand::List {
            channel_id,
            channel,
            json,
        } => {
            let users = &ctx.repos().users;
            let members = match (channel_id, channel) {
                (Some(id), _) => users.list_by_channel_id(&id).await?,
                (None, Some(name)) => users.list_by_channel_name(&name).await?,
                (None, None) => users.list().await?,
            };

            if json {
                return print_json(&members);
            }
            if members.is_empty() {
                println!("No members found.");
                return Ok(());
            }
            print!("{}", format_user_table(&members));
            Ok(())
        }
        UsersCommand::Add {
            username,
            channel_id,
            channel,
            slack_user_id,
        } => {
            let mut user = StandupUser::new(username, channel_id, channel);
            if let Some(slack_user_id) = slack_user_id {
                user = user.with_slack_user_id(slack_user_id);
            }
            let member = ctx.service().join_channel(user).await?;
            println!(
                "{} is a member of {} (id {})",
                member.username, member.channel_id, member.id
            );
            Ok(())
        }
        UsersCommand::Remove {
            username,
            channel_id,
        } => {
            ctx.service().leave_channel(&username, &channel_id).await?;
            println!("Removed {username} from {channel_id}");
            Ok(())
        }
    }
}
