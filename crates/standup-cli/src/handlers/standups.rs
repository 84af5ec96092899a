//! `standups` command handlers.

use chrono::{DateTime, Utc};
use standup_core::Standup;

use crate::bootstrap::CliContext;
use crate::commands::{ListStandupsArgs, StandupsCommand};
use crate::error::CliError;
use crate::presentation::{format_standup_detail, format_standup_table, print_json};

/// The repository query a `standups list` invocation maps to.
#[derive(Debug, PartialEq, Eq)]
pub enum StandupQuery<'a> {
    All,
    Period(DateTime<Utc>, DateTime<Utc>),
    ChannelId(&'a str),
    ChannelIdPeriod(&'a str, DateTime<Utc>, DateTime<Utc>),
    ChannelNamePeriod(&'a str, DateTime<Utc>, DateTime<Utc>),
    UsernamePeriod(&'a str, DateTime<Utc>, DateTime<Utc>),
}

impl<'a> StandupQuery<'a> {
    /// Pick the query for the given filters.
    pub fn from_args(args: &'a ListStandupsArgs) -> Result<Self, CliError> {
        let period = match (args.from, args.to) {
            (Some(start), Some(end)) if start > end => {
                return Err(CliError::Arguments(format!(
                    "--from ({start}) is after --to ({end})"
                )));
            }
            (Some(start), Some(end)) => Some((start, end)),
            (None, None) => None,
            _ => {
                return Err(CliError::Arguments(
                    "--from and --to must be given together".to_string(),
                ));
            }
        };

        let query = match (
            args.channel_id.as_deref(),
            args.channel.as_deref(),
            args.username.as_deref(),
            period,
        ) {
            (Some(id), None, None, None) => Self::ChannelId(id),
            (Some(id), None, None, Some((start, end))) => Self::ChannelIdPeriod(id, start, end),
            (None, Some(name), None, Some((start, end))) => Self::ChannelNamePeriod(name, start, end),
            (None, None, Some(user), Some((start, end))) => Self::UsernamePeriod(user, start, end),
            (None, None, None, Some((start, end))) => Self::Period(start, end),
            (None, None, None, None) => Self::All,
            (None, Some(_), None, None) | (None, None, Some(_), None) => {
                return Err(CliError::Arguments(
                    "--channel and --username need --from and --to".to_string(),
                ));
            }
            _ => {
                return Err(CliError::Arguments(
                    "use only one of --channel-id, --channel, --username".to_string(),
                ));
            }
        };
        Ok(query)
    }
}

/// Execute a `standups` subcommand.
pub async fn execute(ctx: &CliContext, command: StandupsCommand) -> Result<(), CliError> {
    match command {
        StandupsCommand::List(args) => list(ctx, &args).await,
        StandupsCommand::Show { id, json } => show(ctx, id, json).await,
        StandupsCommand::Add {
            username,
            username_id,
            channel_id,
            channel,
            message_ts,
            comment,
        } => {
            let standup = Standup {
                username,
                username_id,
                comment,
                channel,
                channel_id,
                message_ts,
                ..Standup::default()
            };
            let saved = ctx.service().submit(standup).await?;
            println!("Recorded standup {}", saved.id);
            Ok(())
        }
        StandupsCommand::Edit {
            message_ts,
            comment,
        } => {
            let updated = ctx.service().edit(&message_ts, comment).await?;
            println!("Updated standup {} (previous text kept in history)", updated.id);
            Ok(())
        }
        StandupsCommand::Delete { id } => {
            ctx.repos().standups.delete(id).await?;
            println!("Deleted standup {id}");
            Ok(())
        }
        StandupsCommand::PurgeUser { username } => {
            ctx.repos().standups.delete_by_username(&username).await?;
            println!("Deleted all standups of {username}");
            Ok(())
        }
    }
}

/// Fetch the standups matching `args`.
pub async fn fetch(ctx: &CliContext, args: &ListStandupsArgs) -> Result<Vec<Standup>, CliError> {
    let standups = &ctx.repos().standups;
    let found = match StandupQuery::from_args(args)? {
        StandupQuery::All => standups.list().await?,
        StandupQuery::Period(start, end) => standups.list_for_period(start, end).await?,
        StandupQuery::ChannelId(id) => standups.list_by_channel_id(id).await?,
        StandupQuery::ChannelIdPeriod(id, start, end) => {
            ctx.service().channel_report(id, start, end).await?
        }
        StandupQuery::ChannelNamePeriod(name, start, end) => {
            standups
                .list_by_channel_name_for_period(name, start, end)
                .await?
        }
        StandupQuery::UsernamePeriod(user, start, end) => {
            standups.list_by_username_for_period(user, start, end).await?
        }
    };
    Ok(found)
}

async fn list(ctx: &CliContext, args: &ListStandupsArgs) -> Result<(), CliError> {
    let found = fetch(ctx, args).await?;

    if args.json {
        return print_json(&found);
    }
    if found.is_empty() {
        println!("No standups found.");
        return Ok(());
    }
    println!("Found {} standup(s):\n", found.len());
    print!("{}", format_standup_table(&found));
    Ok(())
}

async fn show(ctx: &CliContext, id: i64, json: bool) -> Result<(), CliError> {
    let standup = ctx.repos().standups.get(id).await?;
    if json {
        return print_json(&standup);
    }
    print!("{}", format_standup_detail(&standup));
    Ok(())
}
