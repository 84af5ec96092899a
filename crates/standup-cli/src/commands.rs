//! Main commands enum and subcommands.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and its schema if missing
    Init,

    /// Inspect and maintain standup reports
    Standups {
        #[command(subcommand)]
        command: StandupsCommand,
    },

    /// Manage channel memberships
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },

    /// Manage per-channel reminder times
    Time {
        #[command(subcommand)]
        command: TimeCommand,
    },

    /// Show the edit history of a standup
    History {
        /// ID of the standup
        standup_id: i64,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Standup report commands.
#[derive(Subcommand)]
pub enum StandupsCommand {
    /// List standups, optionally filtered
    List(ListStandupsArgs),
    /// Show one standup
    Show {
        /// ID of the standup
        id: i64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Record a standup by hand
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        username_id: String,
        #[arg(long)]
        channel_id: String,
        #[arg(long)]
        channel: String,
        /// Timestamp of the chat message the report was posted in
        #[arg(long)]
        message_ts: String,
        #[arg(long)]
        comment: String,
    },
    /// Replace the text of a standup, keeping the old text in its history
    Edit {
        /// Timestamp of the chat message the report was posted in
        message_ts: String,
        /// New report text
        comment: String,
    },
    /// Delete one standup
    Delete {
        /// ID of the standup
        id: i64,
    },
    /// Delete every standup of a user
    PurgeUser {
        username: String,
    },
}

/// Filters for `standups list`.
///
/// `--channel` and `--username` can only be combined with a period.
#[derive(Args, Debug, Default)]
pub struct ListStandupsArgs {
    /// Only standups of this channel ID
    #[arg(long, conflicts_with_all = ["channel", "username"])]
    pub channel_id: Option<String>,

    /// Only standups of this channel name
    #[arg(long, conflicts_with = "username", requires = "from")]
    pub channel: Option<String>,

    /// Only standups of this user
    #[arg(long, requires = "from")]
    pub username: Option<String>,

    /// Start of the period, inclusive (RFC 3339)
    #[arg(long, requires = "to")]
    pub from: Option<DateTime<Utc>>,

    /// End of the period, inclusive (RFC 3339)
    #[arg(long, requires = "from")]
    pub to: Option<DateTime<Utc>>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Channel membership commands.
#[derive(Subcommand)]
pub enum UsersCommand {
    /// List memberships
    List {
        /// Only members of this channel ID
        #[arg(long, conflicts_with = "channel")]
        channel_id: Option<String>,
        /// Only members of this channel name
        #[arg(long)]
        channel: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a user to a channel (no-op if already a member)
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        channel_id: String,
        #[arg(long)]
        channel: String,
        #[arg(long)]
        slack_user_id: Option<String>,
    },
    /// Remove a user from a channel
    Remove {
        #[arg(long)]
        username: String,
        #[arg(long)]
        channel_id: String,
    },
}

/// Reminder time commands.
#[derive(Subcommand)]
pub enum TimeCommand {
    /// Show the reminder time of a channel
    Show {
        channel_id: String,
    },
    /// Configure the reminder time of a channel
    Set {
        #[arg(long)]
        channel_id: String,
        #[arg(long)]
        channel: String,
        /// Reminder time value as stored by the bot
        #[arg(long)]
        time: i64,
    },
    /// Turn reminders off for a channel
    Clear {
        channel_id: String,
    },
    /// List all configured reminder times
    List,
}
