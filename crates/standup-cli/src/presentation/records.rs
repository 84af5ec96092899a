//! Text and JSON rendering of stored records.

use std::fmt::Write;

use serde::Serialize;
use standup_core::{Standup, StandupEditHistory, StandupTime, StandupUser};

use super::tables::truncate_string;
use crate::error::CliError;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Print any record (or list of records) as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One line per standup, with a header.
pub fn format_standup_table(standups: &[Standup]) -> String {
    let mut out = format!(
        "{:<6} {:<20} {:<16} {:<16} {:<18} Comment\n",
        "ID", "Created", "User", "Channel", "Message"
    );
    for s in standups {
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:<16} {:<16} {:<18} {}",
            s.id,
            s.created.format(TIME_FORMAT),
            truncate_string(&s.username, 15),
            truncate_string(&s.channel, 15),
            truncate_string(&s.message_ts, 17),
            truncate_string(&s.comment.replace('\n', " "), 40),
        );
    }
    out
}

/// Every field of one standup, comment in full.
pub fn format_standup_detail(s: &Standup) -> String {
    format!(
        "ID:        {}\nCreated:   {}\nModified:  {}\nUser:      {} ({})\nChannel:   {} ({})\nMessage:   {}\n\n{}\n",
        s.id,
        s.created.format(TIME_FORMAT),
        s.modified.format(TIME_FORMAT),
        s.username,
        s.username_id,
        s.channel,
        s.channel_id,
        s.message_ts,
        s.comment,
    )
}

/// One line per membership, with a header.
pub fn format_user_table(users: &[StandupUser]) -> String {
    let mut out = format!(
        "{:<6} {:<20} {:<16} {:<12} {:<16} Slack ID\n",
        "ID", "Added", "User", "Channel ID", "Channel"
    );
    for u in users {
        let slack = if u.slack_user_id.is_empty() {
            "--"
        } else {
            u.slack_user_id.as_str()
        };
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:<16} {:<12} {:<16} {}",
            u.id,
            u.created.format(TIME_FORMAT),
            truncate_string(&u.username, 15),
            truncate_string(&u.channel_id, 11),
            truncate_string(&u.channel, 15),
            slack,
        );
    }
    out
}

/// One line per reminder time, with a header.
pub fn format_time_table(times: &[StandupTime]) -> String {
    let mut out = format!(
        "{:<6} {:<20} {:<12} {:<16} Time\n",
        "ID", "Created", "Channel ID", "Channel"
    );
    for t in times {
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:<12} {:<16} {}",
            t.id,
            t.created.format(TIME_FORMAT),
            truncate_string(&t.channel_id, 11),
            truncate_string(&t.channel, 15),
            t.time,
        );
    }
    out
}

/// Earlier texts of a standup, oldest first.
pub fn format_history_table(entries: &[StandupEditHistory]) -> String {
    let mut out = format!("{:<6} {:<20} Previous text\n", "ID", "Replaced at");
    for e in entries {
        let _ = writeln!(
            out,
            "{:<6} {:<20} {}",
            e.id,
            e.created.format(TIME_FORMAT),
            truncate_string(&e.standup_text.replace('\n', " "), 60),
        );
    }
    out
}
