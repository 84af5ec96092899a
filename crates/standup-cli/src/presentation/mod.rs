//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: handlers fetch records, these functions
//! turn them into text.

pub mod records;
pub mod tables;

pub use records::{
    format_history_table, format_standup_detail, format_standup_table, format_time_table,
    format_user_table, print_json,
};
pub use tables::{print_separator, truncate_string};
