//! Row mapping helpers for `SQLite` queries.
//!
//! Timestamps are stored as fixed-width UTC text so that string comparison
//! in `BETWEEN` matches chronological order.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, SubsecRound, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use standup_core::{
    Clock, RepositoryError, Standup, StandupEditHistory, StandupTime, StandupUser,
};

/// Shared SELECT column list for `standup` queries.
pub const STANDUP_SELECT_COLUMNS: &str =
    "id, created, modified, username, username_id, comment, channel, channel_id, message_ts";

/// Shared SELECT column list for `standup_users` queries.
pub const STANDUP_USER_SELECT_COLUMNS: &str =
    "id, created, modified, slack_user_id, username, channel_id, channel";

/// Shared SELECT column list for `standup_time` queries.
pub const STANDUP_TIME_SELECT_COLUMNS: &str = "id, created, channel_id, channel, standuptime";

/// Shared SELECT column list for `standup_edit_history` queries.
pub const EDIT_HISTORY_SELECT_COLUMNS: &str = "id, created, standup_id, standup_text";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

const LAST_STORABLE_YEAR: i32 = 9999;
const EARLIEST_TEXT: &str = "0000-01-01 00:00:00.000000";
const LATEST_TEXT: &str = "9999-12-31 23:59:59.999999";

/// Current instant from `clock`, at the precision the store keeps.
pub fn stamp(clock: &dyn Clock) -> DateTime<Utc> {
    clock.now().trunc_subsecs(6)
}

/// Format a timestamp for storage or comparison.
///
/// Text order matches time order only for years 0000 through 9999.
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Stored-text bounds for the inclusive period `[start, end]`.
///
/// `start` is rounded up to a whole microsecond so rows stamped just before
/// a sub-microsecond start are excluded. Bounds outside the storable years
/// are clamped. `None` means no stored row can fall in the period.
pub fn period_bounds(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Option<(String, String)> {
    let truncated = start.trunc_subsecs(6);
    let start = if truncated < *start {
        truncated.checked_add_signed(Duration::microseconds(1))?
    } else {
        truncated
    };

    if start.year() > LAST_STORABLE_YEAR || end.year() < 0 {
        return None;
    }

    let start_text = if start.year() < 0 {
        EARLIEST_TEXT.to_string()
    } else {
        format_timestamp(&start)
    };
    let end_text = if end.year() > LAST_STORABLE_YEAR {
        LATEST_TEXT.to_string()
    } else {
        format_timestamp(end)
    };
    Some((start_text, end_text))
}

/// Parse a stored timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .map_err(|e| RepositoryError::Serialization(format!("invalid timestamp {raw:?}: {e}")))
}

/// Map a driver error to the repository error type.
#[allow(clippy::needless_pass_by_value)]
pub fn storage(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name).map_err(storage)
}

fn timestamp_column(row: &SqliteRow, name: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let raw: String = column(row, name)?;
    parse_timestamp(&raw)
}

/// Parse a database row into a `Standup`.
pub fn row_to_standup(row: &SqliteRow) -> Result<Standup, RepositoryError> {
    Ok(Standup {
        id: column(row, "id")?,
        created: timestamp_column(row, "created")?,
        modified: timestamp_column(row, "modified")?,
        username: column(row, "username")?,
        username_id: column(row, "username_id")?,
        comment: column(row, "comment")?,
        channel: column(row, "channel")?,
        channel_id: column(row, "channel_id")?,
        message_ts: column(row, "message_ts")?,
    })
}

/// Parse a database row into a `StandupUser`.
pub fn row_to_standup_user(row: &SqliteRow) -> Result<StandupUser, RepositoryError> {
    Ok(StandupUser {
        id: column(row, "id")?,
        created: timestamp_column(row, "created")?,
        modified: timestamp_column(row, "modified")?,
        slack_user_id: column(row, "slack_user_id")?,
        username: column(row, "username")?,
        channel_id: column(row, "channel_id")?,
        channel: column(row, "channel")?,
    })
}

/// Parse a database row into a `StandupTime`.
pub fn row_to_standup_time(row: &SqliteRow) -> Result<StandupTime, RepositoryError> {
    Ok(StandupTime {
        id: column(row, "id")?,
        created: timestamp_column(row, "created")?,
        channel_id: column(row, "channel_id")?,
        channel: column(row, "channel")?,
        time: column(row, "standuptime")?,
    })
}

/// Parse a database row into a `StandupEditHistory`.
pub fn row_to_edit_history(row: &SqliteRow) -> Result<StandupEditHistory, RepositoryError> {
    Ok(StandupEditHistory {
        id: column(row, "id")?,
        created: timestamp_column(row, "created")?,
        standup_id: column(row, "standup_id")?,
        standup_text: column(row, "standup_text")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use standup_core::ManualClock;

    #[test]
    fn test_timestamp_format_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&whole), "2024-01-02 03:04:05.000000");

        let fractional = whole + chrono::Duration::microseconds(120);
        assert_eq!(format_timestamp(&fractional), "2024-01-02 03:04:05.000120");
        assert!(format_timestamp(&whole) < format_timestamp(&fractional));
    }

    #[test]
    fn test_parse_timestamp_round_trips_stored_text() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap()
            + chrono::Duration::microseconds(999_999);
        let parsed = parse_timestamp(&format_timestamp(&instant)).unwrap();
        assert_eq!(parsed, instant);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }

    #[test]
    fn test_period_start_rounds_up_to_next_microsecond() {
        let whole = Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap();
        let start = whole + chrono::Duration::nanoseconds(500);
        let end = whole + chrono::Duration::seconds(1);

        let (start_text, end_text) = period_bounds(&start, &end).unwrap();
        assert_eq!(start_text, "2024-05-06 09:00:00.000001");
        assert_eq!(end_text, "2024-05-06 09:00:01.000000");

        let (exact, _) = period_bounds(&whole, &end).unwrap();
        assert_eq!(exact, "2024-05-06 09:00:00.000000");
    }

    #[test]
    fn test_period_bounds_outside_storable_years() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let far_future = Utc.with_ymd_and_hms(10_000, 1, 1, 0, 0, 0).unwrap();
        let far_past = Utc.with_ymd_and_hms(-1, 1, 1, 0, 0, 0).unwrap();

        let (start_text, end_text) = period_bounds(&far_past, &far_future).unwrap();
        assert_eq!(start_text, EARLIEST_TEXT);
        assert_eq!(end_text, LATEST_TEXT);

        assert!(period_bounds(&far_future, &far_future).is_none());
        assert!(period_bounds(&far_past, &far_past).is_none());
        assert!(period_bounds(&now, &far_future).is_some());
    }

    #[test]
    fn test_stamp_truncates_to_microseconds() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(1_234_567);
        let clock = ManualClock::new(instant);
        let stamped = stamp(&clock);
        assert_eq!(stamped.timestamp_subsec_nanos(), 1_234_000);
    }
}
