//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_edit_history_repository;
mod sqlite_standup_repository;
mod sqlite_standup_time_repository;
mod sqlite_standup_user_repository;

pub use row_mappers::{format_timestamp, parse_timestamp};
pub use sqlite_edit_history_repository::SqliteEditHistoryRepository;
pub use sqlite_standup_repository::SqliteStandupRepository;
pub use sqlite_standup_time_repository::SqliteStandupTimeRepository;
pub use sqlite_standup_user_repository::SqliteStandupUserRepository;

use standup_core::{RepositoryError, Validate};

/// Run a record's validation before a write, logging any failure.
fn validate_for_write<T: Validate>(record: &T, table: &str) -> Result<(), RepositoryError> {
    record.validate().map_err(|e| {
        tracing::error!(table, error = %e, "refusing to write invalid record");
        RepositoryError::Validation(e)
    })
}
