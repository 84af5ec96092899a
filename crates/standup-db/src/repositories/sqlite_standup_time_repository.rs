//! `SQLite` implementation of the `StandupTimeRepository` trait.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use standup_core::{Clock, RepositoryError, StandupTime, StandupTimeRepository};

use super::row_mappers::{
    STANDUP_TIME_SELECT_COLUMNS, format_timestamp, row_to_standup_time, stamp, storage,
};
use super::validate_for_write;

/// `SQLite` implementation of the `StandupTimeRepository` trait.
///
/// Rows are insert-only; changing a channel's time means deleting and
/// creating again.
pub struct SqliteStandupTimeRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteStandupTimeRepository {
    /// Create a new `SQLite` standup time repository.
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl StandupTimeRepository for SqliteStandupTimeRepository {
    async fn create(&self, mut time: StandupTime) -> Result<StandupTime, RepositoryError> {
        validate_for_write(&time, "standup_time")?;

        let now = stamp(self.clock.as_ref());

        let result = sqlx::query(
            "INSERT INTO standup_time (created, channel_id, channel, standuptime) VALUES (?, ?, ?, ?)",
        )
        .bind(format_timestamp(&now))
        .bind(&time.channel_id)
        .bind(&time.channel)
        .bind(time.time)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        time.id = result.last_insert_rowid();
        time.created = now;
        debug!(id = time.id, channel_id = %time.channel_id, time = time.time, "standup time created");
        Ok(time)
    }

    async fn get_by_channel_id(&self, channel_id: &str) -> Result<StandupTime, RepositoryError> {
        let query = format!(
            "SELECT {STANDUP_TIME_SELECT_COLUMNS} FROM standup_time WHERE channel_id = ? ORDER BY id LIMIT 1"
        );

        let row = sqlx::query(&query)
            .bind(channel_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Standup time for channel {channel_id}"))
            })?;

        row_to_standup_time(&row)
    }

    async fn list(&self) -> Result<Vec<StandupTime>, RepositoryError> {
        let query = format!("SELECT {STANDUP_TIME_SELECT_COLUMNS} FROM standup_time ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.iter().map(row_to_standup_time).collect()
    }

    async fn delete(&self, channel_id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM standup_time WHERE channel_id = ?")
            .bind(channel_id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        debug!(channel_id, removed = result.rows_affected(), "standup time deleted");
        Ok(())
    }
}
