//! `SQLite` implementation of the `StandupRepository` trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use standup_core::{Clock, RepositoryError, Standup, StandupRepository};

use super::row_mappers::{
    STANDUP_SELECT_COLUMNS, format_timestamp, period_bounds, row_to_standup, stamp, storage,
};
use super::validate_for_write;

/// `SQLite` implementation of the `StandupRepository` trait.
pub struct SqliteStandupRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteStandupRepository {
    /// Create a new `SQLite` standup repository.
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    async fn fetch_all(
        &self,
        filter: &str,
        binds: &[&str],
    ) -> Result<Vec<Standup>, RepositoryError> {
        let query = format!("SELECT {STANDUP_SELECT_COLUMNS} FROM standup {filter} ORDER BY id");

        let mut q = sqlx::query(&query);
        for value in binds {
            q = q.bind(*value);
        }

        let rows = q.fetch_all(&self.pool).await.map_err(storage)?;
        rows.iter().map(row_to_standup).collect()
    }

    async fn fetch_for_period(
        &self,
        filter_column: Option<(&str, &str)>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Standup>, RepositoryError> {
        let Some((start, end)) = period_bounds(&start, &end) else {
            return Ok(Vec::new());
        };
        match filter_column {
            Some((column, value)) => {
                self.fetch_all(
                    &format!("WHERE {column} = ? AND created BETWEEN ? AND ?"),
                    &[value, start.as_str(), end.as_str()],
                )
                .await
            }
            None => {
                self.fetch_all(
                    "WHERE created BETWEEN ? AND ?",
                    &[start.as_str(), end.as_str()],
                )
                .await
            }
        }
    }
}

#[async_trait]
impl StandupRepository for SqliteStandupRepository {
    async fn create(&self, mut standup: Standup) -> Result<Standup, RepositoryError> {
        validate_for_write(&standup, "standup")?;

        let now = stamp(self.clock.as_ref());
        let now_text = format_timestamp(&now);

        let result = sqlx::query(
            "INSERT INTO standup (created, modified, username, comment, channel, channel_id, username_id, message_ts) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&now_text)
        .bind(&now_text)
        .bind(&standup.username)
        .bind(&standup.comment)
        .bind(&standup.channel)
        .bind(&standup.channel_id)
        .bind(&standup.username_id)
        .bind(&standup.message_ts)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        standup.id = result.last_insert_rowid();
        standup.created = now;
        standup.modified = now;
        debug!(id = standup.id, channel_id = %standup.channel_id, "standup created");
        Ok(standup)
    }

    async fn update(&self, standup: &Standup) -> Result<Standup, RepositoryError> {
        validate_for_write(standup, "standup")?;

        let now = format_timestamp(&stamp(self.clock.as_ref()));
        sqlx::query(
            "UPDATE standup SET modified = ?, username = ?, username_id = ?, comment = ?, channel = ?, channel_id = ?, message_ts = ? WHERE id = ?",
        )
        .bind(&now)
        .bind(&standup.username)
        .bind(&standup.username_id)
        .bind(&standup.comment)
        .bind(&standup.channel)
        .bind(&standup.channel_id)
        .bind(&standup.message_ts)
        .bind(standup.id)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        // Not atomic with the write above
        self.get(standup.id).await
    }

    async fn get(&self, id: i64) -> Result<Standup, RepositoryError> {
        let query = format!("SELECT {STANDUP_SELECT_COLUMNS} FROM standup WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Standup with ID {id}")))?;

        row_to_standup(&row)
    }

    async fn get_by_message_ts(&self, message_ts: &str) -> Result<Standup, RepositoryError> {
        let query = format!(
            "SELECT {STANDUP_SELECT_COLUMNS} FROM standup WHERE message_ts = ? ORDER BY id LIMIT 1"
        );

        let row = sqlx::query(&query)
            .bind(message_ts)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Standup with message ts '{message_ts}'"))
            })?;

        row_to_standup(&row)
    }

    async fn list_by_channel_id(&self, channel_id: &str) -> Result<Vec<Standup>, RepositoryError> {
        self.fetch_all("WHERE channel_id = ?", &[channel_id]).await
    }

    async fn list_by_channel_name_for_period(
        &self,
        channel: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Standup>, RepositoryError> {
        self.fetch_for_period(Some(("channel", channel)), start, end)
            .await
    }

    async fn list_by_channel_id_for_period(
        &self,
        channel_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Standup>, RepositoryError> {
        self.fetch_for_period(Some(("channel_id", channel_id)), start, end)
            .await
    }

    async fn list_by_username_for_period(
        &self,
        username: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Standup>, RepositoryError> {
        self.fetch_for_period(Some(("username", username)), start, end)
            .await
    }

    async fn list(&self) -> Result<Vec<Standup>, RepositoryError> {
        self.fetch_all("", &[]).await
    }

    async fn list_for_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Standup>, RepositoryError> {
        self.fetch_for_period(None, start, end).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM standup WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        Ok(())
    }

    async fn delete_by_username(&self, username: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM standup WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        debug!(username, deleted = result.rows_affected(), "standups deleted");
        Ok(())
    }
}
