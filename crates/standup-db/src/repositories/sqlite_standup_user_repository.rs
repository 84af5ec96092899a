//! `SQLite` implementation of the `StandupUserRepository` trait.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use tracing::debug;

use standup_core::{Clock, RepositoryError, StandupUser, StandupUserRepository};

use super::row_mappers::{
    STANDUP_USER_SELECT_COLUMNS, format_timestamp, row_to_standup_user, stamp, storage,
};
use super::validate_for_write;

/// `SQLite` implementation of the `StandupUserRepository` trait.
pub struct SqliteStandupUserRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteStandupUserRepository {
    /// Create a new `SQLite` standup user repository.
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    async fn fetch_one(
        &self,
        filter: &str,
        binds: &[&str],
        what: impl FnOnce() -> String + Send,
    ) -> Result<StandupUser, RepositoryError> {
        let query = format!(
            "SELECT {STANDUP_USER_SELECT_COLUMNS} FROM standup_users WHERE {filter} ORDER BY id LIMIT 1"
        );

        let mut q = sqlx::query(&query);
        for value in binds {
            q = q.bind(*value);
        }

        let row: SqliteRow = q
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| RepositoryError::NotFound(what()))?;

        row_to_standup_user(&row)
    }

    async fn get(&self, id: i64) -> Result<StandupUser, RepositoryError> {
        let query =
            format!("SELECT {STANDUP_USER_SELECT_COLUMNS} FROM standup_users WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Standup user with ID {id}")))?;

        row_to_standup_user(&row)
    }

    async fn fetch_all(
        &self,
        filter: &str,
        binds: &[&str],
    ) -> Result<Vec<StandupUser>, RepositoryError> {
        let query =
            format!("SELECT {STANDUP_USER_SELECT_COLUMNS} FROM standup_users {filter} ORDER BY id");

        let mut q = sqlx::query(&query);
        for value in binds {
            q = q.bind(*value);
        }

        let rows = q.fetch_all(&self.pool).await.map_err(storage)?;
        rows.iter().map(row_to_standup_user).collect()
    }
}

#[async_trait]
impl StandupUserRepository for SqliteStandupUserRepository {
    async fn create(&self, mut user: StandupUser) -> Result<StandupUser, RepositoryError> {
        validate_for_write(&user, "standup_users")?;

        let now = stamp(self.clock.as_ref());
        let now_text = format_timestamp(&now);

        let result = sqlx::query(
            "INSERT INTO standup_users (created, modified, slack_user_id, username, channel_id, channel) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&now_text)
        .bind(&now_text)
        .bind(&user.slack_user_id)
        .bind(&user.username)
        .bind(&user.channel_id)
        .bind(&user.channel)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        user.id = result.last_insert_rowid();
        user.created = now;
        user.modified = now;
        debug!(id = user.id, username = %user.username, channel_id = %user.channel_id, "standup user created");
        Ok(user)
    }

    async fn update(&self, user: &StandupUser) -> Result<StandupUser, RepositoryError> {
        validate_for_write(user, "standup_users")?;

        let now = format_timestamp(&stamp(self.clock.as_ref()));
        sqlx::query(
            "UPDATE standup_users SET modified = ?, slack_user_id = ?, username = ?, channel_id = ?, channel = ? WHERE id = ?",
        )
        .bind(&now)
        .bind(&user.slack_user_id)
        .bind(&user.username)
        .bind(&user.channel_id)
        .bind(&user.channel)
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        self.get(user.id).await
    }

    async fn find_in_channel(
        &self,
        username: &str,
        channel_id: &str,
    ) -> Result<StandupUser, RepositoryError> {
        self.fetch_one("username = ? AND channel_id = ?", &[username, channel_id], || {
            format!("Standup user '{username}' in channel {channel_id}")
        })
        .await
    }

    async fn find_in_channel_name(
        &self,
        username: &str,
        channel: &str,
    ) -> Result<StandupUser, RepositoryError> {
        self.fetch_one("username = ? AND channel = ?", &[username, channel], || {
            format!("Standup user '{username}' in channel '{channel}'")
        })
        .await
    }

    async fn find(&self, username: &str) -> Result<StandupUser, RepositoryError> {
        self.fetch_one("username = ?", &[username], || {
            format!("Standup user '{username}'")
        })
        .await
    }

    async fn list(&self) -> Result<Vec<StandupUser>, RepositoryError> {
        self.fetch_all("", &[]).await
    }

    async fn list_by_channel_id(
        &self,
        channel_id: &str,
    ) -> Result<Vec<StandupUser>, RepositoryError> {
        self.fetch_all("WHERE channel_id = ?", &[channel_id]).await
    }

    async fn list_by_channel_name(
        &self,
        channel: &str,
    ) -> Result<Vec<StandupUser>, RepositoryError> {
        self.fetch_all("WHERE channel = ?", &[channel]).await
    }

    async fn delete_by_username(
        &self,
        username: &str,
        channel_id: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM standup_users WHERE username = ? AND channel_id = ?")
            .bind(username)
            .bind(channel_id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        Ok(())
    }
}
