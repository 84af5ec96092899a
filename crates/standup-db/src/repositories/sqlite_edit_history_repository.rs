//! `SQLite` implementation of the `StandupEditHistoryRepository` trait.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use standup_core::{Clock, RepositoryError, StandupEditHistory, StandupEditHistoryRepository};

use super::row_mappers::{
    EDIT_HISTORY_SELECT_COLUMNS, format_timestamp, row_to_edit_history, stamp, storage,
};
use super::validate_for_write;

/// `SQLite` implementation of the `StandupEditHistoryRepository` trait.
pub struct SqliteEditHistoryRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteEditHistoryRepository {
    /// Create a new `SQLite` edit history repository.
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl StandupEditHistoryRepository for SqliteEditHistoryRepository {
    async fn add(
        &self,
        mut entry: StandupEditHistory,
    ) -> Result<StandupEditHistory, RepositoryError> {
        validate_for_write(&entry, "standup_edit_history")?;

        let now = stamp(self.clock.as_ref());

        // The referenced standup is not checked; history outlives deletes.
        let result = sqlx::query(
            "INSERT INTO standup_edit_history (created, standup_id, standup_text) VALUES (?, ?, ?)",
        )
        .bind(format_timestamp(&now))
        .bind(entry.standup_id)
        .bind(&entry.standup_text)
        .execute(&self.pool)
        .await
        .map_err(storage)?;

        entry.id = result.last_insert_rowid();
        entry.created = now;
        debug!(id = entry.id, standup_id = entry.standup_id, "edit history appended");
        Ok(entry)
    }

    async fn list_for_standup(
        &self,
        standup_id: i64,
    ) -> Result<Vec<StandupEditHistory>, RepositoryError> {
        let query = format!(
            "SELECT {EDIT_HISTORY_SELECT_COLUMNS} FROM standup_edit_history WHERE standup_id = ? ORDER BY id"
        );

        let rows = sqlx::query(&query)
            .bind(standup_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;

        rows.iter().map(row_to_edit_history).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use standup_core::ManualClock;

    use crate::setup::setup_test_database;

    async fn repo() -> (SqliteEditHistoryRepository, Arc<ManualClock>) {
        let pool = setup_test_database().await.unwrap();
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap(),
        ));
        (SqliteEditHistoryRepository::new(pool, clock.clone()), clock)
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_created() {
        let (repo, _) = repo().await;

        let entry = repo
            .add(StandupEditHistory::new(7, "yesterday: nothing"))
            .await
            .unwrap();

        assert!(entry.id > 0);
        assert_eq!(entry.created, Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap());
        assert_eq!(entry.standup_text, "yesterday: nothing");
    }

    #[tokio::test]
    async fn test_list_for_standup_oldest_first() {
        let (repo, clock) = repo().await;

        let first = repo.add(StandupEditHistory::new(7, "v1")).await.unwrap();
        clock.advance(Duration::minutes(5));
        repo.add(StandupEditHistory::new(8, "other")).await.unwrap();
        let second = repo.add(StandupEditHistory::new(7, "v2")).await.unwrap();

        assert_eq!(repo.list_for_standup(7).await.unwrap(), vec![first, second]);
        assert!(repo.list_for_standup(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_text_is_kept() {
        let (repo, _) = repo().await;
        let entry = repo.add(StandupEditHistory::new(3, "")).await.unwrap();
        assert_eq!(repo.list_for_standup(3).await.unwrap(), vec![entry]);
    }

    #[tokio::test]
    async fn test_missing_standup_reference_rejected() {
        let (repo, _) = repo().await;
        let err = repo
            .add(StandupEditHistory::new(0, "text"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Validation(_)));
        assert!(repo.list_for_standup(0).await.unwrap().is_empty());
    }
}
