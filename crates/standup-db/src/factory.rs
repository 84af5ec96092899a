//! Composition utilities for building a `StandupService` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the repositories.
//! It is focused purely on construction and should not contain any domain
//! logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use standup_core::{Clock, DatabaseConfig, Repos, StandupService, SystemClock};

use crate::repositories::{
    SqliteEditHistoryRepository, SqliteStandupRepository, SqliteStandupTimeRepository,
    SqliteStandupUserRepository,
};
use crate::setup::setup_database;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Open the pool described by `config` and ensure the schema exists.
    pub async fn create_pool(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
        setup_database(config).await
    }

    /// Build all `SQLite` repositories from a pool.
    ///
    /// Every repository stamps `created`/`modified` with the same `clock`.
    pub fn build_repos(pool: SqlitePool, clock: Arc<dyn Clock>) -> Repos {
        Repos::new(
            Arc::new(SqliteStandupRepository::new(pool.clone(), clock.clone())),
            Arc::new(SqliteStandupUserRepository::new(pool.clone(), clock.clone())),
            Arc::new(SqliteStandupTimeRepository::new(pool.clone(), clock.clone())),
            Arc::new(SqliteEditHistoryRepository::new(pool, clock)),
        )
    }

    /// Build a `StandupService` backed by the wall clock.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool, Arc::new(SystemClock));
    /// let service = StandupService::new(repos);
    /// ```
    pub fn build_service(pool: SqlitePool) -> StandupService {
        StandupService::new(Self::build_repos(pool, Arc::new(SystemClock)))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema and a
/// manually driven clock.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
    clock: Arc<standup_core::ManualClock>,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database whose clock starts at `start`.
    pub async fn new(start: chrono::DateTime<chrono::Utc>) -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        let clock = Arc::new(standup_core::ManualClock::new(start));
        Ok(Self { pool, clock })
    }

    /// The clock every repository of this database stamps with.
    pub fn clock(&self) -> &standup_core::ManualClock {
        &self.clock
    }

    /// All repositories, sharing this database's clock.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone(), self.clock.clone())
    }

    /// A service over this database.
    pub fn service(&self) -> StandupService {
        StandupService::new(self.repos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use standup_core::{Standup, StandupUser};

    fn standup(comment: &str, message_ts: &str) -> Standup {
        Standup {
            username: "bob".to_string(),
            username_id: "U1".to_string(),
            comment: comment.to_string(),
            channel: "general".to_string(),
            channel_id: "C1".to_string(),
            message_ts: message_ts.to_string(),
            ..Standup::default()
        }
    }

    #[tokio::test]
    async fn test_service_edit_records_history() {
        let db = TestDb::new(Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap())
            .await
            .unwrap();
        let service = db.service();

        let original = service.submit(standup("first draft", "111.1")).await.unwrap();
        db.clock().advance(Duration::minutes(10));
        let edited = service.edit("111.1", "final").await.unwrap();

        assert_eq!(edited.id, original.id);
        assert_eq!(edited.comment, "final");
        assert_eq!(edited.modified, original.created + Duration::minutes(10));

        let history = db
            .repos()
            .edit_history
            .list_for_standup(original.id)
            .await
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].standup_text, "first draft");
    }

    #[tokio::test]
    async fn test_join_channel_twice_keeps_one_membership() {
        let db = TestDb::new(Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap())
            .await
            .unwrap();
        let service = db.service();

        let first = service
            .join_channel(StandupUser::new("bob", "C1", "general"))
            .await
            .unwrap();
        let second = service
            .join_channel(StandupUser::new("bob", "C1", "general"))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(db.repos().users.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_build_service_uses_wall_clock() {
        let pool = crate::setup::setup_test_database().await.unwrap();
        let service = CoreFactory::build_service(pool);

        let before = Utc::now() - Duration::seconds(1);
        let saved = service.submit(standup("hi", "222.2")).await.unwrap();
        assert!(saved.created >= before);
        assert!(saved.created <= Utc::now());
    }
}
