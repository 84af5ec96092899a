//! Database setup and initialization.
//!
//! This module provides `setup_database()` for opening the `SQLite` pool
//! described by a [`DatabaseConfig`] and making sure the schema exists.

use std::str::FromStr;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use standup_core::DatabaseConfig;
use tracing::{debug, info};

/// Opens the connection pool and ensures the schema exists.
///
/// This function:
/// 1. Parses the connection URL from `config`
/// 2. Creates the database file (and its parent directory) if missing
/// 3. Creates all tables and indexes
///
/// # Example
///
/// ```rust,no_run
/// use standup_core::DatabaseConfig;
/// use standup_db::setup_database;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = DatabaseConfig::new("sqlite:///var/lib/standup/standup.db");
/// let pool = setup_database(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    // In-memory URLs have no parent directory
    if let Some(parent) = options
        .get_filename()
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)?;
    }

    info!(url = %config.url, max_connections = config.max_connections, "opening database");
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool keeps a single long-lived connection so the in-memory database
/// survives for the lifetime of the pool.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times; every statement uses IF NOT EXISTS.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    debug!("creating schema");

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS standup (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created TEXT NOT NULL,
            modified TEXT NOT NULL,
            username TEXT NOT NULL DEFAULT '',
            username_id TEXT NOT NULL,
            comment TEXT NOT NULL DEFAULT '',
            channel TEXT NOT NULL DEFAULT '',
            channel_id TEXT NOT NULL,
            message_ts TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_standup_channel_id ON standup(channel_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_standup_username ON standup(username)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_standup_message_ts ON standup(message_ts)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_standup_created ON standup(created)")
        .execute(pool)
        .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS standup_users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created TEXT NOT NULL,
            modified TEXT NOT NULL,
            slack_user_id TEXT NOT NULL DEFAULT '',
            username TEXT NOT NULL,
            channel_id TEXT NOT NULL,
            channel TEXT NOT NULL DEFAULT ''
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_standup_users_channel ON standup_users(channel_id, username)",
    )
    .execute(pool)
    .await?;

    // No uniqueness on channel_id: configuring a channel twice keeps both rows
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS standup_time (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created TEXT NOT NULL,
            channel_id TEXT NOT NULL,
            channel TEXT NOT NULL DEFAULT '',
            standuptime INTEGER NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_standup_time_channel ON standup_time(channel_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS standup_edit_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created TEXT NOT NULL,
            standup_id INTEGER NOT NULL,
            standup_text TEXT NOT NULL DEFAULT ''
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_edit_history_standup ON standup_edit_history(standup_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_database() {
        let pool = setup_test_database().await.unwrap();

        for table in [
            "standup",
            "standup_users",
            "standup_time",
            "standup_edit_history",
        ] {
            let (count,): (i64,) = sqlx::query_as(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            )
            .bind(table)
            .fetch_one(&pool)
            .await
            .unwrap();
            assert_eq!(count, 1, "missing table {table}");
        }
    }

    #[tokio::test]
    async fn test_create_schema_is_idempotent() {
        let pool = setup_test_database().await.unwrap();
        create_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_setup_database_creates_file_and_parent_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("standup.db");
        let config = DatabaseConfig::new(format!("sqlite://{}", path.display()));

        let pool = setup_database(&config).await.unwrap();
        assert!(path.exists());
        pool.close().await;
    }
}
