//! Standup repository port definition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::RepositoryError;
use crate::domain::Standup;

/// Persistence operations for standup reports.
///
/// # Design Rules
///
/// - Writes validate the record first and never reach the store on failure
/// - Point lookups return `Err(RepositoryError::NotFound)` when nothing matches
/// - List and period queries return an empty vector when nothing matches
/// - Period bounds are inclusive on both ends and compare against `created`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StandupRepository: Send + Sync {
    /// Insert a new standup.
    ///
    /// Returns the input with its assigned `id` and timestamps.
    async fn create(&self, standup: Standup) -> Result<Standup, RepositoryError>;

    /// Replace the mutable fields of an existing standup and bump `modified`.
    ///
    /// Returns the row as stored after the write.
    async fn update(&self, standup: &Standup) -> Result<Standup, RepositoryError>;

    /// Get a standup by its ID.
    async fn get(&self, id: i64) -> Result<Standup, RepositoryError>;

    /// Get the standup posted in the chat message with timestamp `message_ts`.
    async fn get_by_message_ts(&self, message_ts: &str) -> Result<Standup, RepositoryError>;

    /// All standups of a channel.
    async fn list_by_channel_id(&self, channel_id: &str) -> Result<Vec<Standup>, RepositoryError>;

    /// Standups of a channel, looked up by channel name, created within the period.
    async fn list_by_channel_name_for_period(
        &self,
        channel: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Standup>, RepositoryError>;

    /// Standups of a channel created within the period.
    async fn list_by_channel_id_for_period(
        &self,
        channel_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Standup>, RepositoryError>;

    /// Standups of a user created within the period.
    async fn list_by_username_for_period(
        &self,
        username: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Standup>, RepositoryError>;

    /// All standups.
    async fn list(&self) -> Result<Vec<Standup>, RepositoryError>;

    /// All standups created within the period.
    async fn list_for_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Standup>, RepositoryError>;

    /// Delete a standup by ID. Deleting a missing ID is not an error.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Delete every standup submitted by `username`.
    async fn delete_by_username(&self, username: &str) -> Result<(), RepositoryError>;
}
