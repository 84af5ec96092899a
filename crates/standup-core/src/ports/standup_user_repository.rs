//! Standup user repository port definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::StandupUser;

/// Persistence operations for channel memberships.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StandupUserRepository: Send + Sync {
    /// Insert a new membership and return it with its assigned `id`.
    async fn create(&self, user: StandupUser) -> Result<StandupUser, RepositoryError>;

    /// Update a membership by ID and return the stored row.
    async fn update(&self, user: &StandupUser) -> Result<StandupUser, RepositoryError>;

    /// Find the membership of `username` in the channel with ID `channel_id`.
    async fn find_in_channel(
        &self,
        username: &str,
        channel_id: &str,
    ) -> Result<StandupUser, RepositoryError>;

    /// Find the membership of `username` in the channel named `channel`.
    async fn find_in_channel_name(
        &self,
        username: &str,
        channel: &str,
    ) -> Result<StandupUser, RepositoryError>;

    /// Find any membership of `username`.
    async fn find(&self, username: &str) -> Result<StandupUser, RepositoryError>;

    /// All memberships.
    async fn list(&self) -> Result<Vec<StandupUser>, RepositoryError>;

    /// Memberships of the channel with ID `channel_id`.
    async fn list_by_channel_id(
        &self,
        channel_id: &str,
    ) -> Result<Vec<StandupUser>, RepositoryError>;

    /// Memberships of the channel named `channel`.
    async fn list_by_channel_name(
        &self,
        channel: &str,
    ) -> Result<Vec<StandupUser>, RepositoryError>;

    /// Remove `username` from the channel. Removing a non-member is not an error.
    async fn delete_by_username(
        &self,
        username: &str,
        channel_id: &str,
    ) -> Result<(), RepositoryError>;
}
