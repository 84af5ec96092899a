//! Edit history repository port definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::StandupEditHistory;

/// Append-only store of standup text snapshots.
///
/// Rows are never updated or deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StandupEditHistoryRepository: Send + Sync {
    /// Append a snapshot and return it with its assigned `id`.
    async fn add(
        &self,
        entry: StandupEditHistory,
    ) -> Result<StandupEditHistory, RepositoryError>;

    /// Snapshots of one standup, oldest first.
    async fn list_for_standup(
        &self,
        standup_id: i64,
    ) -> Result<Vec<StandupEditHistory>, RepositoryError>;
}
