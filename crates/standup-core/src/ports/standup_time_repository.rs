//! Standup time repository port definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::StandupTime;

/// Persistence operations for per-channel reminder times.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StandupTimeRepository: Send + Sync {
    /// Insert a reminder time. Existing rows for the channel are kept.
    async fn create(&self, time: StandupTime) -> Result<StandupTime, RepositoryError>;

    /// The reminder time of a channel.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the channel has none. If
    /// the channel was configured more than once, the oldest row wins.
    async fn get_by_channel_id(&self, channel_id: &str) -> Result<StandupTime, RepositoryError>;

    /// Reminder times of all channels.
    async fn list(&self) -> Result<Vec<StandupTime>, RepositoryError>;

    /// Remove every reminder time of a channel.
    async fn delete(&self, channel_id: &str) -> Result<(), RepositoryError>;
}
