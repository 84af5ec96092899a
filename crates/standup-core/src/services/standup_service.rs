//! Standup service - thin orchestrator over the repository ports.
//!
//! This service covers the multi-step flows the bot needs (editing with an
//! audit snapshot, idempotent channel joins) and otherwise delegates to the
//! repositories.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{Standup, StandupEditHistory, StandupTime, StandupUser};
use crate::ports::{RepositoryError, Repos};

/// Service for standup workflows.
pub struct StandupService {
    repos: Repos,
}

impl StandupService {
    pub const fn new(repos: Repos) -> Self {
        Self { repos }
    }

    /// Access the underlying repositories.
    pub const fn repos(&self) -> &Repos {
        &self.repos
    }

    /// Record a newly submitted standup.
    pub async fn submit(&self, standup: Standup) -> Result<Standup, RepositoryError> {
        let created = self.repos.standups.create(standup).await?;
        info!(id = created.id, channel_id = %created.channel_id, "standup submitted");
        Ok(created)
    }

    /// Replace the comment of the standup posted in message `message_ts`.
    ///
    /// The previous comment is appended to the edit history first. The two
    /// writes are not atomic.
    pub async fn edit(
        &self,
        message_ts: &str,
        new_comment: impl Into<String>,
    ) -> Result<Standup, RepositoryError> {
        let mut standup = self.repos.standups.get_by_message_ts(message_ts).await?;

        let snapshot = StandupEditHistory::new(standup.id, standup.comment.clone());
        self.repos.edit_history.add(snapshot).await?;

        standup.comment = new_comment.into();
        let updated = self.repos.standups.update(&standup).await?;
        debug!(id = updated.id, "standup edited");
        Ok(updated)
    }

    /// Add a user to a channel's rotation.
    ///
    /// Returns the existing membership if the user already belongs to the channel.
    pub async fn join_channel(&self, user: StandupUser) -> Result<StandupUser, RepositoryError> {
        match self
            .repos
            .users
            .find_in_channel(&user.username, &user.channel_id)
            .await
        {
            Ok(existing) => {
                debug!(username = %existing.username, channel_id = %existing.channel_id, "already a member");
                Ok(existing)
            }
            Err(e) if e.is_not_found() => self.repos.users.create(user).await,
            Err(e) => Err(e),
        }
    }

    /// Remove a user from a channel's rotation.
    pub async fn leave_channel(
        &self,
        username: &str,
        channel_id: &str,
    ) -> Result<(), RepositoryError> {
        self.repos.users.delete_by_username(username, channel_id).await
    }

    /// Configure a channel's reminder time.
    ///
    /// Always stores a new row; earlier rows of the channel are left in place.
    pub async fn set_standup_time(
        &self,
        time: StandupTime,
    ) -> Result<StandupTime, RepositoryError> {
        self.repos.times.create(time).await
    }

    /// Turn off reminders for a channel.
    pub async fn disable_reminders(&self, channel_id: &str) -> Result<(), RepositoryError> {
        self.repos.times.delete(channel_id).await
    }

    /// Standups of a channel created within `[start, end]`.
    pub async fn channel_report(
        &self,
        channel_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Standup>, RepositoryError> {
        self.repos
            .standups
            .list_by_channel_id_for_period(channel_id, start, end)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use mockall::predicate::eq;

    use crate::domain::ValidationError;
    use crate::ports::{
        MockStandupEditHistoryRepository, MockStandupRepository, MockStandupTimeRepository,
        MockStandupUserRepository,
    };

    fn stored_standup() -> Standup {
        Standup {
            id: 7,
            username: "bob".to_string(),
            username_id: "U1".to_string(),
            comment: "old".to_string(),
            channel: "general".to_string(),
            channel_id: "C1".to_string(),
            message_ts: "123.456".to_string(),
            ..Standup::default()
        }
    }

    fn service(
        standups: MockStandupRepository,
        users: MockStandupUserRepository,
        history: MockStandupEditHistoryRepository,
    ) -> StandupService {
        StandupService::new(Repos::new(
            Arc::new(standups),
            Arc::new(users),
            Arc::new(MockStandupTimeRepository::new()),
            Arc::new(history),
        ))
    }

    #[tokio::test]
    async fn test_edit_snapshots_old_comment_then_updates() {
        let mut standups = MockStandupRepository::new();
        standups
            .expect_get_by_message_ts()
            .with(eq("123.456"))
            .times(1)
            .returning(|_| Ok(stored_standup()));
        standups
            .expect_update()
            .withf(|s| s.id == 7 && s.comment == "new")
            .times(1)
            .returning(|s| Ok(s.clone()));

        let mut history = MockStandupEditHistoryRepository::new();
        history
            .expect_add()
            .withf(|h| h.standup_id == 7 && h.standup_text == "old")
            .times(1)
            .returning(|mut h| {
                h.id = 1;
                Ok(h)
            });

        let svc = service(standups, MockStandupUserRepository::new(), history);
        let updated = svc.edit("123.456", "new").await.unwrap();
        assert_eq!(updated.comment, "new");
    }

    #[tokio::test]
    async fn test_edit_of_unknown_message_writes_nothing() {
        let mut standups = MockStandupRepository::new();
        standups
            .expect_get_by_message_ts()
            .returning(|ts| Err(RepositoryError::NotFound(format!("standup {ts}"))));
        standups.expect_update().never();

        let mut history = MockStandupEditHistoryRepository::new();
        history.expect_add().never();

        let svc = service(standups, MockStandupUserRepository::new(), history);
        let err = svc.edit("nope", "new").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_edit_stops_when_snapshot_fails() {
        let mut standups = MockStandupRepository::new();
        standups
            .expect_get_by_message_ts()
            .returning(|_| Ok(stored_standup()));
        standups.expect_update().never();

        let mut history = MockStandupEditHistoryRepository::new();
        history.expect_add().returning(|_| {
            Err(RepositoryError::Validation(ValidationError::NotPositive {
                record: "standup_edit_history",
                field: "standup_id",
                value: 0,
            }))
        });

        let svc = service(standups, MockStandupUserRepository::new(), history);
        assert!(matches!(
            svc.edit("123.456", "new").await,
            Err(RepositoryError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_join_channel_returns_existing_membership() {
        let mut users = MockStandupUserRepository::new();
        users
            .expect_find_in_channel()
            .with(eq("bob"), eq("C1"))
            .returning(|u, c| {
                let mut existing = StandupUser::new(u, c, "general");
                existing.id = 3;
                Ok(existing)
            });
        users.expect_create().never();

        let svc = service(
            MockStandupRepository::new(),
            users,
            MockStandupEditHistoryRepository::new(),
        );
        let joined = svc
            .join_channel(StandupUser::new("bob", "C1", "general"))
            .await
            .unwrap();
        assert_eq!(joined.id, 3);
    }

    #[tokio::test]
    async fn test_join_channel_creates_missing_membership() {
        let mut users = MockStandupUserRepository::new();
        users
            .expect_find_in_channel()
            .returning(|u, _| Err(RepositoryError::NotFound(u.to_string())));
        users.expect_create().times(1).returning(|mut u| {
            u.id = 11;
            Ok(u)
        });

        let svc = service(
            MockStandupRepository::new(),
            users,
            MockStandupEditHistoryRepository::new(),
        );
        let joined = svc
            .join_channel(StandupUser::new("bob", "C1", "general"))
            .await
            .unwrap();
        assert_eq!(joined.id, 11);
    }

    #[tokio::test]
    async fn test_join_channel_propagates_storage_errors() {
        let mut users = MockStandupUserRepository::new();
        users
            .expect_find_in_channel()
            .returning(|_, _| Err(RepositoryError::Storage("database is locked".to_string())));
        users.expect_create().never();

        let svc = service(
            MockStandupRepository::new(),
            users,
            MockStandupEditHistoryRepository::new(),
        );
        let err = svc
            .join_channel(StandupUser::new("bob", "C1", "general"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Storage(_)));
    }
}
