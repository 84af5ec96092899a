//! Channel membership records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{Validate, ValidationError, require_text};

/// A user's membership in a channel's standup rotation.
///
/// Memberships are keyed by `username` plus `channel_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandupUser {
    pub id: i64,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub slack_user_id: String,
    pub username: String,
    pub channel_id: String,
    pub channel: String,
}

impl StandupUser {
    /// Create an unsaved membership for `username` in the given channel.
    pub fn new(
        username: impl Into<String>,
        channel_id: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            channel_id: channel_id.into(),
            channel: channel.into(),
            ..Self::default()
        }
    }

    /// Attach the chat platform's user identifier.
    #[must_use]
    pub fn with_slack_user_id(mut self, slack_user_id: impl Into<String>) -> Self {
        self.slack_user_id = slack_user_id.into();
        self
    }
}

impl Validate for StandupUser {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("standup_user", "username", &self.username)?;
        require_text("standup_user", "channel_id", &self.channel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_valid_without_slack_id() {
        let user = StandupUser::new("bob", "C1", "general");
        assert_eq!(user.id, 0);
        assert!(user.slack_user_id.is_empty());
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_missing_channel_rejected() {
        let user = StandupUser::new("bob", "", "general").with_slack_user_id("U1");
        assert_eq!(
            user.validate(),
            Err(ValidationError::EmptyField {
                record: "standup_user",
                field: "channel_id"
            })
        );
    }
}
