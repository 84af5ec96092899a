//! Standup report records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{Validate, ValidationError, require_text};

/// One submitted daily report, tied to a channel and the chat message it
/// was posted in.
///
/// `id` is `0` until the record has been persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standup {
    pub id: i64,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub username: String,
    pub username_id: String,
    pub comment: String,
    pub channel: String,
    pub channel_id: String,
    /// Timestamp of the originating chat message; unique per channel in practice.
    pub message_ts: String,
}

impl Validate for Standup {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("standup", "username_id", &self.username_id)?;
        require_text("standup", "channel_id", &self.channel_id)?;
        require_text("standup", "message_ts", &self.message_ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Standup {
        Standup {
            username: "bob".to_string(),
            username_id: "U1".to_string(),
            comment: "yesterday: tests, today: docs".to_string(),
            channel: "general".to_string(),
            channel_id: "C1".to_string(),
            message_ts: "1530000000.000100".to_string(),
            ..Standup::default()
        }
    }

    #[test]
    fn test_valid_standup() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty_comment_is_allowed() {
        let standup = Standup {
            comment: String::new(),
            ..sample()
        };
        assert!(standup.validate().is_ok());
    }

    #[test]
    fn test_missing_user_id_rejected() {
        let standup = Standup {
            username_id: String::new(),
            ..sample()
        };
        assert_eq!(
            standup.validate(),
            Err(ValidationError::EmptyField {
                record: "standup",
                field: "username_id"
            })
        );
    }

    #[test]
    fn test_missing_message_ts_rejected() {
        let standup = Standup {
            message_ts: " ".to_string(),
            ..sample()
        };
        assert!(standup.validate().is_err());
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"message_ts\":\"1530000000.000100\""));
        let back: Standup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
