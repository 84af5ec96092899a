//! Reminder time records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{Validate, ValidationError, require_positive, require_text};

/// The configured reminder time of a channel.
///
/// Nothing enforces one row per channel; configuring a channel twice
/// stores two rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandupTime {
    pub id: i64,
    pub created: DateTime<Utc>,
    pub channel_id: String,
    pub channel: String,
    pub time: i64,
}

impl StandupTime {
    /// Create an unsaved reminder time for a channel.
    pub fn new(channel_id: impl Into<String>, channel: impl Into<String>, time: i64) -> Self {
        Self {
            channel_id: channel_id.into(),
            channel: channel.into(),
            time,
            ..Self::default()
        }
    }
}

impl Validate for StandupTime {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("standup_time", "channel_id", &self.channel_id)?;
        require_positive("standup_time", "time", self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_time() {
        assert!(StandupTime::new("C1", "general", 9).validate().is_ok());
    }

    #[test]
    fn test_zero_time_rejected() {
        let err = StandupTime::new("C1", "general", 0).validate().unwrap_err();
        assert!(matches!(err, ValidationError::NotPositive { value: 0, .. }));
    }
}
