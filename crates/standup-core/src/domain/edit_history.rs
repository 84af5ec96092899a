//! Standup edit audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{Validate, ValidationError, require_positive};

/// Snapshot of a standup's text taken right before it was edited.
///
/// Write-once: rows are appended and never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandupEditHistory {
    pub id: i64,
    pub created: DateTime<Utc>,
    pub standup_id: i64,
    pub standup_text: String,
}

impl StandupEditHistory {
    pub fn new(standup_id: i64, standup_text: impl Into<String>) -> Self {
        Self {
            standup_id,
            standup_text: standup_text.into(),
            ..Self::default()
        }
    }
}

impl Validate for StandupEditHistory {
    fn validate(&self) -> Result<(), ValidationError> {
        require_positive("standup_edit_history", "standup_id", self.standup_id)
    }
}
