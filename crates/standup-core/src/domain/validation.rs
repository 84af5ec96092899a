//! Record validation.
//!
//! Every record kind checks its own fields before it is written. The
//! repositories call [`Validate::validate`] and never touch the store when
//! it fails.

use thiserror::Error;

/// A record field failed its validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty or only whitespace.
    #[error("{record}.{field} cannot be empty")]
    EmptyField {
        record: &'static str,
        field: &'static str,
    },

    /// A numeric field must be greater than zero.
    #[error("{record}.{field} must be positive, got {value}")]
    NotPositive {
        record: &'static str,
        field: &'static str,
        value: i64,
    },
}

/// Self-validation capability shared by all persisted records.
pub trait Validate {
    /// Check the record's fields, returning the first violated rule.
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn require_text(
    record: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { record, field });
    }
    Ok(())
}

pub(crate) const fn require_positive(
    record: &'static str,
    field: &'static str,
    value: i64,
) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive {
            record,
            field,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_whitespace() {
        let err = require_text("standup", "channel_id", "   ").unwrap_err();
        assert_eq!(err.to_string(), "standup.channel_id cannot be empty");
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("standup_time", "time", 9).is_ok());
        let err = require_positive("standup_time", "time", 0).unwrap_err();
        assert_eq!(err.to_string(), "standup_time.time must be positive, got 0");
    }
}
