//! CLI-specific error types and mappings.
//!
//! This module maps core and repository errors to exit codes and
//! user-facing messages.

use standup_core::{ConfigError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument or record validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error (stdout closed, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }
}

impl From<RepositoryError> for CliError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(e) => Self::Arguments(e.to_string()),
            RepositoryError::NotFound(what) => Self::NotFound(what),
            RepositoryError::Storage(msg) => Self::Database(msg),
            RepositoryError::Serialization(msg) => Self::Database(format!("corrupt row: {msg}")),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Core(format!("Failed to render JSON: {err}"))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standup_core::ValidationError;

    #[test]
    fn test_not_found_maps_to_noinput() {
        let err = CliError::from(RepositoryError::NotFound("Standup with ID 4".to_string()));
        assert!(matches!(err, CliError::NotFound(_)));
        assert_eq!(err.exit_code(), 66);
        assert_eq!(err.to_string(), "Not found: Standup with ID 4");
    }

    #[test]
    fn test_validation_maps_to_usage() {
        let validation = ValidationError::EmptyField {
            record: "standup_users",
            field: "username",
        };
        let err = CliError::from(RepositoryError::from(validation));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_and_storage_codes() {
        assert_eq!(CliError::from(ConfigError::NoDataDir).exit_code(), 78);
        assert_eq!(
            CliError::from(RepositoryError::Storage("disk I/O error".to_string())).exit_code(),
            73
        );
    }
}
