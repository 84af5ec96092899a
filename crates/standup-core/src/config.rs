//! Database configuration.
//!
//! Resolution order for the database URL:
//! 1. An explicit override (e.g. the CLI `--database-url` flag)
//! 2. `STANDUP_DATABASE_URL` environment variable
//! 3. `standup.db` inside the platform data directory (e.g. `~/.local/share/standup`)

use std::path::PathBuf;

use thiserror::Error;

/// Environment variable holding the database URL.
pub const DATABASE_URL_ENV: &str = "STANDUP_DATABASE_URL";

/// Environment variable holding the pool ceiling.
pub const MAX_CONNECTIONS_ENV: &str = "STANDUP_DB_MAX_CONNECTIONS";

/// Default pool ceiling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// An environment variable holds an unusable value.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Connection settings for the standup database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL, e.g. `sqlite:///var/lib/standup/standup.db`.
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    #[must_use]
    pub const fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Resolve the configuration from the process environment.
    ///
    /// `url_override` takes priority over `STANDUP_DATABASE_URL`.
    pub fn from_env(url_override: Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(url_override, |name| std::env::var(name).ok())
    }

    /// Resolve the configuration using `lookup` to read variables.
    pub fn resolve(
        url_override: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let url = match url_override.or_else(|| lookup(DATABASE_URL_ENV)) {
            Some(url) if !url.trim().is_empty() => url,
            _ => default_database_url()?,
        };

        let max_connections = match lookup(MAX_CONNECTIONS_ENV) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: MAX_CONNECTIONS_ENV,
                        value: raw,
                    });
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}

/// Path of the default database file.
pub fn default_database_path() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(data_dir.join("standup").join("standup.db"))
}

fn default_database_url() -> Result<String, ConfigError> {
    Ok(format!("sqlite://{}", default_database_path()?.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_override_wins_over_env() {
        let config = DatabaseConfig::resolve(
            Some("sqlite::memory:".to_string()),
            env(&[(DATABASE_URL_ENV, "sqlite:///tmp/other.db")]),
        )
        .unwrap();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn test_env_url_and_pool_size() {
        let config = DatabaseConfig::resolve(
            None,
            env(&[
                (DATABASE_URL_ENV, "sqlite:///tmp/standup.db"),
                (MAX_CONNECTIONS_ENV, "12"),
            ]),
        )
        .unwrap();
        assert_eq!(
            config,
            DatabaseConfig::new("sqlite:///tmp/standup.db").with_max_connections(12)
        );
    }

    #[test]
    fn test_invalid_pool_size_rejected() {
        let err = DatabaseConfig::resolve(
            Some("sqlite::memory:".to_string()),
            env(&[(MAX_CONNECTIONS_ENV, "zero")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = DatabaseConfig::resolve(
            Some("sqlite::memory:".to_string()),
            env(&[(MAX_CONNECTIONS_ENV, "0")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_default_path_ends_with_standup_db() {
        if let Ok(path) = default_database_path() {
            assert!(path.ends_with("standup/standup.db"));
        }
    }
}
