#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigError, DatabaseConfig};
pub use domain::{
    Standup, StandupEditHistory, StandupTime, StandupUser, Validate, ValidationError,
};
pub use ports::{
    Clock, ManualClock, Repos, RepositoryError, StandupEditHistoryRepository,
    StandupRepository, StandupTimeRepository, StandupUserRepository, SystemClock,
};
pub use services::StandupService;

#[cfg(test)]
use serde_json as _;
