//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - One repository trait per record kind, CRUD-focused
//! - Timestamps come from the injected [`Clock`], never from the system directly

pub mod clock;
pub mod edit_history_repository;
pub mod standup_repository;
pub mod standup_time_repository;
pub mod standup_user_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::ValidationError;

// Re-export port traits for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use edit_history_repository::StandupEditHistoryRepository;
pub use standup_repository::StandupRepository;
pub use standup_time_repository::StandupTimeRepository;
pub use standup_user_repository::StandupUserRepository;

#[cfg(test)]
pub use edit_history_repository::MockStandupEditHistoryRepository;
#[cfg(test)]
pub use standup_repository::MockStandupRepository;
#[cfg(test)]
pub use standup_time_repository::MockStandupTimeRepository;
#[cfg(test)]
pub use standup_user_repository::MockStandupUserRepository;

/// Container for all repository trait objects.
///
/// Adapters build one of these at their composition root and hand it to
/// services without exposing the concrete storage backend.
#[derive(Clone)]
pub struct Repos {
    /// Standup reports.
    pub standups: Arc<dyn StandupRepository>,
    /// Channel memberships.
    pub users: Arc<dyn StandupUserRepository>,
    /// Per-channel reminder times.
    pub times: Arc<dyn StandupTimeRepository>,
    /// Edit audit trail.
    pub edit_history: Arc<dyn StandupEditHistoryRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        standups: Arc<dyn StandupRepository>,
        users: Arc<dyn StandupUserRepository>,
        times: Arc<dyn StandupTimeRepository>,
        edit_history: Arc<dyn StandupEditHistoryRepository>,
    ) -> Self {
        Self {
            standups,
            users,
            times,
            edit_history,
        }
    }
}

/// Errors returned by repository operations.
///
/// Store failures are carried as their message and are never retried here.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The record failed validation; the store was not touched.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A point lookup matched no row.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (connectivity, constraint violation, ...).
    ///
    /// Carries the driver's message verbatim; the driver error kind is not kept.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Whether this error is a point lookup miss.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
