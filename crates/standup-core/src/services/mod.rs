//! Core services.
//!
//! Services orchestrate the repository ports; they never talk to a store
//! directly.

mod standup_service;

pub use standup_service::StandupService;
