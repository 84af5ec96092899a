//! Core domain records.
//!
//! These types represent the persisted standup data independent of any
//! storage backend.
//!
//! # Structure
//!
//! - `standup` - submitted daily reports
//! - `standup_user` - channel memberships
//! - `standup_time` - per-channel reminder times
//! - `edit_history` - snapshots of standup text taken before edits
//! - `validation` - the `Validate` capability and its error type

mod edit_history;
mod standup;
mod standup_time;
mod standup_user;
pub mod validation;

pub use edit_history::StandupEditHistory;
pub use standup::Standup;
pub use standup_time::StandupTime;
pub use standup_user::StandupUser;
pub use validation::{Validate, ValidationError};
