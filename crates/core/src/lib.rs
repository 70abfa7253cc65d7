//! Podtrack core data models.
//!
//! This crate defines the entities that the calendar and aggregation
//! crates read: users, pods, quarterly goals, weekly milestones and
//! check-ins. Nothing here performs I/O; entities are owned by whatever
//! data layer supplies them.

#![warn(missing_docs)]

// Identities
mod id;

// Errors
mod error;

// People and groups
mod user;
mod pod;

// Goals and the weekly work under them
mod quarter;
mod goal;
mod milestone;
mod check_in;

// Re-exports
pub use id::*;
pub use error::{ValidationError, Result};

pub use user::User;
pub use pod::{Pod, PodSettings, WeekStartDay};

pub use quarter::Quarter;
pub use goal::{Goal, GoalType};
pub use milestone::{Milestone, MilestoneStatus, MAX_MILESTONE_WEEK};
pub use check_in::CheckIn;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
