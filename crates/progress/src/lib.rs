//! Progress aggregation.
//!
//! Completion rates, weekly milestone breakdowns and member rankings over
//! a caller-supplied [`Snapshot`]. Every percentage is an integer in
//! `0..=100`, and an empty denominator yields 0.

#![warn(missing_docs)]

pub mod breakdown;
pub mod error;
pub mod ranking;
pub mod rate;
pub mod scope;
pub mod snapshot;
pub mod summary;

#[cfg(test)]
mod testing;

pub use breakdown::{progress_by_type, weekly_breakdown, GoalStatusCounts, TypeProgress, WeeklyBreakdown};
pub use error::{Result, SnapshotError};
pub use ranking::{rank_members, MemberStats};
pub use rate::{average_progress, completion_rate, percentage, Percent};
pub use scope::{filter_by_scope, Scope, Scoped};
pub use snapshot::{Snapshot, SnapshotData};
pub use summary::{check_ins_for_week, milestones_by_week, Dashboard, PodReport, UserSummary};
