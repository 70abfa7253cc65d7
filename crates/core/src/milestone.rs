//! Milestone model - a weekly step toward a goal.

use serde::{Deserialize, Serialize};
use crate::error::{Result, ValidationError};
use crate::id::{GoalId, MilestoneId};
use crate::Time;

/// Largest week number a milestone may be planned for.
///
/// Quarters span up to 13 weeks even though only the first 12 are tracked
/// by the calendar.
pub const MAX_MILESTONE_WEEK: u32 = 13;

/// A weekly milestone under a goal.
///
/// Milestones carry no pod of their own; they belong to whatever pod their
/// parent goal's owner is a member of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Unique identifier
    pub id: MilestoneId,

    /// Parent goal
    pub goal_id: GoalId,

    /// Title
    pub title: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Quarter-relative week (1-13)
    pub week_number: u32,

    /// Current status
    pub status: MilestoneStatus,

    /// When created
    pub created_at: Time,

    /// Set iff status is `Completed`
    #[serde(default)]
    pub completed_at: Option<Time>,
}

/// Milestone status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    /// Not started
    NotStarted,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

impl MilestoneStatus {
    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::NotStarted => "not-started",
            MilestoneStatus::InProgress => "in-progress",
            MilestoneStatus::Completed => "completed",
        }
    }
}

impl Milestone {
    /// Create a not-started milestone for `week_number`.
    pub fn new(goal_id: GoalId, title: impl Into<String>, week_number: u32) -> Self {
        Self {
            id: MilestoneId::new(),
            goal_id,
            title: title.into(),
            description: String::new(),
            week_number,
            status: MilestoneStatus::NotStarted,
            created_at: chrono::Utc::now(),
            completed_at: None,
        }
    }

    /// Whether the milestone is done.
    pub fn is_completed(&self) -> bool {
        self.status == MilestoneStatus::Completed
    }

    /// Check the week range and the completion timestamp invariant.
    pub fn validate(&self) -> Result<()> {
        if self.week_number == 0 || self.week_number > MAX_MILESTONE_WEEK {
            return Err(ValidationError::MilestoneWeek {
                week: self.week_number,
                max: MAX_MILESTONE_WEEK,
            });
        }
        if self.is_completed() != self.completed_at.is_some() {
            return Err(ValidationError::CompletionMismatch(self.id.to_string()));
        }
        Ok(())
    }
}
