//! Goal model - a quarterly objective owned by one pod member.

use serde::{Deserialize, Serialize};
use crate::error::{Result, ValidationError};
use crate::id::{GoalId, PodId, UserId};
use crate::Time;

/// A goal a member commits to for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Owning user
    pub user_id: UserId,

    /// Pod the goal was created in
    pub pod_id: PodId,

    /// Goal title
    pub title: String,

    /// Detailed description
    #[serde(default)]
    pub description: String,

    /// Life or work goal
    #[serde(rename = "type")]
    pub goal_type: GoalType,

    /// Quarter label, e.g. "Q2 2025"
    pub quarter: String,

    /// Percentage complete (0-100)
    pub progress: u8,

    /// When created
    pub created_at: Time,

    /// When completed
    #[serde(default)]
    pub completed_at: Option<Time>,
}

/// Goal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Personal goal
    Life,
    /// Professional goal
    Work,
}

impl Goal {
    /// Create a new goal with no progress.
    pub fn new(
        user_id: UserId,
        pod_id: PodId,
        title: impl Into<String>,
        goal_type: GoalType,
        quarter: impl Into<String>,
    ) -> Self {
        Self {
            id: GoalId::new(),
            user_id,
            pod_id,
            title: title.into(),
            description: String::new(),
            goal_type,
            quarter: quarter.into(),
            progress: 0,
            created_at: chrono::Utc::now(),
            completed_at: None,
        }
    }

    /// A goal counts as complete only at 100% progress.
    pub fn is_complete(&self) -> bool {
        self.progress == 100
    }

    /// Whether the goal is tracked in the quarter labelled `quarter`.
    pub fn in_quarter(&self, quarter: &str) -> bool {
        self.quarter == quarter
    }

    /// Check that progress is a percentage.
    pub fn validate(&self) -> Result<()> {
        if self.progress > 100 {
            return Err(ValidationError::Progress(self.progress));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_completion() {
        let mut goal = Goal::new(UserId::new(), PodId::new(), "Run", GoalType::Life, "Q2 2025");
        assert!(!goal.is_complete());
        goal.progress = 99;
        assert!(!goal.is_complete());
        goal.progress = 100;
        assert!(goal.is_complete());
        assert!(goal.in_quarter("Q2 2025"));
        assert!(!goal.in_quarter("Q3 2025"));
    }

    #[test]
    fn test_goal_progress_validation() {
        let mut goal = Goal::new(UserId::new(), PodId::new(), "Ship", GoalType::Work, "Q1 2026");
        assert!(goal.validate().is_ok());
        goal.progress = 101;
        assert_eq!(goal.validate(), Err(ValidationError::Progress(101)));
    }

    #[test]
    fn test_goal_type_wire_names() {
        let goal = Goal::new(UserId::new(), PodId::new(), "Read", GoalType::Life, "Q2 2025");
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["type"], "life");
        assert_eq!(json["quarter"], "Q2 2025");
        assert!(json["completedAt"].is_null());
    }
}
