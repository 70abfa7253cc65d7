//! Weekly check-in model.

use serde::{Deserialize, Serialize};
use crate::id::{CheckInId, PodId, UserId};
use crate::Time;

/// A member's weekly reflection, numbered with the same quarter-relative
/// weeks as milestones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    /// Unique identifier
    pub id: CheckInId,

    /// Author
    pub user_id: UserId,

    /// Pod the check-in was posted to
    pub pod_id: PodId,

    /// Quarter-relative week
    pub week_number: u32,

    /// General update
    #[serde(default)]
    pub content: String,

    /// What got in the way
    #[serde(default)]
    pub challenges: String,

    /// What went well
    #[serde(default)]
    pub wins: String,

    /// Plan for next week
    #[serde(default)]
    pub next_steps: String,

    /// When created
    pub created_at: Time,
}

impl CheckIn {
    /// Create an empty check-in for `week_number`.
    pub fn new(user_id: UserId, pod_id: PodId, week_number: u32) -> Self {
        Self {
            id: CheckInId::new(),
            user_id,
            pod_id,
            week_number,
            content: String::new(),
            challenges: String::new(),
            wins: String::new(),
            next_steps: String::new(),
            created_at: chrono::Utc::now(),
        }
    }
}
