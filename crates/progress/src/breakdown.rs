//! Status and category breakdowns.

use podtrack_core::{Goal, GoalType, Milestone, MilestoneStatus};
use serde::Serialize;

use crate::rate::{average_progress, percentage, Percent};

/// Milestone status counts for one week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBreakdown {
    /// Milestones planned for the week
    pub total: usize,
    /// Completed milestones
    pub completed: usize,
    /// Milestones in progress
    pub in_progress: usize,
    /// Everything else (`total - completed - in_progress`)
    pub not_started: usize,
    /// Completed share of `total`
    pub rate: Percent,
}

/// Partition the milestones planned for `week_number` by status.
pub fn weekly_breakdown<'a, I>(milestones: I, week_number: u32) -> WeeklyBreakdown
where
    I: IntoIterator<Item = &'a Milestone>,
{
    let mut total = 0;
    let mut completed = 0;
    let mut in_progress = 0;

    for milestone in milestones.into_iter().filter(|m| m.week_number == week_number) {
        total += 1;
        match milestone.status {
            MilestoneStatus::Completed => completed += 1,
            MilestoneStatus::InProgress => in_progress += 1,
            MilestoneStatus::NotStarted => {}
        }
    }

    WeeklyBreakdown {
        total,
        completed,
        in_progress,
        not_started: total - completed - in_progress,
        rate: percentage(completed, total),
    }
}

/// Goals grouped by how far along they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatusCounts {
    /// All goals counted
    pub total: usize,
    /// Progress 100
    pub completed: usize,
    /// Progress strictly between 0 and 100
    pub in_progress: usize,
    /// Progress 0
    pub not_started: usize,
}

impl GoalStatusCounts {
    /// Count `goals` by progress.
    pub fn from_goals<'a, I>(goals: I) -> Self
    where
        I: IntoIterator<Item = &'a Goal>,
    {
        goals.into_iter().fold(Self::default(), |mut acc, goal| {
            acc.total += 1;
            match goal.progress {
                0 => acc.not_started += 1,
                p if p >= 100 => acc.completed += 1,
                _ => acc.in_progress += 1,
            }
            acc
        })
    }
}

/// Average progress per goal type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeProgress {
    /// Average over life goals
    pub life: Percent,
    /// Average over work goals
    pub work: Percent,
}

/// Average progress split by life/work goal type.
pub fn progress_by_type<'a, I>(goals: I) -> TypeProgress
where
    I: IntoIterator<Item = &'a Goal>,
{
    let (life, work): (Vec<&Goal>, Vec<&Goal>) = goals
        .into_iter()
        .partition(|goal| goal.goal_type == GoalType::Life);

    TypeProgress {
        life: average_progress(life),
        work: average_progress(work),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podtrack_core::{GoalId, PodId, UserId};

    fn milestone(week: u32, status: MilestoneStatus) -> Milestone {
        let mut m = Milestone::new(GoalId::new(), "m", week);
        m.status = status;
        if status == MilestoneStatus::Completed {
            m.completed_at = Some(chrono::Utc::now());
        }
        m
    }

    fn goal(goal_type: GoalType, progress: u8) -> Goal {
        let mut goal = Goal::new(UserId::new(), PodId::new(), "g", goal_type, "Q2 2025");
        goal.progress = progress;
        goal
    }

    #[test]
    fn test_weekly_breakdown_empty() {
        let breakdown = weekly_breakdown(&[] as &[Milestone], 3);
        assert_eq!(breakdown, WeeklyBreakdown::default());
        assert_eq!(breakdown.rate, 0);
    }

    #[test]
    fn test_weekly_breakdown_counts_only_matching_week() {
        let milestones = vec![
            milestone(3, MilestoneStatus::Completed),
            milestone(3, MilestoneStatus::Completed),
            milestone(3, MilestoneStatus::InProgress),
            milestone(3, MilestoneStatus::NotStarted),
            milestone(4, MilestoneStatus::Completed),
        ];

        assert_eq!(
            weekly_breakdown(&milestones, 3),
            WeeklyBreakdown { total: 4, completed: 2, in_progress: 1, not_started: 1, rate: 50 }
        );
        assert_eq!(weekly_breakdown(&milestones, 4).rate, 100);
        assert_eq!(weekly_breakdown(&milestones, 5).total, 0);
    }

    #[test]
    fn test_weekly_breakdown_serializes_camel_case() {
        let breakdown = weekly_breakdown(&[milestone(1, MilestoneStatus::InProgress)], 1);
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["inProgress"], 1);
        assert_eq!(json["notStarted"], 0);
    }

    #[test]
    fn test_goal_status_counts() {
        let goals = vec![
            goal(GoalType::Life, 0),
            goal(GoalType::Life, 35),
            goal(GoalType::Work, 100),
            goal(GoalType::Work, 99),
        ];
        assert_eq!(
            GoalStatusCounts::from_goals(&goals),
            GoalStatusCounts { total: 4, completed: 1, in_progress: 2, not_started: 1 }
        );
    }

    #[test]
    fn test_progress_by_type() {
        let goals = vec![
            goal(GoalType::Life, 20),
            goal(GoalType::Life, 41),
            goal(GoalType::Work, 100),
        ];
        assert_eq!(progress_by_type(&goals), TypeProgress { life: 31, work: 100 });
        assert_eq!(progress_by_type(&[] as &[Goal]), TypeProgress::default());
    }
}
