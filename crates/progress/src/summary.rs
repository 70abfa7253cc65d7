//! Per-user and per-pod views composed from the primitive aggregations.

use std::collections::BTreeMap;

use podtrack_core::{CheckIn, Milestone, PodId, UserId};
use serde::Serialize;
use tracing::debug;

use crate::breakdown::{progress_by_type, weekly_breakdown, GoalStatusCounts, TypeProgress, WeeklyBreakdown};
use crate::rate::{average_progress, completion_rate, percentage, Percent};
use crate::ranking::{rank_members, MemberStats};
use crate::scope::Scope;
use crate::snapshot::Snapshot;

/// Lifetime totals for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Goals owned
    pub total_goals: usize,
    /// Goals at 100%
    pub completed_goals: usize,
    /// Milestones under those goals
    pub total_milestones: usize,
    /// Completed milestones
    pub completed_milestones: usize,
    /// Completed share of goals
    pub goal_completion_rate: Percent,
    /// Completed share of milestones
    pub milestone_completion_rate: Percent,
}

impl UserSummary {
    /// Totals over everything `user_id` owns in `snapshot`.
    pub fn for_user(snapshot: &Snapshot, user_id: UserId) -> Self {
        let scope = Scope::new().user(user_id);
        let goals = snapshot.goals_in_scope(&scope);
        let milestones = snapshot.milestones_in_scope(&scope);

        let completed_goals = goals.iter().filter(|g| g.is_complete()).count();
        let completed_milestones = milestones.iter().filter(|m| m.is_completed()).count();

        Self {
            total_goals: goals.len(),
            completed_goals,
            total_milestones: milestones.len(),
            completed_milestones,
            goal_completion_rate: completion_rate(goals.iter().copied()),
            milestone_completion_rate: percentage(completed_milestones, milestones.len()),
        }
    }
}

/// A user's view of one quarter and week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Week the breakdown covers
    pub week_number: u32,
    /// Average progress over all of the user's goals in the quarter
    pub average_progress: Percent,
    /// Average progress per goal type
    pub by_type: TypeProgress,
    /// Goals grouped by progress
    pub goal_status: GoalStatusCounts,
    /// The user's milestones for the week
    pub weekly: WeeklyBreakdown,
}

impl Dashboard {
    /// Build the dashboard for `user_id` in `quarter` at `week_number`.
    pub fn for_user(snapshot: &Snapshot, user_id: UserId, quarter: &str, week_number: u32) -> Self {
        let scope = Scope::new().user(user_id).quarter(quarter);
        let goals = snapshot.goals_in_scope(&scope);
        let milestones = snapshot.milestones_in_scope(&scope);

        Self {
            week_number,
            average_progress: average_progress(goals.iter().copied()),
            by_type: progress_by_type(goals.iter().copied()),
            goal_status: GoalStatusCounts::from_goals(goals.iter().copied()),
            weekly: weekly_breakdown(milestones.iter().copied(), week_number),
        }
    }
}

/// Team view for one pod, quarter and week.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodReport<'a> {
    /// Quarter label
    pub quarter: String,
    /// Week the breakdowns cover
    pub week_number: u32,
    /// Completion rate over all members' goals for the quarter
    pub completion_rate: Percent,
    /// Goals grouped by progress
    pub goal_status: GoalStatusCounts,
    /// Pod-wide milestones for the week
    pub weekly: WeeklyBreakdown,
    /// Members ranked by completion rate
    pub members: Vec<MemberStats<'a>>,
}

impl<'a> PodReport<'a> {
    /// Build the report, or `None` if the pod is not in the snapshot.
    pub fn build(snapshot: &'a Snapshot, pod_id: PodId, quarter: &str, week_number: u32) -> Option<Self> {
        let pod = snapshot.pod(pod_id)?;
        let scope = Scope::new().pod(pod_id).quarter(quarter);
        let goals = snapshot.goals_in_scope(&scope);
        let milestones = snapshot.milestones_in_scope(&scope);

        let report = Self {
            quarter: quarter.to_string(),
            week_number,
            completion_rate: completion_rate(goals.iter().copied()),
            goal_status: GoalStatusCounts::from_goals(goals.iter().copied()),
            weekly: weekly_breakdown(milestones.iter().copied(), week_number),
            members: rank_members(pod, snapshot.goals(), snapshot.milestones(), quarter, week_number),
        };

        debug!(
            pod = %pod_id,
            quarter,
            week_number,
            goals = goals.len(),
            completion_rate = report.completion_rate,
            "built pod report"
        );
        Some(report)
    }
}

/// Milestones grouped by week number, weeks ascending.
pub fn milestones_by_week<'a, I>(milestones: I) -> BTreeMap<u32, Vec<&'a Milestone>>
where
    I: IntoIterator<Item = &'a Milestone>,
{
    milestones.into_iter().fold(BTreeMap::new(), |mut acc, milestone| {
        acc.entry(milestone.week_number).or_insert_with(Vec::new).push(milestone);
        acc
    })
}

/// A pod's check-ins for one week, in snapshot order.
pub fn check_ins_for_week(snapshot: &Snapshot, pod_id: PodId, week_number: u32) -> Vec<&CheckIn> {
    snapshot.check_ins_in_scope(&Scope::new().pod(pod_id).week(week_number))
}
