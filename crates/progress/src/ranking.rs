//! Ranked member statistics for team views.

use std::collections::HashSet;

use podtrack_core::{Goal, GoalId, Milestone, Pod, User};
use serde::Serialize;
use tracing::debug;

use crate::breakdown::{weekly_breakdown, WeeklyBreakdown};
use crate::rate::{completion_rate, Percent};

/// One member's standing for a quarter and week.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats<'a> {
    /// The member
    pub member: &'a User,
    /// Goals the member set for the quarter
    pub goals_count: usize,
    /// Share of those goals at 100%
    pub completion_rate: Percent,
    /// Milestones of those goals planned for the week
    pub weekly_breakdown: WeeklyBreakdown,
}

/// Rank `pod`'s members by quarterly goal completion, highest first.
///
/// Each member's weekly breakdown covers milestones whose parent goal is
/// one of that member's goals for `quarter`. Goals from other quarters are
/// left out even when they have milestones in the same week number, since
/// week numbers restart every quarter. Members with equal rates keep their
/// order in the pod's member list.
pub fn rank_members<'a>(
    pod: &'a Pod,
    goals: &[Goal],
    milestones: &[Milestone],
    quarter: &str,
    week_number: u32,
) -> Vec<MemberStats<'a>> {
    let mut stats: Vec<MemberStats<'a>> = pod
        .members
        .iter()
        .map(|member| {
            let member_goals: Vec<&Goal> = goals
                .iter()
                .filter(|g| g.user_id == member.id && g.in_quarter(quarter))
                .collect();
            let goal_ids: HashSet<GoalId> = member_goals.iter().map(|g| g.id).collect();
            let weekly = weekly_breakdown(
                milestones.iter().filter(|m| goal_ids.contains(&m.goal_id)),
                week_number,
            );

            MemberStats {
                member,
                goals_count: member_goals.len(),
                completion_rate: completion_rate(member_goals.iter().copied()),
                weekly_breakdown: weekly,
            }
        })
        .collect();

    // `sort_by` is stable, so ties keep pod order.
    stats.sort_by(|a, b| b.completion_rate.cmp(&a.completion_rate));

    debug!(pod = %pod.id, quarter, week_number, members = stats.len(), "ranked pod members");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fixture, QUARTER};
    use podtrack_core::{GoalType, UserId};

    #[test]
    fn test_rank_members_orders_by_completion() {
        let fx = Fixture::new();
        let snapshot = fx.snapshot();
        let pod = snapshot.pod(fx.pod_id).unwrap();

        let ranked = rank_members(pod, snapshot.goals(), snapshot.milestones(), QUARTER, 3);
        let order: Vec<UserId> = ranked.iter().map(|s| s.member.id).collect();
        assert_eq!(order, vec![fx.ada, fx.ben, fx.cy]);

        assert_eq!(ranked[0].completion_rate, 100);
        assert_eq!(ranked[1].completion_rate, 50);
        assert_eq!(ranked[2].completion_rate, 0);
        assert!(ranked.iter().all(|s| s.goals_count == 2));
    }

    #[test]
    fn test_rank_members_weekly_breakdown_is_quarter_scoped() {
        let fx = Fixture::new();
        let snapshot = fx.snapshot();
        let pod = snapshot.pod(fx.pod_id).unwrap();

        let ranked = rank_members(pod, snapshot.goals(), snapshot.milestones(), QUARTER, 3);
        assert_eq!(
            ranked[0].weekly_breakdown,
            WeeklyBreakdown { total: 2, completed: 2, in_progress: 0, not_started: 0, rate: 100 }
        );
        // Ben's completed milestone on last quarter's goal is not counted.
        assert_eq!(
            ranked[1].weekly_breakdown,
            WeeklyBreakdown { total: 1, completed: 0, in_progress: 1, not_started: 0, rate: 0 }
        );
        assert_eq!(ranked[2].weekly_breakdown.not_started, 1);
    }

    #[test]
    fn test_rank_members_is_non_increasing() {
        let fx = Fixture::new();
        let snapshot = fx.snapshot();
        let pod = snapshot.pod(fx.pod_id).unwrap();

        for week in 1..=12 {
            let ranked = rank_members(pod, snapshot.goals(), snapshot.milestones(), QUARTER, week);
            assert!(ranked
                .windows(2)
                .all(|w| w[0].completion_rate >= w[1].completion_rate));
        }
    }

    #[test]
    fn test_rank_members_ties_keep_member_order() {
        let fx = Fixture::new();
        let snapshot = fx.snapshot();
        let pod = snapshot.pod(fx.pod_id).unwrap();

        // No goals for this quarter: everyone ties at 0.
        let ranked = rank_members(pod, snapshot.goals(), snapshot.milestones(), "Q4 2030", 1);
        let order: Vec<UserId> = ranked.iter().map(|s| s.member.id).collect();
        assert_eq!(order, vec![fx.ada, fx.ben, fx.cy]);
        assert!(ranked.iter().all(|s| s.goals_count == 0 && s.completion_rate == 0));
        assert!(ranked.iter().all(|s| s.weekly_breakdown.rate == 0));
    }

    #[test]
    fn test_rank_members_three_member_pod() {
        let first = User::new("First", "f@example.com");
        let second = User::new("Second", "s@example.com");
        let third = User::new("Third", "t@example.com");
        let mut pod = Pod::new("Trio", first.clone());
        pod.members.push(second.clone());
        pod.members.push(third.clone());

        let goal = |user: &User, progress| {
            let mut goal = Goal::new(user.id, pod.id, "g", GoalType::Work, "Q2 2025");
            goal.progress = progress;
            goal
        };
        // Second averages 100%, the others 50%.
        let goals = vec![
            goal(&first, 100),
            goal(&first, 0),
            goal(&second, 100),
            goal(&second, 100),
            goal(&third, 50),
            goal(&third, 50),
        ];

        let ranked = rank_members(&pod, &goals, &[], "Q2 2025", 1);
        assert_eq!(ranked[0].member.id, second.id);
        assert_eq!(ranked[0].completion_rate, 100);
        assert_eq!(ranked[1].member.id, first.id);
        assert_eq!(ranked[2].member.id, third.id);
    }
}
