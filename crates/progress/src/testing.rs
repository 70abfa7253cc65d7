//! Shared snapshot used by unit tests.

use chrono::Utc;
use podtrack_core::{
    CheckIn, Goal, GoalType, Milestone, MilestoneStatus, Pod, PodId, User, UserId,
};

use crate::snapshot::{Snapshot, SnapshotData};

pub(crate) const QUARTER: &str = "Q2 2025";
pub(crate) const PREVIOUS_QUARTER: &str = "Q1 2025";

/// Pod "Builders" with members Ada, Ben and Cy (in that order), plus Dee who
/// belongs to a second pod.
///
/// Q2 2025 goals: Ada 100/100, Ben 100/0, Cy 50/50. Ben also has a finished
/// Q1 goal. Week 3 milestones: Ada 2 completed, Ben 1 in progress, Cy 1 not
/// started, Dee 1 completed; Ben's Q1 goal has a completed week-3 milestone.
pub(crate) struct Fixture {
    pub data: SnapshotData,
    pub pod_id: PodId,
    pub other_pod_id: PodId,
    pub ada: UserId,
    pub ben: UserId,
    pub cy: UserId,
    pub dee: UserId,
}

impl Fixture {
    pub fn new() -> Self {
        let ada = User::new("Ada", "ada@example.com");
        let ben = User::new("Ben", "ben@example.com");
        let cy = User::new("Cy", "cy@example.com");
        let dee = User::new("Dee", "dee@example.com");

        let mut pod = Pod::new("Builders", ada.clone());
        pod.members.push(ben.clone());
        pod.members.push(cy.clone());
        let other = Pod::new("Runners", dee.clone());

        let (pod_id, other_pod_id) = (pod.id, other.id);
        let (ada_id, ben_id, cy_id, dee_id) = (ada.id, ben.id, cy.id, dee.id);

        let goal = |user: UserId, pod: PodId, title: &str, goal_type, quarter: &str, progress| {
            let mut goal = Goal::new(user, pod, title, goal_type, quarter);
            goal.progress = progress;
            if progress == 100 {
                goal.completed_at = Some(Utc::now());
            }
            goal
        };

        let goals = vec![
            goal(ada_id, pod_id, "ada-life", GoalType::Life, QUARTER, 100),
            goal(ada_id, pod_id, "ada-work", GoalType::Work, QUARTER, 100),
            goal(ben_id, pod_id, "ben-life", GoalType::Life, QUARTER, 100),
            goal(ben_id, pod_id, "ben-work", GoalType::Work, QUARTER, 0),
            goal(ben_id, pod_id, "ben-old", GoalType::Work, PREVIOUS_QUARTER, 100),
            goal(cy_id, pod_id, "cy-life", GoalType::Life, QUARTER, 50),
            goal(cy_id, pod_id, "cy-work", GoalType::Work, QUARTER, 50),
            goal(dee_id, other_pod_id, "dee-work", GoalType::Work, QUARTER, 100),
        ];

        let id_of = |title: &str| {
            goals
                .iter()
                .find(|g| g.title == title)
                .map(|g| g.id)
                .expect("fixture goal exists")
        };
        let milestone = |title: &str, week, status| {
            let mut m = Milestone::new(id_of(title), format!("{title}-w{week}"), week);
            m.status = status;
            if status == MilestoneStatus::Completed {
                m.completed_at = Some(Utc::now());
            }
            m
        };

        let milestones = vec![
            milestone("ada-life", 3, MilestoneStatus::Completed),
            milestone("ada-work", 3, MilestoneStatus::Completed),
            milestone("ada-work", 4, MilestoneStatus::NotStarted),
            milestone("ben-life", 3, MilestoneStatus::InProgress),
            milestone("ben-old", 3, MilestoneStatus::Completed),
            milestone("cy-work", 3, MilestoneStatus::NotStarted),
            milestone("cy-work", 1, MilestoneStatus::Completed),
            milestone("dee-work", 3, MilestoneStatus::Completed),
        ];

        let check_ins = vec![
            CheckIn::new(ada_id, pod_id, 3),
            CheckIn::new(ben_id, pod_id, 3),
            CheckIn::new(ada_id, pod_id, 2),
            CheckIn::new(dee_id, other_pod_id, 3),
        ];

        let data = SnapshotData {
            users: vec![ada, ben, cy, dee],
            pods: vec![pod, other],
            goals,
            milestones,
            check_ins,
        };

        Self {
            data,
            pod_id,
            other_pod_id,
            ada: ada_id,
            ben: ben_id,
            cy: cy_id,
            dee: dee_id,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.data.clone())
    }
}
