//! Caller-owned, read-only view over one consistent set of entities.

use std::collections::{HashMap, HashSet};

use podtrack_core::{CheckIn, Goal, GoalId, Milestone, Pod, PodId, User, UserId};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapshotError};
use crate::scope::{filter_by_scope, Scope, Scoped};

/// Raw entity collections as supplied by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotData {
    /// Users
    #[serde(default)]
    pub users: Vec<User>,
    /// Pods
    #[serde(default)]
    pub pods: Vec<Pod>,
    /// Goals
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Milestones
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    /// Check-ins
    #[serde(default)]
    pub check_ins: Vec<CheckIn>,
}

/// Immutable entity snapshot with id lookups.
///
/// Aggregations take a snapshot explicitly; nothing reads ambient state.
/// Build a fresh snapshot whenever the underlying data changes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "SnapshotData")]
pub struct Snapshot {
    data: SnapshotData,
    users: HashMap<UserId, usize>,
    pods: HashMap<PodId, usize>,
    goals: HashMap<GoalId, usize>,
}

impl From<SnapshotData> for Snapshot {
    fn from(data: SnapshotData) -> Self {
        Self::new(data)
    }
}

impl Snapshot {
    /// Index `data`. When ids repeat, the last entity wins; see [`Snapshot::validate`].
    pub fn new(data: SnapshotData) -> Self {
        let users = data.users.iter().enumerate().map(|(i, u)| (u.id, i)).collect();
        let pods = data.pods.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
        let goals = data.goals.iter().enumerate().map(|(i, g)| (g.id, i)).collect();
        Self { data, users, pods, goals }
    }

    /// Underlying collections.
    pub fn data(&self) -> &SnapshotData {
        &self.data
    }

    /// All users.
    pub fn users(&self) -> &[User] {
        &self.data.users
    }

    /// All pods.
    pub fn pods(&self) -> &[Pod] {
        &self.data.pods
    }

    /// All goals.
    pub fn goals(&self) -> &[Goal] {
        &self.data.goals
    }

    /// All milestones.
    pub fn milestones(&self) -> &[Milestone] {
        &self.data.milestones
    }

    /// All check-ins.
    pub fn check_ins(&self) -> &[CheckIn] {
        &self.data.check_ins
    }

    /// Look up a user, falling back to pod member lists.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users
            .get(&id)
            .map(|&i| &self.data.users[i])
            .or_else(|| {
                self.data
                    .pods
                    .iter()
                    .flat_map(|pod| pod.members.iter())
                    .find(|member| member.id == id)
            })
    }

    /// Look up a pod.
    pub fn pod(&self, id: PodId) -> Option<&Pod> {
        self.pods.get(&id).map(|&i| &self.data.pods[i])
    }

    /// Look up a goal.
    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.get(&id).map(|&i| &self.data.goals[i])
    }

    /// Filter any scoped collection against this snapshot.
    pub fn filter<'a, T: Scoped>(&self, items: &'a [T], scope: &Scope) -> Vec<&'a T> {
        filter_by_scope(items, scope, self)
    }

    /// Goals inside `scope`.
    pub fn goals_in_scope(&self, scope: &Scope) -> Vec<&Goal> {
        self.filter(&self.data.goals, scope)
    }

    /// Milestones inside `scope`, joined through their parent goals.
    pub fn milestones_in_scope(&self, scope: &Scope) -> Vec<&Milestone> {
        self.filter(&self.data.milestones, scope)
    }

    /// Check-ins inside `scope`.
    pub fn check_ins_in_scope(&self, scope: &Scope) -> Vec<&CheckIn> {
        self.filter(&self.data.check_ins, scope)
    }

    /// Check every entity invariant and cross-reference.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        check_unique("user", self.data.users.iter().map(|u| u.id))?;
        check_unique("pod", self.data.pods.iter().map(|p| p.id))?;
        check_unique("goal", self.data.goals.iter().map(|g| g.id))?;
        check_unique("milestone", self.data.milestones.iter().map(|m| m.id))?;
        check_unique("check-in", self.data.check_ins.iter().map(|c| c.id))?;

        for pod in &self.data.pods {
            pod.validate().map_err(|source| SnapshotError::Invalid {
                kind: "pod",
                id: pod.id.to_string(),
                source,
            })?;
        }

        for goal in &self.data.goals {
            goal.validate().map_err(|source| SnapshotError::Invalid {
                kind: "goal",
                id: goal.id.to_string(),
                source,
            })?;
        }

        for milestone in &self.data.milestones {
            milestone.validate().map_err(|source| SnapshotError::Invalid {
                kind: "milestone",
                id: milestone.id.to_string(),
                source,
            })?;
            if self.goal(milestone.goal_id).is_none() {
                return Err(SnapshotError::OrphanMilestone {
                    milestone: milestone.id,
                    goal: milestone.goal_id,
                });
            }
        }

        Ok(())
    }
}

fn check_unique<I, T>(kind: &'static str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: std::hash::Hash + Eq + std::fmt::Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        let label = id.to_string();
        if !seen.insert(id) {
            return Err(SnapshotError::DuplicateId { kind, id: label });
        }
    }
    Ok(())
}
