//! Scoping entity collections by user, pod, quarter and week.

use podtrack_core::{CheckIn, Goal, Milestone, PodId, UserId};

use crate::snapshot::Snapshot;

/// Scope filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    /// Owning user
    pub user_id: Option<UserId>,

    /// Pod, matched through the owner's membership
    pub pod_id: Option<PodId>,

    /// Quarter label
    pub quarter: Option<String>,

    /// Quarter-relative week
    pub week_number: Option<u32>,
}

impl Scope {
    /// A scope matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one user.
    pub fn user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Restrict to one pod.
    pub fn pod(mut self, pod_id: PodId) -> Self {
        self.pod_id = Some(pod_id);
        self
    }

    /// Restrict to one quarter label.
    pub fn quarter(mut self, quarter: impl Into<String>) -> Self {
        self.quarter = Some(quarter.into());
        self
    }

    /// Restrict to one week.
    pub fn week(mut self, week_number: u32) -> Self {
        self.week_number = Some(week_number);
        self
    }

    fn restricts_owner(&self) -> bool {
        self.user_id.is_some() || self.pod_id.is_some() || self.quarter.is_some()
    }
}

/// Something that can be tested against a [`Scope`].
///
/// The snapshot supplies the joins (parent goals, pod membership) an entity
/// cannot answer on its own.
pub trait Scoped {
    /// Whether `self` falls inside `scope`.
    fn in_scope(&self, scope: &Scope, snapshot: &Snapshot) -> bool;
}

impl Scoped for Goal {
    // Goals have no week; a week restriction does not apply to them.
    fn in_scope(&self, scope: &Scope, snapshot: &Snapshot) -> bool {
        if scope.user_id.is_some_and(|user| user != self.user_id) {
            return false;
        }
        if let Some(pod_id) = scope.pod_id {
            let member = snapshot
                .pod(pod_id)
                .is_some_and(|pod| pod.has_member(self.user_id));
            if !member {
                return false;
            }
        }
        if scope.quarter.as_deref().is_some_and(|q| !self.in_quarter(q)) {
            return false;
        }
        true
    }
}

impl Scoped for Milestone {
    fn in_scope(&self, scope: &Scope, snapshot: &Snapshot) -> bool {
        if scope.week_number.is_some_and(|week| week != self.week_number) {
            return false;
        }
        if !scope.restricts_owner() {
            return true;
        }
        snapshot
            .goal(self.goal_id)
            .is_some_and(|goal| goal.in_scope(scope, snapshot))
    }
}

impl Scoped for CheckIn {
    // Check-ins carry their pod directly and have no quarter label.
    fn in_scope(&self, scope: &Scope, _snapshot: &Snapshot) -> bool {
        scope.user_id.map_or(true, |user| user == self.user_id)
            && scope.pod_id.map_or(true, |pod| pod == self.pod_id)
            && scope.week_number.map_or(true, |week| week == self.week_number)
    }
}

/// Items of `items` inside `scope`, in their original order.
pub fn filter_by_scope<'a, T: Scoped>(
    items: &'a [T],
    scope: &Scope,
    snapshot: &Snapshot,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| item.in_scope(scope, snapshot))
        .collect()
}
