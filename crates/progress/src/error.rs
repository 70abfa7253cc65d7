//! Snapshot consistency errors.

use podtrack_core::{GoalId, MilestoneId, ValidationError};

/// Result type for snapshot validation.
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Problems found when checking a snapshot before aggregating over it.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// An entity violates its own invariants
    #[error("invalid {kind} {id}: {source}")]
    Invalid {
        /// Entity kind
        kind: &'static str,
        /// Entity identifier
        id: String,
        /// Underlying violation
        #[source]
        source: ValidationError,
    },

    /// Two entities of the same kind share an identifier
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// Entity kind
        kind: &'static str,
        /// Repeated identifier
        id: String,
    },

    /// A milestone points at a goal the snapshot does not contain
    #[error("milestone {milestone} references unknown goal {goal}")]
    OrphanMilestone {
        /// Milestone identifier
        milestone: MilestoneId,
        /// Missing parent goal
        goal: GoalId,
    },
}
