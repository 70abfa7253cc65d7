//! Validation errors raised at the configuration and data boundary.

/// Result type for entity validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Out-of-domain entity or configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Week-start day outside 0 (Sunday) ..= 6 (Saturday)
    #[error("week start day must be between 0 and 6, got {0}")]
    WeekStartDay(u8),

    /// Goal progress above 100
    #[error("goal progress must be between 0 and 100, got {0}")]
    Progress(u8),

    /// Milestone week outside 1..=13
    #[error("milestone week must be between 1 and {max}, got {week}")]
    MilestoneWeek {
        /// Offending week number
        week: u32,
        /// Largest accepted week number
        max: u32,
    },

    /// `completed_at` present without `completed` status, or the reverse
    #[error("milestone {0} has completed_at inconsistent with its status")]
    CompletionMismatch(String),

    /// Quarter label not of the form `Q<1-4> <year>`
    #[error("invalid quarter label: {0:?}")]
    QuarterLabel(String),

    /// Quarter number or year out of range
    #[error("quarter Q{number} {year} is out of range")]
    QuarterRange {
        /// Quarter number as given
        number: u32,
        /// Year as given
        year: i32,
    },

    /// Pod has more members than allowed
    #[error("pod {pod} has {count} members, limit is {max}")]
    TooManyMembers {
        /// Pod identifier
        pod: String,
        /// Member count
        count: usize,
        /// Member cap
        max: usize,
    },
}
