//! Percentage helpers shared by every aggregation.
//!
//! All ratios round half up to the nearest integer and treat an empty
//! denominator as 0%.

use podtrack_core::Goal;

/// Whole-number percentage in `0..=100`.
pub type Percent = u8;

/// `round(100 * part / total)`, or 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> Percent {
    if total == 0 {
        return 0;
    }
    let part = part.min(total) as u64;
    let total = total as u64;
    ((200 * part + total) / (2 * total)) as Percent
}

/// Share of goals at 100% progress.
pub fn completion_rate<'a, I>(goals: I) -> Percent
where
    I: IntoIterator<Item = &'a Goal>,
{
    let (completed, total) = goals
        .into_iter()
        .fold((0, 0), |(done, total), goal| (done + usize::from(goal.is_complete()), total + 1));
    percentage(completed, total)
}

/// Mean goal progress, rounded.
pub fn average_progress<'a, I>(goals: I) -> Percent
where
    I: IntoIterator<Item = &'a Goal>,
{
    let (sum, count) = goals
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), goal| (sum + u64::from(goal.progress.min(100)), count + 1));
    if count == 0 {
        return 0;
    }
    ((2 * sum + count) / (2 * count)) as Percent
}
