//! A single tracked week.

use chrono::NaiveDate;
use serde::Serialize;

/// One quarter-relative week and its seven-day span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterWeek {
    /// 1-indexed week number
    pub number: u32,
    /// First day of the week
    pub start: NaiveDate,
    /// Last day of the week (start + 6 days)
    pub end: NaiveDate,
}

impl QuarterWeek {
    /// Whether `date` falls inside this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Human-readable span, e.g. `Apr 7 - Apr 13`.
    pub fn date_range(&self) -> String {
        format!("{} - {}", short_date(self.start), short_date(self.end))
    }
}

impl std::fmt::Display for QuarterWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Week {} ({})", self.number, self.date_range())
    }
}

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
