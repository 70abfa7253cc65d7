//! Week resolution within a quarter.
//!
//! Week 1 begins on the first occurrence of the pod's week-start day on or
//! after the quarter's first day, and week `n` begins `(n - 1) * 7` days
//! later. Only weeks 1 through [`TRACKED_WEEKS`] are reported as the
//! "current" week; dates before week 1 or past week 12 saturate to those
//! bounds.

use chrono::{Datelike, Duration, NaiveDate};
use podtrack_core::{Pod, Quarter, WeekStartDay};
use tracing::trace;

use crate::week::QuarterWeek;

/// Number of weeks tracked per quarter.
pub const TRACKED_WEEKS: u32 = 12;

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// First day of the quarter containing `reference`.
pub fn quarter_start(reference: NaiveDate) -> NaiveDate {
    Quarter::containing(reference).start_date()
}

/// Start of `week_number` in the quarter containing `reference`.
pub fn week_start(reference: NaiveDate, week_number: u32, week_start_day: WeekStartDay) -> NaiveDate {
    QuarterCalendar::for_date(reference, week_start_day).week_start(week_number)
}

/// `Mon D - Mon D` label for `week_number` in the quarter containing `reference`.
pub fn week_date_range(reference: NaiveDate, week_number: u32, week_start_day: WeekStartDay) -> String {
    QuarterCalendar::for_date(reference, week_start_day).week_date_range(week_number)
}

/// Tracked week containing `today`, clamped to `1..=12`.
pub fn current_week_number(today: NaiveDate, week_start_day: WeekStartDay) -> u32 {
    QuarterCalendar::for_date(today, week_start_day).current_week_number(today)
}

/// Weeks `1..=current_week_number(today)` with their spans.
pub fn weeks_elapsed(today: NaiveDate, week_start_day: WeekStartDay) -> Vec<QuarterWeek> {
    QuarterCalendar::for_date(today, week_start_day).weeks_elapsed(today)
}

/// A quarter paired with the week-start day used to number its weeks.
///
/// Build one per pod so every week computation for that pod uses the pod's
/// own setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterCalendar {
    quarter: Quarter,
    week_start_day: WeekStartDay,
    first_week_start: NaiveDate,
}

impl QuarterCalendar {
    /// Calendar for `quarter` with weeks beginning on `week_start_day`.
    pub fn new(quarter: Quarter, week_start_day: WeekStartDay) -> Self {
        let start = quarter.start_date();
        let target = i64::from(week_start_day.value());
        let actual = i64::from(start.weekday().num_days_from_sunday());
        // Roll forward 0-6 days to the first matching weekday.
        let offset = (target - actual).rem_euclid(7);

        Self {
            quarter,
            week_start_day,
            first_week_start: start + Duration::days(offset),
        }
    }

    /// Calendar for the quarter containing `reference`.
    pub fn for_date(reference: NaiveDate, week_start_day: WeekStartDay) -> Self {
        Self::new(Quarter::containing(reference), week_start_day)
    }

    /// Calendar for the quarter containing `reference`, using `pod`'s setting.
    pub fn for_pod(pod: &Pod, reference: NaiveDate) -> Self {
        Self::for_date(reference, pod.settings.week_start_day)
    }

    /// Calendar for the current quarter on the local clock.
    pub fn current(week_start_day: WeekStartDay) -> Self {
        Self::for_date(today(), week_start_day)
    }

    /// The quarter being numbered.
    pub fn quarter(&self) -> Quarter {
        self.quarter
    }

    /// Week-start day in use.
    pub fn week_start_day(&self) -> WeekStartDay {
        self.week_start_day
    }

    /// First day of the quarter.
    pub fn quarter_start(&self) -> NaiveDate {
        self.quarter.start_date()
    }

    /// First day of `week_number` (1-indexed). Week 0 is the week before week 1.
    pub fn week_start(&self, week_number: u32) -> NaiveDate {
        self.first_week_start + Duration::days((i64::from(week_number) - 1) * 7)
    }

    /// Last day of `week_number`.
    pub fn week_end(&self, week_number: u32) -> NaiveDate {
        self.week_start(week_number) + Duration::days(6)
    }

    /// `week_number` with its seven-day span.
    pub fn week(&self, week_number: u32) -> QuarterWeek {
        QuarterWeek {
            number: week_number,
            start: self.week_start(week_number),
            end: self.week_end(week_number),
        }
    }

    /// `Mon D - Mon D` label for `week_number`.
    pub fn week_date_range(&self, week_number: u32) -> String {
        self.week(week_number).date_range()
    }

    /// Unclamped week containing `date`, or `None` before week 1 begins.
    pub fn week_containing(&self, date: NaiveDate) -> Option<u32> {
        let elapsed = (date - self.first_week_start).num_days();
        if elapsed < 0 {
            return None;
        }
        u32::try_from(elapsed / 7 + 1).ok()
    }

    /// Tracked week containing `today`, clamped to `1..=TRACKED_WEEKS`.
    ///
    /// Whole days are counted from week 1's start with `today` itself
    /// included, so the first day of week `n` already reports `n`.
    pub fn current_week_number(&self, today: NaiveDate) -> u32 {
        let elapsed = (today - self.first_week_start).num_days();
        let raw = elapsed.div_euclid(7) + 1;
        let week = raw.clamp(1, i64::from(TRACKED_WEEKS)) as u32;
        trace!(%today, raw, week, week_start_day = %self.week_start_day, "resolved current week");
        week
    }

    /// Weeks that have begun as of `today`, oldest first.
    pub fn weeks_elapsed(&self, today: NaiveDate) -> Vec<QuarterWeek> {
        (1..=self.current_week_number(today)).map(|n| self.week(n)).collect()
    }

    /// All tracked weeks of the quarter.
    pub fn all_weeks(&self) -> Vec<QuarterWeek> {
        (1..=TRACKED_WEEKS).map(|n| self.week(n)).collect()
    }
}
