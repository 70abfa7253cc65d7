//! Quarter-week calendar.
//!
//! Maps calendar dates onto the twelve tracked weeks of a quarter for a
//! given week-start day. Everything here is pure date arithmetic on whole
//! days; there is no error channel because the week-start day is validated
//! when pod settings are loaded.

#![warn(missing_docs)]

pub mod resolver;
pub mod week;

pub use resolver::{
    current_week_number, quarter_start, today, week_date_range, week_start, weeks_elapsed,
    QuarterCalendar, TRACKED_WEEKS,
};
pub use week::QuarterWeek;
