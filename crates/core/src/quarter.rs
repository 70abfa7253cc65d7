//! Calendar quarters and their `Q<n> <year>` labels.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::error::{Result, ValidationError};

static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[Qq]([1-4])\s+(-?\d{1,6})\s*$").expect("quarter label pattern is valid")
});

/// A three-month period: Jan-Mar, Apr-Jun, Jul-Sep or Oct-Dec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Quarter {
    year: i32,
    number: u32,
    start: NaiveDate,
    end: NaiveDate,
}

impl Quarter {
    /// Quarter `number` (1-4) of `year`.
    pub fn new(year: i32, number: u32) -> Result<Self> {
        let out_of_range = || ValidationError::QuarterRange { number, year };
        if !(1..=4).contains(&number) {
            return Err(out_of_range());
        }

        let first_month = (number - 1) * 3 + 1;
        let last_month = number * 3;
        // Quarters end on the 31st in Q1 and Q4, on the 30th otherwise.
        let last_day = if number == 1 || number == 4 { 31 } else { 30 };

        let start = NaiveDate::from_ymd_opt(year, first_month, 1).ok_or_else(out_of_range)?;
        let end = NaiveDate::from_ymd_opt(year, last_month, last_day).ok_or_else(out_of_range)?;

        Ok(Self { year, number, start, end })
    }

    /// The quarter containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0() / 3 + 1)
            .expect("every representable date lies in a representable quarter")
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Quarter number, 1-4.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// First day (Jan/Apr/Jul/Oct 1).
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day (Mar 31, Jun 30, Sep 30 or Dec 31).
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside this quarter.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Label in the form `Q2 2025`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{} {}", self.number, self.year)
    }
}

impl FromStr for Quarter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = LABEL
            .captures(s)
            .ok_or_else(|| ValidationError::QuarterLabel(s.to_string()))?;
        let number: u32 = caps[1]
            .parse()
            .map_err(|_| ValidationError::QuarterLabel(s.to_string()))?;
        let year: i32 = caps[2]
            .parse()
            .map_err(|_| ValidationError::QuarterLabel(s.to_string()))?;
        Self::new(year, number)
    }
}

impl TryFrom<String> for Quarter {
    type Error = ValidationError;

    fn try_from(label: String) -> Result<Self> {
        label.parse()
    }
}

impl From<Quarter> for String {
    fn from(quarter: Quarter) -> String {
        quarter.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_containing_maps_months_to_quarters() {
        assert_eq!(Quarter::containing(date(2025, 1, 1)).number(), 1);
        assert_eq!(Quarter::containing(date(2025, 3, 31)).number(), 1);
        assert_eq!(Quarter::containing(date(2025, 4, 1)).number(), 2);
        assert_eq!(Quarter::containing(date(2025, 9, 30)).number(), 3);
        assert_eq!(Quarter::containing(date(2025, 12, 31)).number(), 4);
    }

    #[test]
    fn test_quarter_bounds() {
        let q2 = Quarter::new(2025, 2).unwrap();
        assert_eq!(q2.start_date(), date(2025, 4, 1));
        assert_eq!(q2.end_date(), date(2025, 6, 30));
        assert!(q2.contains(date(2025, 5, 15)));
        assert!(!q2.contains(date(2025, 7, 1)));

        let q4 = Quarter::new(2024, 4).unwrap();
        assert_eq!(q4.end_date(), date(2024, 12, 31));
    }

    #[test]
    fn test_label_format_and_parse() {
        let q = Quarter::containing(date(2025, 5, 2));
        assert_eq!(q.label(), "Q2 2025");
        assert_eq!("Q2 2025".parse::<Quarter>().unwrap(), q);
        assert_eq!("q2  2025".parse::<Quarter>().unwrap(), q);
    }

    #[test]
    fn test_parse_rejects_bad_labels() {
        assert!(matches!("Q5 2025".parse::<Quarter>(), Err(ValidationError::QuarterLabel(_))));
        assert!(matches!("2025 Q1".parse::<Quarter>(), Err(ValidationError::QuarterLabel(_))));
        assert!(matches!("".parse::<Quarter>(), Err(ValidationError::QuarterLabel(_))));
        assert!(matches!(Quarter::new(2025, 0), Err(ValidationError::QuarterRange { .. })));
    }

    #[test]
    fn test_serde_uses_label() {
        let q = Quarter::new(2026, 3).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "\"Q3 2026\"");
        let back: Quarter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
