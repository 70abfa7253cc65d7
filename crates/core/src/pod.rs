//! Pod model - a small accountability group and its settings.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use crate::error::{Result, ValidationError};
use crate::id::{PodId, UserId};
use crate::user::User;
use crate::Time;

/// A group of users sharing goals and a tracking-week configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    /// Unique identifier
    pub id: PodId,

    /// Pod name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Members in display order
    pub members: Vec<User>,

    /// Pod owner
    pub owner_id: UserId,

    /// Pod-wide settings
    #[serde(default)]
    pub settings: PodSettings,

    /// When created
    pub created_at: Time,
}

impl Pod {
    /// Largest number of members a pod may hold.
    pub const MAX_MEMBERS: usize = 10;

    /// Create a new pod owned by `owner`, who becomes its first member.
    pub fn new(name: impl Into<String>, owner: User) -> Self {
        Self {
            id: PodId::new(),
            name: name.into(),
            description: String::new(),
            owner_id: owner.id,
            members: vec![owner],
            settings: PodSettings::default(),
            created_at: chrono::Utc::now(),
        }
    }

    /// Whether `user_id` is a member.
    pub fn has_member(&self, user_id: UserId) -> bool {
        self.members.iter().any(|m| m.id == user_id)
    }

    /// Whether the pod has reached its member cap.
    pub fn is_full(&self) -> bool {
        self.members.len() >= Self::MAX_MEMBERS
    }

    /// Check the member cap.
    pub fn validate(&self) -> Result<()> {
        if self.members.len() > Self::MAX_MEMBERS {
            return Err(ValidationError::TooManyMembers {
                pod: self.id.to_string(),
                count: self.members.len(),
                max: Self::MAX_MEMBERS,
            });
        }
        Ok(())
    }
}

/// Pod-wide settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSettings {
    /// Weekday on which the pod's tracking weeks begin
    pub week_start_day: WeekStartDay,
}

/// Weekday a tracking week begins on, 0 = Sunday through 6 = Saturday.
///
/// Construction goes through [`WeekStartDay::new`] (or `TryFrom<u8>`), so an
/// out-of-range value is rejected when settings are loaded rather than
/// surfacing later inside week arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStartDay(u8);

impl WeekStartDay {
    /// Sunday (0)
    pub const SUNDAY: Self = Self(0);
    /// Monday (1)
    pub const MONDAY: Self = Self(1);
    /// Tuesday (2)
    pub const TUESDAY: Self = Self(2);
    /// Wednesday (3)
    pub const WEDNESDAY: Self = Self(3);
    /// Thursday (4)
    pub const THURSDAY: Self = Self(4);
    /// Friday (5)
    pub const FRIDAY: Self = Self(5);
    /// Saturday (6)
    pub const SATURDAY: Self = Self(6);

    /// All seven values, Sunday first.
    pub const ALL: [Self; 7] = [
        Self::SUNDAY,
        Self::MONDAY,
        Self::TUESDAY,
        Self::WEDNESDAY,
        Self::THURSDAY,
        Self::FRIDAY,
        Self::SATURDAY,
    ];

    /// Validate a raw day number.
    pub fn new(day: u8) -> Result<Self> {
        if day > 6 {
            return Err(ValidationError::WeekStartDay(day));
        }
        Ok(Self(day))
    }

    /// Raw day number, 0 = Sunday.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The matching chrono weekday.
    pub fn weekday(self) -> Weekday {
        match self.0 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Convert from a chrono weekday.
    pub fn from_weekday(weekday: Weekday) -> Self {
        Self(weekday.num_days_from_sunday() as u8)
    }
}

impl Default for WeekStartDay {
    fn default() -> Self {
        Self::MONDAY
    }
}

impl TryFrom<u8> for WeekStartDay {
    type Error = ValidationError;

    fn try_from(day: u8) -> Result<Self> {
        Self::new(day)
    }
}

impl From<WeekStartDay> for u8 {
    fn from(day: WeekStartDay) -> u8 {
        day.0
    }
}

impl std::fmt::Display for WeekStartDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_start_day_range() {
        for day in 0..=6 {
            assert_eq!(WeekStartDay::new(day).unwrap().value(), day);
        }
        assert_eq!(WeekStartDay::new(7), Err(ValidationError::WeekStartDay(7)));
    }

    #[test]
    fn test_week_start_day_weekday_mapping() {
        assert_eq!(WeekStartDay::SUNDAY.weekday(), Weekday::Sun);
        assert_eq!(WeekStartDay::SATURDAY.weekday(), Weekday::Sat);
        for day in WeekStartDay::ALL {
            assert_eq!(WeekStartDay::from_weekday(day.weekday()), day);
        }
    }

    #[test]
    fn test_week_start_day_deserialize_rejects_out_of_range() {
        let ok: PodSettings = serde_json::from_str(r#"{"weekStartDay": 3}"#).unwrap();
        assert_eq!(ok.week_start_day, WeekStartDay::WEDNESDAY);

        let err = serde_json::from_str::<PodSettings>(r#"{"weekStartDay": 9}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_default_week_start_is_monday() {
        assert_eq!(PodSettings::default().week_start_day, WeekStartDay::MONDAY);
    }

    #[test]
    fn test_pod_membership_and_cap() {
        let owner = User::new("Ada", "ada@example.com");
        let owner_id = owner.id;
        let mut pod = Pod::new("Builders", owner);
        assert!(pod.has_member(owner_id));
        assert!(!pod.has_member(UserId::new()));
        assert!(!pod.is_full());

        for i in 0..9 {
            pod.members.push(User::new(format!("m{i}"), "m@example.com"));
        }
        assert!(pod.is_full());
        assert!(pod.validate().is_ok());

        pod.members.push(User::new("extra", "x@example.com"));
        assert!(matches!(
            pod.validate(),
            Err(ValidationError::TooManyMembers { count: 11, max: 10, .. })
        ));
    }
}
