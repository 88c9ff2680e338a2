//! Planning value objects - identifiers and the enumerated slot axes.
//!
//! # Identifiers
//! - [`SupervisorId`], [`RoomId`], [`SectorId`]
//!
//! # Slot axes
//! - [`DayOfWeek`] and [`Period`] locate an assignment in the week
//! - [`SupervisionRole`] is the nature of the assignment

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a supervising anesthetist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupervisorId(u32);

impl SupervisorId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for SupervisorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SupervisorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an operating room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(u32);

impl RoomId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for RoomId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an operating sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorId(u32);

impl SectorId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for SectorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week an assignment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
            chrono::Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MONDAY" | "MON" => Ok(DayOfWeek::Monday),
            "TUESDAY" | "TUE" => Ok(DayOfWeek::Tuesday),
            "WEDNESDAY" | "WED" => Ok(DayOfWeek::Wednesday),
            "THURSDAY" | "THU" => Ok(DayOfWeek::Thursday),
            "FRIDAY" | "FRI" => Ok(DayOfWeek::Friday),
            "SATURDAY" | "SAT" => Ok(DayOfWeek::Saturday),
            "SUNDAY" | "SUN" => Ok(DayOfWeek::Sunday),
            _ => Err(DomainError::UnknownDay(s.to_string())),
        }
    }
}

/// Half-day slot of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Period {
    Morning,
    Afternoon,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "MORNING",
            Period::Afternoon => "AFTERNOON",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MORNING" | "AM" => Ok(Period::Morning),
            "AFTERNOON" | "PM" => Ok(Period::Afternoon),
            _ => Err(DomainError::UnknownPeriod(s.to_string())),
        }
    }
}

/// Nature of a supervisor's assignment to a room.
///
/// Exactly one role per assignment. `Anesthesia` means the supervisor
/// performs the anesthesia in that room, and is exclusive both per
/// supervisor and per room within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupervisionRole {
    #[default]
    Supervision,
    Anesthesia,
}

impl SupervisionRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupervisionRole::Supervision => "SUPERVISION",
            SupervisionRole::Anesthesia => "ANESTHESIA",
        }
    }

    pub fn is_anesthesia(&self) -> bool {
        matches!(self, SupervisionRole::Anesthesia)
    }
}

impl fmt::Display for SupervisionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SupervisionRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUPERVISION" => Ok(SupervisionRole::Supervision),
            "ANESTHESIA" => Ok(SupervisionRole::Anesthesia),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period() {
        assert_eq!("morning".parse::<Period>().ok(), Some(Period::Morning));
        assert_eq!("PM".parse::<Period>().ok(), Some(Period::Afternoon));
        assert!(matches!(
            "evening".parse::<Period>(),
            Err(DomainError::UnknownPeriod(_))
        ));
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(
            "anesthesia".parse::<SupervisionRole>().ok(),
            Some(SupervisionRole::Anesthesia)
        );
        assert!("nursing".parse::<SupervisionRole>().is_err());
        assert_eq!(SupervisionRole::default(), SupervisionRole::Supervision);
    }

    #[test]
    fn test_day_from_weekday() {
        assert_eq!(DayOfWeek::from(chrono::Weekday::Mon), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from(chrono::Weekday::Sun), DayOfWeek::Sunday);
        assert_eq!("fri".parse::<DayOfWeek>().ok(), Some(DayOfWeek::Friday));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Period::Afternoon).unwrap(),
            "\"AFTERNOON\""
        );
        assert_eq!(
            serde_json::to_string(&SupervisionRole::Anesthesia).unwrap(),
            "\"ANESTHESIA\""
        );
        assert_eq!(serde_json::to_string(&RoomId::new(7)).unwrap(), "7");
    }
}
