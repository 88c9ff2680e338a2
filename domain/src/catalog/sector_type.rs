//! Sector categories.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an operating sector.
///
/// Compatibility between categories decides which rooms one supervisor may
/// cover in the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectorType {
    General,
    Cardiac,
    Pediatric,
    Orthopedic,
    Ophthalmology,
    Endoscopy,
}

impl SectorType {
    pub const ALL: [SectorType; 6] = [
        SectorType::General,
        SectorType::Cardiac,
        SectorType::Pediatric,
        SectorType::Orthopedic,
        SectorType::Ophthalmology,
        SectorType::Endoscopy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectorType::General => "GENERAL",
            SectorType::Cardiac => "CARDIAC",
            SectorType::Pediatric => "PEDIATRIC",
            SectorType::Orthopedic => "ORTHOPEDIC",
            SectorType::Ophthalmology => "OPHTHALMOLOGY",
            SectorType::Endoscopy => "ENDOSCOPY",
        }
    }
}

impl fmt::Display for SectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SectorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        SectorType::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| DomainError::UnknownSectorType(s.to_string()))
    }
}
