//! Static description of the operating theatre: sectors and their rooms.

use super::value_objects::{RoomId, SectorId};
use crate::catalog::{SectorType, SupervisionRules};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static ROOM_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("room number pattern is valid"));

/// A named grouping of operating rooms sharing supervision rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub id: SectorId,
    pub name: String,
    pub sector_type: SectorType,
    /// Sector-specific rules; catalog defaults apply when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervision_rules: Option<SupervisionRules>,
}

impl Sector {
    pub fn new(id: impl Into<SectorId>, name: impl Into<String>, sector_type: SectorType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sector_type,
            supervision_rules: None,
        }
    }

    pub fn with_rules(mut self, rules: SupervisionRules) -> Self {
        self.supervision_rules = Some(rules);
        self
    }
}

/// An operating room, owned by exactly one sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Display name, e.g. "Salle 4". Its last digit run is the room's position.
    pub name: String,
    pub sector_id: SectorId,
}

impl Room {
    pub fn new(id: impl Into<RoomId>, name: impl Into<String>, sector_id: impl Into<SectorId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sector_id: sector_id.into(),
        }
    }

    /// Position of the room inferred from its display name.
    ///
    /// Returns `None` when the name carries no digits; such rooms are left
    /// out of contiguity checks instead of breaking them.
    pub fn sequence_number(&self) -> Option<u32> {
        ROOM_NUMBER
            .find_iter(&self.name)
            .last()
            .and_then(|m| m.as_str().parse().ok())
    }
}

/// Rooms and sectors of one operating theatre.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocLayout {
    #[serde(default)]
    pub sectors: Vec<Sector>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl BlocLayout {
    pub fn new(sectors: Vec<Sector>, rooms: Vec<Room>) -> Self {
        Self { sectors, rooms }
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn sector(&self, id: SectorId) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.id == id)
    }

    pub fn sector_of_room(&self, room: RoomId) -> Option<&Sector> {
        self.room(room).and_then(|r| self.sector(r.sector_id))
    }
}
