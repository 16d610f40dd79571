//! Values handed to the composer by the map loader, the player-join logic and
//! the inventory. The composer stores them; it never parses them.

use ember_math::Vec2;
use serde::{Deserialize, Serialize};

/// The zone a placement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// `Levels` id of the zone's level.
    pub level_id: i32,
    /// Act the level belongs to, `1..=5`.
    pub act: usize,
}

/// One point of a patrol path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub position: Vec2,
    pub action: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub points: Vec<PathPoint>,
}

/// An object placed in a level layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Local id within the act.
    pub id: usize,
    #[serde(default)]
    pub mode: i32,
    #[serde(default)]
    pub path: Option<Path>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Amazon,
    Sorceress,
    Necromancer,
    Paladin,
    Barbarian,
    Druid,
    Assassin,
}

impl CharacterClass {
    /// Animation token of the class.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Amazon => "AM",
            Self::Sorceress => "SO",
            Self::Necromancer => "NE",
            Self::Paladin => "PA",
            Self::Barbarian => "BA",
            Self::Druid => "DZ",
            Self::Assassin => "AI",
        }
    }
}

/// Parsed character data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterData {
    pub name: String,
    pub class: CharacterClass,
}

/// An item constructed elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub code: String,
    pub name: String,
}
