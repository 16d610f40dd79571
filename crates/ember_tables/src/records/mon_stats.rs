//! `monstats`: one row per monster type.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Number of AI parameter slots (`aip1`..`aip8`).
pub const AI_PARAM_SLOTS: usize = 8;

/// Normal, nightmare, hell.
pub const DIFFICULTIES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonStats {
    /// String id, referenced by placements and presets.
    pub id: String,
    #[serde(rename = "hcIdx")]
    pub hc_idx: i32,
    /// Animation token.
    pub code: String,
    /// Key of the linked `monstats2` row.
    pub mon_stats_ex: String,
    /// Behavior id.
    #[serde(rename = "AI")]
    pub ai: String,
    pub velocity: f32,
    pub run: f32,
    /// Mode code to spawn in; empty means neutral.
    #[serde(rename = "spawnmode")]
    pub spawn_mode: String,
    /// Whether players can interact with the monster (town NPCs).
    #[serde(rename = "interact")]
    pub interact: bool,
    /// `aip[slot][difficulty]`.
    #[serde(rename = "aip")]
    pub aip: [[i32; DIFFICULTIES]; AI_PARAM_SLOTS],
}

impl MonStats {
    /// AI parameters for normal difficulty.
    ///
    /// Only the first difficulty column is read; nightmare and hell values are
    /// loaded but never selected.
    #[must_use]
    pub fn normal_ai_params(&self) -> [i32; AI_PARAM_SLOTS] {
        self.aip.map(|by_difficulty| by_difficulty[0])
    }
}

impl Record for MonStats {
    const TABLE: &'static str = "monstats";

    fn index(&self) -> Option<i32> {
        Some(self.hc_idx)
    }

    fn key(&self) -> Option<&str> {
        Some(&self.id)
    }
}
