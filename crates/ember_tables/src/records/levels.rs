//! `Levels`: level definitions, including where each warp tile leads.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Warp slots per level (`Vis0..7`, `Warp0..7`).
pub const LEVEL_WARP_SLOTS: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Levels {
    pub id: i32,
    pub name: String,
    pub act: usize,
    /// Destination level id per warp slot; `<= 0` means no destination.
    pub vis: [i32; LEVEL_WARP_SLOTS],
    /// `LvlWarp` id per warp slot; `< 0` means unused.
    pub warp: [i32; LEVEL_WARP_SLOTS],
}

impl Levels {
    /// Destination level and `LvlWarp` ids for a warp slot, if both are set.
    #[must_use]
    pub fn warp_slot(&self, slot: usize) -> Option<(i32, i32)> {
        let destination = *self.vis.get(slot)?;
        let warp = *self.warp.get(slot)?;
        (destination > 0 && warp >= 0).then_some((destination, warp))
    }
}

impl Record for Levels {
    const TABLE: &'static str = "Levels";

    fn index(&self) -> Option<i32> {
        Some(self.id)
    }
}
