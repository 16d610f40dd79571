//! `LvlWarp`: warp tile definitions.

use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LvlWarp {
    pub id: i32,
    pub name: String,
    /// Offset from the warp tile to the interaction point, in subtiles.
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Record for LvlWarp {
    const TABLE: &'static str = "LvlWarp";

    fn index(&self) -> Option<i32> {
        Some(self.id)
    }
}
