//! `MonPreset`: per-act mapping from a placement's local id to a monster.

use serde::{Deserialize, Serialize};

use crate::binned::BinnedTable;
use crate::record::{BinnedRecord, Record};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MonPreset {
    pub act: usize,
    /// `monstats` id (or super-unique name) placed at this slot.
    pub place: String,
}

impl Record for MonPreset {
    const TABLE: &'static str = "MonPreset";
}

impl BinnedRecord for MonPreset {
    fn category(&self) -> usize {
        self.act
    }
}

impl BinnedTable<MonPreset> {
    /// The monster placed at `(act, local)`.
    #[must_use]
    pub fn place(&self, act: usize, local: usize) -> Option<&str> {
        self.get_in(act, local).map(|entry| entry.place.as_str())
    }
}
