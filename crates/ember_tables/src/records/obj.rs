//! `obj`: per-act mapping from a placement's local object id to an
//! `objects` row.

use serde::{Deserialize, Serialize};

use crate::binned::BinnedTable;
use crate::record::{BinnedRecord, Record};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Obj {
    pub act: usize,
    /// Local id within the act.
    pub id: i32,
    pub description: String,
    /// Id of the `objects` row.
    pub object_id: i32,
}

impl std::fmt::Display for Obj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

impl Record for Obj {
    const TABLE: &'static str = "obj";
}

impl BinnedRecord for Obj {
    fn category(&self) -> usize {
        self.act
    }
}

impl BinnedTable<Obj> {
    /// The `objects` id placed at `(act, local)`.
    #[must_use]
    pub fn object_id(&self, act: usize, local: usize) -> Option<i32> {
        self.get_in(act, local).map(|entry| entry.object_id)
    }
}
