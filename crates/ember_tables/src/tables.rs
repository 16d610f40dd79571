//! The table context.
//!
//! [`Tables`] holds every table the composer and behavior resolver join
//! across. It is built once from [`TableRows`], then shared read-only behind
//! an `Arc`; nothing mutates it after [`Tables::load`] returns.

use std::io::Read;

use serde::Deserialize;
use tracing::info;

use crate::binned::BinnedTable;
use crate::error::TableError;
use crate::records::{
    ACT_LAYOUT, CompCode, Levels, LvlWarp, Missiles, MonMode, MonPreset, MonStats, MonStats2, Obj,
    Objects, WeaponClass,
};
use crate::table::Table;

/// Raw rows for every table, in table order.
///
/// Missing tables deserialize as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TableRows {
    #[serde(rename = "monstats")]
    pub mon_stats: Vec<MonStats>,
    #[serde(rename = "monstats2")]
    pub mon_stats2: Vec<MonStats2>,
    #[serde(rename = "MonPreset")]
    pub mon_preset: Vec<MonPreset>,
    #[serde(rename = "MonMode")]
    pub mon_mode: Vec<MonMode>,
    #[serde(rename = "WeaponClass")]
    pub weapon_class: Vec<WeaponClass>,
    #[serde(rename = "compcode")]
    pub comp_code: Vec<CompCode>,
    #[serde(rename = "objects")]
    pub objects: Vec<Objects>,
    #[serde(rename = "obj")]
    pub obj: Vec<Obj>,
    #[serde(rename = "Levels")]
    pub levels: Vec<Levels>,
    #[serde(rename = "LvlWarp")]
    pub lvl_warp: Vec<LvlWarp>,
    #[serde(rename = "Missiles")]
    pub missiles: Vec<Missiles>,
}

/// Every loaded table.
#[derive(Debug, Default)]
pub struct Tables {
    pub mon_stats: Table<MonStats>,
    pub mon_stats2: Table<MonStats2>,
    pub mon_preset: BinnedTable<MonPreset>,
    pub mon_mode: Table<MonMode>,
    pub weapon_class: Table<WeaponClass>,
    pub comp_code: Table<CompCode>,
    pub objects: Table<Objects>,
    pub obj: BinnedTable<Obj>,
    pub levels: Table<Levels>,
    pub lvl_warp: Table<LvlWarp>,
    pub missiles: Table<Missiles>,
}

impl Tables {
    /// Load and finalize every table.
    ///
    /// # Errors
    ///
    /// Fails on the first table that cannot be loaded: a duplicate id, or an
    /// act-binned row whose act is out of range or whose act is already full.
    pub fn load(rows: TableRows) -> Result<Self, TableError> {
        let tables = Self {
            mon_stats: Table::load(rows.mon_stats)?,
            mon_stats2: Table::load(rows.mon_stats2)?,
            mon_preset: BinnedTable::load(ACT_LAYOUT, rows.mon_preset)?,
            mon_mode: Table::load(rows.mon_mode)?,
            weapon_class: Table::load(rows.weapon_class)?,
            comp_code: Table::load(rows.comp_code)?,
            objects: Table::load(rows.objects)?,
            obj: BinnedTable::load(ACT_LAYOUT, rows.obj)?,
            levels: Table::load(rows.levels)?,
            lvl_warp: Table::load(rows.lvl_warp)?,
            missiles: Table::load(rows.missiles)?,
        };

        info!(
            monstats = tables.mon_stats.len(),
            monstats2 = tables.mon_stats2.len(),
            mon_preset = tables.mon_preset.len(),
            objects = tables.objects.len(),
            obj = tables.obj.len(),
            levels = tables.levels.len(),
            lvl_warp = tables.lvl_warp.len(),
            missiles = tables.missiles.len(),
            "tables loaded"
        );
        Ok(tables)
    }

    /// Parse [`TableRows`] from JSON and load them.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Parse`] for malformed input, otherwise see
    /// [`Tables::load`].
    pub fn from_reader(reader: impl Read) -> Result<Self, TableError> {
        let rows: TableRows = serde_json::from_reader(reader)?;
        Self::load(rows)
    }

    /// Parse [`TableRows`] from a JSON string and load them.
    ///
    /// # Errors
    ///
    /// See [`Tables::from_reader`].
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let rows: TableRows = serde_json::from_str(json)?;
        Self::load(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &str = r#"{
        "monstats": [
            {"Id": "zombie1", "hcIdx": 0, "Code": "ZM", "MonStatsEx": "zombie1", "AI": "Zombie"}
        ],
        "monstats2": [
            {"Id": "zombie1", "SizeX": 2, "ComponentV": ["hvy,lit", "", "axe"]}
        ],
        "MonMode": [{"code": "DT"}, {"code": "NU"}, {"code": "WL"}],
        "obj": [
            {"Act": 1, "Id": 0, "Description": "chest", "ObjectId": 5},
            {"Act": 1, "Id": 1, "Description": "barrel", "ObjectId": 7},
            {"Act": 1, "Id": 2, "Description": "shrine", "ObjectId": 2}
        ],
        "objects": [
            {"Id": 5, "Name": "chest"},
            {"Id": 7, "Name": "barrel"},
            {"Id": 2, "Name": "shrine"}
        ]
    }"#;

    #[test]
    fn test_from_json_loads_every_table() {
        let tables = Tables::from_json(ROWS).unwrap();
        assert_eq!(tables.mon_stats.get_by_key("zombie1").unwrap().code, "ZM");
        assert_eq!(tables.mon_mode.index_of("NU"), Some(1));
        assert_eq!(tables.obj.size(1), 3);
        assert_eq!(tables.obj.size(2), 0);
        assert_eq!(tables.obj.object_id(1, 2), Some(2));
        assert!(tables.obj.get_in(2, 0).is_none());
        assert_eq!(tables.objects.get(7).unwrap().name, "barrel");
        assert!(tables.missiles.is_empty());
    }

    #[test]
    fn test_from_reader() {
        let tables = Tables::from_reader(ROWS.as_bytes()).unwrap();
        assert_eq!(tables.mon_stats2.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = Tables::from_json("{\"monstats\": 3}");
        assert!(matches!(result, Err(TableError::Parse(_))));
    }

    #[test]
    fn test_overfull_act_aborts_loading() {
        let rows = TableRows {
            obj: (0..=crate::records::MAX_ENTRIES_PER_ACT)
                .map(|id| Obj {
                    act: 3,
                    id: id as i32,
                    ..Obj::default()
                })
                .collect(),
            ..TableRows::default()
        };
        assert!(matches!(
            Tables::load(rows),
            Err(TableError::CapacityOverflow { category: 3, .. })
        ));
    }
}
