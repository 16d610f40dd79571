//! Scenario files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Result;
use ember_factory::{SpawnRequest, Zone};
use ember_tables::{TableRows, Tables};
use serde::Deserialize;

/// Table rows, the zone everything spawns into, and what to spawn.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub tables: TableRows,
    pub zone: Zone,
    #[serde(default)]
    pub spawns: Vec<SpawnRequest>,
}

impl Scenario {
    pub fn open(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load the tables and hand back the rest.
    pub fn into_parts(self) -> Result<(Tables, Zone, Vec<SpawnRequest>)> {
        let tables = Tables::load(self.tables)?;
        Ok((tables, self.zone, self.spawns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_scenario_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/act1.json");
        let scenario = Scenario::open(&path).unwrap();
        assert_eq!(scenario.zone.act, 1);
        assert!(!scenario.spawns.is_empty());

        let (tables, _, _) = scenario.into_parts().unwrap();
        assert!(tables.obj.size(1) > 0);
    }
}
