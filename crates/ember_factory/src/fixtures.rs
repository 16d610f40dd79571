//! Small in-memory tables shared by the composer tests.

use std::sync::Arc;

use ember_ai::{Dependency, InjectionError, Injector, Service};
use ember_tables::records::{
    CompCode, Levels, LvlWarp, Missiles, MonMode, MonPreset, MonStats, MonStats2, Obj, Objects,
    WeaponClass,
};
use ember_tables::{TableRows, Tables};

use crate::config::FactoryConfig;
use crate::factory::EntityFactory;
use crate::placement::Zone;

/// Rogue Encampment: warp slot 0 leads to the Blood Moor.
pub const TOWN: Zone = Zone { level_id: 1, act: 1 };
/// Blood Moor.
pub const MOOR: Zone = Zone { level_id: 2, act: 1 };
/// A level whose only warp leads nowhere.
pub const BROKEN: Zone = Zone { level_id: 3, act: 1 };

/// Supplies nothing.
pub struct NoServices;

impl Injector for NoServices {
    fn provide(&self, dependency: Dependency) -> Result<Service, InjectionError> {
        Err(InjectionError::Unavailable(dependency))
    }
}

fn aip(sight: i32, reach: i32, delay: i32) -> [[i32; 3]; 8] {
    let mut aip = [[0; 3]; 8];
    aip[0] = [sight, sight + 5, sight + 10];
    aip[1] = [reach; 3];
    aip[2] = [delay; 3];
    aip
}

fn monster(id: &str, hc_idx: i32, ex: &str, ai: &str) -> MonStats {
    MonStats {
        id: id.into(),
        hc_idx,
        code: id[..2].to_uppercase(),
        mon_stats_ex: ex.into(),
        ai: ai.into(),
        velocity: 2.0,
        run: 4.0,
        ..MonStats::default()
    }
}

fn obj(id: i32, object_id: i32) -> Obj {
    Obj {
        act: 1,
        id,
        description: format!("placement {id}"),
        object_id,
    }
}

fn warp_row(id: i32, offset_x: i32, offset_y: i32) -> LvlWarp {
    LvlWarp {
        id,
        name: format!("warp {id}"),
        offset_x,
        offset_y,
    }
}

fn level(id: i32, name: &str, destination: i32, warp: i32) -> Levels {
    let mut vis = [0; 8];
    let mut warps = [-1; 8];
    vis[0] = destination;
    warps[0] = warp;
    Levels {
        id,
        name: name.into(),
        act: 1,
        vis,
        warp: warps,
    }
}

pub fn rows() -> TableRows {
    TableRows {
        mon_stats: vec![
            MonStats {
                aip: aip(80, 4, 0),
                ..monster("zombie1", 0, "zombie1", "Zombie")
            },
            MonStats {
                spawn_mode: "WL".into(),
                interact: true,
                ..monster("cain1", 1, "cain1", "Npc")
            },
            monster("ghoul", 2, "zombie1", "Vampire"),
            monster("orphan", 3, "missing", "Idle"),
            MonStats {
                spawn_mode: "XX".into(),
                ..monster("dancer", 4, "cain1", "Idle")
            },
        ],
        mon_stats2: vec![
            MonStats2 {
                id: "zombie1".into(),
                base_w: "1HS".into(),
                size_x: 2,
                size_y: 2,
                component_v: vec!["\"hvy,lit\"".into(), String::new(), "axe".into()],
            },
            MonStats2 {
                id: "cain1".into(),
                base_w: "HTH".into(),
                size_x: 1,
                size_y: 1,
                component_v: Vec::new(),
            },
        ],
        mon_preset: ["zombie1", "cain1", "nobody"]
            .into_iter()
            .map(|place| MonPreset {
                act: 1,
                place: place.into(),
            })
            .collect(),
        mon_mode: ["DT", "NU", "WL"].map(MonMode::new).into(),
        weapon_class: ["HTH", "1HS"].map(WeaponClass::new).into(),
        comp_code: ["nil", "lit", "med", "hvy", "axe"].map(CompCode::new).into(),
        objects: vec![
            Objects {
                id: 5,
                name: "chest".into(),
                description: "Chest".into(),
                token: "CH".into(),
                draw: true,
                operate_range: 2,
                selectable: vec![true, false],
                ..Objects::default()
            },
            Objects {
                id: 7,
                name: "barrel".into(),
                description: "Barrel".into(),
                token: "BA".into(),
                draw: true,
                operate_range: 0,
                selectable: vec![true],
                ..Objects::default()
            },
            Objects {
                id: 2,
                name: "marker".into(),
                description: "Invisible marker".into(),
                draw: false,
                ..Objects::default()
            },
        ],
        obj: vec![obj(0, 5), obj(1, 7), obj(2, 2), obj(3, 99)],
        levels: vec![
            level(1, "Rogue Encampment", 2, 0),
            level(2, "Blood Moor", 1, 1),
            level(3, "Broken", 9, 0),
        ],
        lvl_warp: vec![warp_row(0, 2, 3), warp_row(1, -1, 0)],
        missiles: vec![Missiles {
            id: 0,
            missile: "arrow".into(),
            vel: 10.0,
            range: 30,
        }],
    }
}

pub fn tables() -> Arc<Tables> {
    Arc::new(Tables::load(rows()).expect("fixture tables load"))
}

pub fn factory() -> EntityFactory {
    EntityFactory::new(tables(), Arc::new(NoServices), FactoryConfig::default().with_seed(7))
}

pub fn mon_stats(factory: &EntityFactory, id: &str) -> Arc<MonStats> {
    factory
        .tables()
        .mon_stats
        .get_by_key(id)
        .cloned()
        .expect("fixture monster exists")
}
