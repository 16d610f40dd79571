//! Row schemas for the game-design tables.
//!
//! Field names follow the spreadsheet column headers so rows can be
//! deserialized straight from exported table data.

mod codes;
mod levels;
mod lvl_warp;
mod missiles;
mod mon_preset;
mod mon_stats;
mod mon_stats2;
mod obj;
mod objects;

pub use codes::{CompCode, MonMode, WeaponClass};
pub use levels::{LEVEL_WARP_SLOTS, Levels};
pub use lvl_warp::LvlWarp;
pub use missiles::Missiles;
pub use mon_preset::MonPreset;
pub use mon_stats::{AI_PARAM_SLOTS, DIFFICULTIES, MonStats};
pub use mon_stats2::{COMPONENT_SLOTS, MonStats2};
pub use obj::Obj;
pub use objects::Objects;

use crate::binned::BinLayout;

/// Number of acts; acts are numbered `1..=MAX_ACTS`.
pub const MAX_ACTS: usize = 5;

/// Maximum placement rows per act.
pub const MAX_ENTRIES_PER_ACT: usize = 150;

/// Bin layout of the act-binned placement tables ([`Obj`], [`MonPreset`]).
pub const ACT_LAYOUT: BinLayout = BinLayout::new(MAX_ACTS, MAX_ENTRIES_PER_ACT);
