//! `Missiles`: projectile definitions.

use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Missiles {
    pub id: i32,
    /// Missile name.
    pub missile: String,
    /// Speed.
    pub vel: f32,
    /// Lifetime bound.
    pub range: i32,
}

impl Record for Missiles {
    const TABLE: &'static str = "Missiles";

    fn index(&self) -> Option<i32> {
        Some(self.id)
    }

    fn key(&self) -> Option<&str> {
        Some(&self.missile)
    }
}
