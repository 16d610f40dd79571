//! Declarative spawn requests.

use ember_math::{TileIndex, Vec2};
use serde::{Deserialize, Serialize};

use crate::placement::{CharacterData, ItemInstance, PlacedObject};

/// One entity to create, as listed in a scenario. Records are referenced by
/// key and resolved when the request is spawned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpawnRequest {
    Player {
        character: CharacterData,
        position: Vec2,
    },
    StaticObject {
        object: PlacedObject,
        position: Vec2,
    },
    DynamicObject {
        object: PlacedObject,
        position: Vec2,
    },
    /// A monster by `monstats` id.
    Monster {
        monster: String,
        position: Vec2,
    },
    Warp {
        index: TileIndex,
        position: Vec2,
    },
    Item {
        item: ItemInstance,
        position: Vec2,
    },
    /// A missile by `Missiles` name.
    Missile {
        missile: String,
        direction: Vec2,
        origin: Vec2,
    },
}
