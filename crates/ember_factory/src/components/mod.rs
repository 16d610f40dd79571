//! Components attached by the composer.
//!
//! Spatial components ([`Position`](ember_math::Position),
//! [`Velocity`](ember_math::Velocity), [`Angle`](ember_math::Angle),
//! [`Size`](ember_math::Size)) live in `ember_math`; interaction lives in
//! [`crate::interact`].

mod cof;

pub use cof::{CofAlphas, CofComponents, CofReference, CofTransforms, MovementModes};

use std::sync::Arc;

use ember_ai::BehaviorKind;
use ember_math::{TileIndex, Vec2};
use ember_tables::records::{Levels, LvlWarp, Missiles, MonStats, MonStats2, Objects};

use crate::placement::{CharacterData, ItemInstance, Path, PlacedObject};

/// Implement [`Component`](ember_component::Component) using the type's name.
macro_rules! impl_component {
    ($($ty:ident),* $(,)?) => {
        $(
            impl ember_component::Component for $ty {
                fn type_name() -> &'static str {
                    stringify!($ty)
                }
            }
        )*
    };
}
pub(crate) use impl_component;

/// What kind of entity this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Object,
    Monster,
    Warp,
    Item,
    Missile,
}

/// Kind and display name. Every composed entity has one.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub kind: EntityKind,
    pub name: String,
}

impl Class {
    #[must_use]
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub data: CharacterData,
}

#[derive(Debug, Clone)]
pub struct Object {
    pub base: Arc<Objects>,
}

#[derive(Debug, Clone)]
pub struct Monster {
    pub stats: Arc<MonStats>,
    pub stats2: Arc<MonStats2>,
}

#[derive(Debug, Clone)]
pub struct Warp {
    /// The tile the warp was created from.
    pub index: TileIndex,
    pub warp: Arc<LvlWarp>,
    /// The level the warp leads to.
    pub destination: Arc<Levels>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub item: ItemInstance,
}

#[derive(Debug, Clone)]
pub struct Missile {
    pub missile: Arc<Missiles>,
    pub origin: Vec2,
    /// Lifetime bound.
    pub range: i32,
}

/// The layout placement an entity came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementWrapper {
    pub act: usize,
    pub object: PlacedObject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathWrapper {
    pub path: Path,
}

/// The behavior driving a monster, held by the
/// [`BehaviorResolver`](ember_ai::BehaviorResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorWrapper {
    pub kind: BehaviorKind,
}

/// Entity is currently running rather than walking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Running;

/// Entity is replicated to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Networked;

/// Entity tracks which zone it is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneAware;

impl_component!(
    Class,
    Player,
    Object,
    Monster,
    Warp,
    Item,
    Missile,
    PlacementWrapper,
    PathWrapper,
    BehaviorWrapper,
    Running,
    Networked,
    ZoneAware,
);
