//! # ember_factory
//!
//! The entity composer. Given the loaded [`Tables`](ember_tables::Tables) and
//! a spawn request, an [`EntityFactory`] resolves every cross-table join,
//! allocates an entity in a [`ComponentStore`](ember_component::ComponentStore)
//! and attaches the component set for that kind of entity.
//!
//! - Joins that do not resolve are logged and yield [`Entity::INVALID`](ember_component::Entity::INVALID);
//!   nothing is allocated.
//! - Monsters get their behavior resolved through
//!   [`BehaviorResolver`](ember_ai::BehaviorResolver) before the handle is
//!   returned.
//! - If attaching fails part way, the entity is despawned and its behaviors
//!   disposed before the error is returned.

pub mod components;
pub mod config;
pub mod error;
pub mod factory;
pub mod interact;
pub mod modes;
pub mod placement;
pub mod request;

#[cfg(test)]
pub(crate) mod fixtures;

pub use components::{
    BehaviorWrapper, Class, CofAlphas, CofComponents, CofReference, CofTransforms, EntityKind, Item,
    Missile, Monster, MovementModes, Networked, Object, PathWrapper, PlacementWrapper, Player,
    Running, Warp, ZoneAware,
};
pub use config::FactoryConfig;
pub use error::FactoryError;
pub use factory::EntityFactory;
pub use interact::{Interactable, InteractionHandler, Interactor, Interactors, TracingInteractor};
pub use placement::{CharacterClass, CharacterData, ItemInstance, Path, PathPoint, PlacedObject, Zone};
pub use request::SpawnRequest;
