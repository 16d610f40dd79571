//! The entity composer.
//!
//! One `create_*` operation per entity kind, each in its own module. Every
//! operation works in two phases:
//!
//! 1. **Plan**: resolve every join and make every random pick. An unresolved
//!    join is logged and the operation returns [`Entity::INVALID`] without
//!    allocating anything.
//! 2. **Attach**: spawn the entity and attach its components. If an attach
//!    fails, [`EntityFactory::commit`] despawns the entity and disposes its
//!    behaviors before returning the error, so no partial entity survives.

mod item;
mod missile;
mod monster;
mod object;
mod player;
mod warp;

use std::fmt;
use std::sync::Arc;

use ember_ai::{BehaviorResolver, Injector};
use ember_component::{ComponentStore, Entity};
use ember_tables::Tables;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, warn};

use crate::config::FactoryConfig;
use crate::error::FactoryError;
use crate::interact::Interactors;
use crate::placement::Zone;
use crate::request::SpawnRequest;

/// Builds entities from tables and spawn requests.
pub struct EntityFactory {
    tables: Arc<Tables>,
    config: FactoryConfig,
    interactors: Interactors,
    injector: Arc<dyn Injector>,
    behaviors: BehaviorResolver,
    rng: StdRng,
}

impl EntityFactory {
    /// Create a factory over loaded tables.
    ///
    /// `injector` supplies the dependencies monster behaviors declare.
    #[must_use]
    pub fn new(tables: Arc<Tables>, injector: Arc<dyn Injector>, config: FactoryConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            tables,
            config,
            interactors: Interactors::default(),
            injector,
            behaviors: BehaviorResolver::new(),
            rng,
        }
    }

    /// Replace the object, warp and item interactors.
    #[must_use]
    pub fn with_interactors(mut self, interactors: Interactors) -> Self {
        self.interactors = interactors;
        self
    }

    #[must_use]
    pub fn tables(&self) -> &Arc<Tables> {
        &self.tables
    }

    #[must_use]
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    #[must_use]
    pub fn interactors(&self) -> &Interactors {
        &self.interactors
    }

    /// Behaviors of every monster this factory created.
    #[must_use]
    pub fn behaviors(&self) -> &BehaviorResolver {
        &self.behaviors
    }

    pub fn behaviors_mut(&mut self) -> &mut BehaviorResolver {
        &mut self.behaviors
    }

    /// Create the entity a request describes.
    ///
    /// # Errors
    ///
    /// See the per-kind `create_*` operations.
    pub fn spawn<W: ComponentStore>(
        &mut self,
        world: &mut W,
        zone: Zone,
        request: &SpawnRequest,
    ) -> Result<Entity, FactoryError> {
        match request {
            SpawnRequest::Player {
                character,
                position,
            } => self.create_player(world, character.clone(), *position),
            SpawnRequest::StaticObject { object, position } => {
                self.create_static_object(world, zone, object, *position)
            }
            SpawnRequest::DynamicObject { object, position } => {
                self.create_dynamic_object(world, zone, object, *position)
            }
            SpawnRequest::Monster { monster, position } => {
                let Some(stats) = self.tables.mon_stats.get_by_key(monster).cloned() else {
                    error!(%monster, level = zone.level_id, "unknown monster");
                    return Ok(Entity::INVALID);
                };
                self.create_monster(world, zone, &stats, *position)
            }
            SpawnRequest::Warp { index, position } => self.create_warp(world, zone, *index, *position),
            SpawnRequest::Item { item, position } => self.create_item(world, item.clone(), *position),
            SpawnRequest::Missile {
                missile,
                direction,
                origin,
            } => {
                let Some(missile_row) = self.tables.missiles.get_by_key(missile).cloned() else {
                    error!(%missile, "unknown missile");
                    return Ok(Entity::INVALID);
                };
                self.create_missile(world, &missile_row, *direction, *origin)
            }
        }
    }

    /// Despawn an entity and dispose its behaviors.
    ///
    /// Returns `true` if the entity was alive.
    pub fn destroy<W: ComponentStore>(&mut self, world: &mut W, entity: Entity) -> bool {
        self.behaviors.dispose(entity);
        world.despawn(entity)
    }

    /// Keep a freshly spawned entity if attaching succeeded, tear it down
    /// otherwise.
    fn commit<W: ComponentStore>(
        &mut self,
        world: &mut W,
        entity: Entity,
        attached: Result<(), FactoryError>,
    ) -> Result<Entity, FactoryError> {
        match attached {
            Ok(()) => Ok(entity),
            Err(err) => {
                warn!(%entity, %err, "discarding partially composed entity");
                self.behaviors.dispose(entity);
                world.despawn(entity);
                Err(err)
            }
        }
    }
}

impl fmt::Debug for EntityFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityFactory")
            .field("config", &self.config)
            .field("behaviors", &self.behaviors.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use ember_component::{Component, Signature, StorageError, World};
    use ember_math::{Position, TileIndex, Vec2};

    use super::*;
    use crate::components::{Class, EntityKind, Networked};
    use crate::fixtures::{self, MOOR, TOWN};
    use crate::interact::Interactable;
    use crate::placement::{CharacterClass, CharacterData, ItemInstance, PlacedObject};

    /// A store that refuses inserts once `budget` runs out.
    struct FailingStore {
        inner: World,
        budget: usize,
    }

    impl ComponentStore for FailingStore {
        fn spawn(&mut self) -> Entity {
            self.inner.spawn()
        }

        fn despawn(&mut self, entity: Entity) -> bool {
            self.inner.despawn(entity)
        }

        fn is_alive(&self, entity: Entity) -> bool {
            self.inner.is_alive(entity)
        }

        fn insert<T: Component>(&mut self, entity: Entity, component: T) -> Result<&mut T, StorageError> {
            if self.budget == 0 {
                return Err(StorageError::EntityNotFound(entity));
            }
            self.budget -= 1;
            self.inner.insert(entity, component)
        }

        fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
            self.inner.get(entity)
        }

        fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
            self.inner.get_mut(entity)
        }

        fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
            self.inner.remove(entity)
        }

        fn signature(&self, entity: Entity) -> Option<&Signature> {
            self.inner.signature(entity)
        }
    }

    #[test]
    fn test_spawn_dispatches_every_kind() {
        let mut factory = fixtures::factory();
        let mut world = World::new();
        let requests = [
            SpawnRequest::Player {
                character: CharacterData {
                    name: "Kashya".into(),
                    class: CharacterClass::Amazon,
                },
                position: Vec2::ZERO,
            },
            SpawnRequest::StaticObject {
                object: PlacedObject {
                    id: 0,
                    ..PlacedObject::default()
                },
                position: Vec2::ZERO,
            },
            SpawnRequest::DynamicObject {
                object: PlacedObject {
                    id: 0,
                    ..PlacedObject::default()
                },
                position: Vec2::ZERO,
            },
            SpawnRequest::Monster {
                monster: "zombie1".into(),
                position: Vec2::ZERO,
            },
            SpawnRequest::Warp {
                index: TileIndex::new(0, 0, 0),
                position: Vec2::ZERO,
            },
            SpawnRequest::Item {
                item: ItemInstance {
                    code: "hp1".into(),
                    name: "Minor Healing Potion".into(),
                },
                position: Vec2::ZERO,
            },
            SpawnRequest::Missile {
                missile: "arrow".into(),
                direction: Vec2::X,
                origin: Vec2::ZERO,
            },
        ];
        let expected = [
            EntityKind::Player,
            EntityKind::Object,
            EntityKind::Monster,
            EntityKind::Monster,
            EntityKind::Warp,
            EntityKind::Item,
            EntityKind::Missile,
        ];

        for (request, kind) in requests.iter().zip(expected) {
            let entity = factory.spawn(&mut world, TOWN, request).unwrap();
            assert!(entity.is_valid(), "{request:?}");
            assert_eq!(world.get::<Class>(entity).unwrap().kind, kind);
        }
        assert_eq!(world.entity_count(), expected.len());
    }

    #[test]
    fn test_spawn_unknown_keys_are_invalid() {
        let mut factory = fixtures::factory();
        let mut world = World::new();

        let monster = SpawnRequest::Monster {
            monster: "diablo".into(),
            position: Vec2::ZERO,
        };
        let missile = SpawnRequest::Missile {
            missile: "meteor".into(),
            direction: Vec2::X,
            origin: Vec2::ZERO,
        };
        assert_eq!(factory.spawn(&mut world, MOOR, &monster).unwrap(), Entity::INVALID);
        assert_eq!(factory.spawn(&mut world, MOOR, &missile).unwrap(), Entity::INVALID);
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_failed_attach_leaves_nothing_behind() {
        let mut factory = fixtures::factory();
        let stats = fixtures::mon_stats(&factory, "cain1");

        // Enough for every component but the last.
        let mut store = FailingStore {
            inner: World::new(),
            budget: 12,
        };
        let result = factory.create_monster(&mut store, TOWN, &stats, Vec2::ZERO);

        assert!(matches!(result, Err(FactoryError::Storage(_))));
        assert_eq!(store.inner.entity_count(), 0);
        assert_eq!(store.inner.component_count(), 0);
        assert!(factory.behaviors().is_empty());
    }

    #[test]
    fn test_failed_attach_on_first_component() {
        let mut factory = fixtures::factory();
        let mut store = FailingStore {
            inner: World::new(),
            budget: 0,
        };
        let object = PlacedObject {
            id: 0,
            ..PlacedObject::default()
        };
        let result = factory.create_static_object(&mut store, MOOR, &object, Vec2::ZERO);
        assert!(result.is_err());
        assert_eq!(store.inner.entity_count(), 0);
    }

    #[test]
    fn test_destroy_drops_components_and_behaviors() {
        let mut factory = fixtures::factory();
        let mut world = World::new();
        let stats = fixtures::mon_stats(&factory, "zombie1");
        let entity = factory.create_monster(&mut world, MOOR, &stats, Vec2::ZERO).unwrap();
        assert_eq!(factory.behaviors().len(), 1);

        assert!(factory.destroy(&mut world, entity));
        assert!(!world.is_alive(entity));
        assert_eq!(world.component_count(), 0);
        assert!(factory.behaviors().is_empty());
        assert!(!factory.destroy(&mut world, entity));
    }

    #[test]
    fn test_handles_are_reused_after_destroy() {
        let mut factory = fixtures::factory();
        let mut world = World::new();
        let first = factory
            .create_item(
                &mut world,
                ItemInstance {
                    code: "gld".into(),
                    name: "Gold".into(),
                },
                Vec2::ZERO,
            )
            .unwrap();
        factory.destroy(&mut world, first);

        let stats = fixtures::mon_stats(&factory, "zombie1");
        let second = factory.create_monster(&mut world, MOOR, &stats, Vec2::new(1.0, 1.0)).unwrap();
        assert_eq!(second, first);
        assert!(!world.has::<Interactable>(second));
        assert!(!world.has::<Networked>(second));
        assert_eq!(world.get::<Position>(second).unwrap().position, Vec2::new(1.0, 1.0));
    }
}
