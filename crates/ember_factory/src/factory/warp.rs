use std::sync::Arc;

use ember_component::{ComponentStore, Entity};
use ember_math::{Position, TileIndex, Vec2};
use ember_tables::records::{Levels, LvlWarp};
use tracing::error;

use super::EntityFactory;
use crate::components::{Class, EntityKind, Warp};
use crate::error::FactoryError;
use crate::interact::{Interactable, InteractionHandler};
use crate::placement::Zone;

impl EntityFactory {
    /// Create a warp from a warp tile of the zone's level.
    ///
    /// The tile's main index selects the level's warp slot: `Vis` gives the
    /// destination level and `Warp` the `LvlWarp` row. The entity is placed at
    /// `position` shifted by the warp's offset.
    ///
    /// Returns [`Entity::INVALID`] if the slot has no destination or any of
    /// the three rows is missing.
    ///
    /// # Errors
    ///
    /// [`FactoryError::Storage`] if a component cannot be attached.
    pub fn create_warp<W: ComponentStore>(
        &mut self,
        world: &mut W,
        zone: Zone,
        index: TileIndex,
        position: Vec2,
    ) -> Result<Entity, FactoryError> {
        let main_index = index.main_index();
        let Some(level) = self.tables.levels.get(zone.level_id) else {
            error!(level = zone.level_id, "unknown zone level");
            return Ok(Entity::INVALID);
        };
        let Some((destination_id, warp_id)) = level.warp_slot(main_index) else {
            error!(
                level = zone.level_id,
                main_index,
                sub_index = index.sub_index(),
                orientation = index.orientation(),
                "warp to unknown level"
            );
            return Ok(Entity::INVALID);
        };
        let Some(destination) = self.tables.levels.get(destination_id).cloned() else {
            error!(level = zone.level_id, destination = destination_id, "unknown warp destination");
            return Ok(Entity::INVALID);
        };
        let Some(warp) = self.tables.lvl_warp.get(warp_id).cloned() else {
            error!(level = zone.level_id, warp = warp_id, "unknown LvlWarp row");
            return Ok(Entity::INVALID);
        };

        let entity = world.spawn();
        let attached = self.attach_warp(world, entity, index, warp, destination, position);
        self.commit(world, entity, attached)
    }

    fn attach_warp<W: ComponentStore>(
        &self,
        world: &mut W,
        entity: Entity,
        index: TileIndex,
        warp: Arc<LvlWarp>,
        destination: Arc<Levels>,
        position: Vec2,
    ) -> Result<(), FactoryError> {
        let offset = Vec2::new(warp.offset_x as f32, warp.offset_y as f32);
        let handler = InteractionHandler::Delegate(Arc::clone(&self.interactors.warp));

        world.insert(entity, Class::new(EntityKind::Warp, warp.name.clone()))?;
        world.insert(entity, Position::from(position).translated(offset))?;
        world.insert(entity, Interactable::new(self.config.warp_interact_radius, handler))?;
        world.insert(entity, Warp {
            index,
            warp,
            destination,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ember_component::{Signature, World};

    use super::*;
    use crate::fixtures::{self, BROKEN, MOOR, TOWN};

    #[test]
    fn test_warp_joins_level_and_lvl_warp() {
        let mut factory = fixtures::factory();
        let mut world = World::new();
        let index = TileIndex::new(0, 1, 10);
        let e = factory.create_warp(&mut world, TOWN, index, Vec2::new(100.0, 50.0)).unwrap();

        let expected = Signature::new()
            .with::<Class>()
            .with::<Warp>()
            .with::<Position>()
            .with::<Interactable>();
        assert_eq!(world.signature(e), Some(&expected));

        let warp = world.get::<Warp>(e).unwrap();
        assert_eq!(warp.index, index);
        assert_eq!(warp.destination.name, "Blood Moor");
        assert_eq!(warp.warp.id, 0);
        assert_eq!(world.get::<Position>(e).unwrap().position, Vec2::new(102.0, 53.0));
        assert_eq!(world.get::<Interactable>(e).unwrap().radius, 3.0);
    }

    #[test]
    fn test_warp_back_uses_its_own_offset() {
        let mut factory = fixtures::factory();
        let mut world = World::new();
        let e = factory.create_warp(&mut world, MOOR, TileIndex::new(0, 0, 0), Vec2::ZERO).unwrap();
        assert_eq!(world.get::<Warp>(e).unwrap().destination.name, "Rogue Encampment");
        assert_eq!(world.get::<Position>(e).unwrap().position, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_slot_without_destination_is_invalid() {
        let mut factory = fixtures::factory();
        let mut world = World::new();
        // Slot 1 has Vis 0.
        let e = factory.create_warp(&mut world, TOWN, TileIndex::new(1, 0, 0), Vec2::ZERO).unwrap();
        assert_eq!(e, Entity::INVALID);
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_missing_destination_level_is_invalid() {
        let mut factory = fixtures::factory();
        let mut world = World::new();
        let e = factory.create_warp(&mut world, BROKEN, TileIndex::new(0, 0, 0), Vec2::ZERO).unwrap();
        assert_eq!(e, Entity::INVALID);

        let nowhere = Zone { level_id: 77, act: 1 };
        let e = factory.create_warp(&mut world, nowhere, TileIndex::new(0, 0, 0), Vec2::ZERO).unwrap();
        assert_eq!(e, Entity::INVALID);
        assert_eq!(world.component_count(), 0);
    }

    #[test]
    fn test_configured_radius() {
        let mut factory = factory_with_radius(5.0);
        let mut world = World::new();
        let e = factory.create_warp(&mut world, TOWN, TileIndex::new(0, 0, 0), Vec2::ZERO).unwrap();
        assert_eq!(world.get::<Interactable>(e).unwrap().radius, 5.0);
    }

    fn factory_with_radius(radius: f32) -> EntityFactory {
        EntityFactory::new(
            fixtures::tables(),
            Arc::new(fixtures::NoServices),
            crate::config::FactoryConfig::default().with_warp_interact_radius(radius),
        )
    }
}
