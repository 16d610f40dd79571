use std::sync::Arc;

use ember_component::{ComponentStore, Entity};
use ember_math::{Position, Size, Vec2};
use ember_tables::records::Objects;
use tracing::error;

use super::EntityFactory;
use crate::components::{
    Class, CofAlphas, CofComponents, CofReference, CofTransforms, EntityKind, Object, PlacementWrapper,
};
use crate::error::FactoryError;
use crate::interact::{Interactable, InteractionHandler};
use crate::modes::object::DEFAULT_MODE;
use crate::placement::{PlacedObject, Zone};

impl EntityFactory {
    /// Create a static object from a layout placement.
    ///
    /// The placement's local id is looked up in the zone's act of `obj` to
    /// find the `objects` row. Objects are sized by their bounding rect, so
    /// their [`Size`] is left at zero.
    ///
    /// Returns [`Entity::INVALID`] if either lookup fails.
    ///
    /// # Errors
    ///
    /// [`FactoryError::Storage`] if a component cannot be attached.
    pub fn create_static_object<W: ComponentStore>(
        &mut self,
        world: &mut W,
        zone: Zone,
        object: &PlacedObject,
        position: Vec2,
    ) -> Result<Entity, FactoryError> {
        let Some(object_id) = self.tables.obj.object_id(zone.act, object.id) else {
            error!(
                act = zone.act,
                id = object.id,
                level = zone.level_id,
                "no obj entry for static object"
            );
            return Ok(Entity::INVALID);
        };
        let Some(base) = self.tables.objects.get(object_id).cloned() else {
            error!(
                object_id,
                act = zone.act,
                id = object.id,
                level = zone.level_id,
                "unknown static entity id"
            );
            return Ok(Entity::INVALID);
        };

        let entity = world.spawn();
        let attached = self.attach_static_object(world, entity, zone, object, base, position);
        self.commit(world, entity, attached)
    }

    fn attach_static_object<W: ComponentStore>(
        &self,
        world: &mut W,
        entity: Entity,
        zone: Zone,
        object: &PlacedObject,
        base: Arc<Objects>,
        position: Vec2,
    ) -> Result<(), FactoryError> {
        world.insert(entity, Class::new(EntityKind::Object, base.description.clone()))?;
        world.insert(entity, Position::from(position))?;

        if base.draw {
            world.insert(entity, CofReference::new(base.token.clone(), DEFAULT_MODE))?;
            world.insert(entity, CofComponents::filled(CofComponents::NULL))?;
            world.insert(entity, CofAlphas::default())?;
            world.insert(entity, CofTransforms::default())?;
        }

        world.insert(entity, PlacementWrapper {
            act: zone.act,
            object: object.clone(),
        })?;

        if base.is_interactable() {
            let handler = InteractionHandler::Delegate(Arc::clone(&self.interactors.object));
            world.insert(entity, Interactable::new(base.operate_range as f32, handler))?;
        }

        world.insert(entity, Size::default())?;
        world.insert(entity, Object { base })?;
        Ok(())
    }
}
