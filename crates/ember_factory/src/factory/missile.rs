use std::sync::Arc;

use ember_component::{ComponentStore, Entity};
use ember_math::{Angle, Position, Vec2, Velocity};
use ember_tables::records::Missiles;

use super::EntityFactory;
use crate::components::{Class, EntityKind, Missile};
use crate::error::FactoryError;

impl EntityFactory {
    /// Launch a missile from `origin` along `direction` at the missile's
    /// speed. It lives for the missile's `Range`.
    ///
    /// # Errors
    ///
    /// [`FactoryError::Storage`] if a component cannot be attached.
    pub fn create_missile<W: ComponentStore>(
        &mut self,
        world: &mut W,
        missile: &Arc<Missiles>,
        direction: Vec2,
        origin: Vec2,
    ) -> Result<Entity, FactoryError> {
        let entity = world.spawn();
        let attached = Self::attach_missile(world, entity, missile, direction, origin);
        self.commit(world, entity, attached)
    }

    fn attach_missile<W: ComponentStore>(
        world: &mut W,
        entity: Entity,
        missile: &Arc<Missiles>,
        direction: Vec2,
        origin: Vec2,
    ) -> Result<(), FactoryError> {
        world.insert(entity, Class::new(EntityKind::Missile, missile.missile.clone()))?;
        world.insert(entity, Missile {
            missile: Arc::clone(missile),
            origin,
            range: missile.range,
        })?;
        world.insert(entity, Position::from(origin))?;
        world.insert(entity, Velocity::directed(direction, missile.vel))?;
        world.insert(entity, Angle::toward(direction))?;
        Ok(())
    }
}
