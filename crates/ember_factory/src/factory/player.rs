use ember_component::{ComponentStore, Entity};
use ember_math::{Angle, Position, Size, Vec2, Velocity};

use super::EntityFactory;
use crate::components::{
    Class, CofAlphas, CofComponents, CofReference, CofTransforms, EntityKind, MovementModes, Networked,
    Player, Running, ZoneAware,
};
use crate::error::FactoryError;
use crate::modes::player::{DEFAULT_MODE, MODE_RN, MODE_TN, MODE_TW, SPEED_RUN, SPEED_WALK};
use crate::placement::CharacterData;

impl EntityFactory {
    /// Create a player character.
    ///
    /// # Errors
    ///
    /// [`FactoryError::Storage`] if a component cannot be attached.
    pub fn create_player<W: ComponentStore>(
        &mut self,
        world: &mut W,
        data: CharacterData,
        position: Vec2,
    ) -> Result<Entity, FactoryError> {
        let entity = world.spawn();
        let attached = Self::attach_player(world, entity, data, position);
        self.commit(world, entity, attached)
    }

    fn attach_player<W: ComponentStore>(
        world: &mut W,
        entity: Entity,
        data: CharacterData,
        position: Vec2,
    ) -> Result<(), FactoryError> {
        let token = data.class.token();
        world.insert(entity, Class::new(EntityKind::Player, data.name.clone()))?;
        world.insert(entity, Player { data })?;

        world.insert(entity, Position::from(position))?;
        world.insert(entity, Velocity::with_speeds(SPEED_WALK, SPEED_RUN))?;
        world.insert(entity, Angle::default())?;

        world.insert(entity, CofReference::new(token, DEFAULT_MODE))?;
        world.insert(entity, CofComponents::default())?;
        world.insert(entity, CofAlphas::default())?;
        world.insert(entity, CofTransforms::default())?;

        world.insert(entity, MovementModes::new(MODE_TN, MODE_TW, MODE_RN))?;
        world.insert(entity, Size::new(Size::MEDIUM))?;

        world.insert(entity, Running)?;
        world.insert(entity, Networked)?;
        world.insert(entity, ZoneAware)?;
        Ok(())
    }
}
