use std::sync::Arc;

use ember_component::{ComponentStore, Entity};
use ember_math::{Position, Vec2};

use super::EntityFactory;
use crate::components::{Class, EntityKind, Item};
use crate::error::FactoryError;
use crate::interact::{Interactable, InteractionHandler};
use crate::placement::ItemInstance;

impl EntityFactory {
    /// Drop an already constructed item on the ground.
    ///
    /// # Errors
    ///
    /// [`FactoryError::Storage`] if a component cannot be attached.
    pub fn create_item<W: ComponentStore>(
        &mut self,
        world: &mut W,
        item: ItemInstance,
        position: Vec2,
    ) -> Result<Entity, FactoryError> {
        let entity = world.spawn();
        let attached = self.attach_item(world, entity, item, position);
        self.commit(world, entity, attached)
    }

    fn attach_item<W: ComponentStore>(
        &self,
        world: &mut W,
        entity: Entity,
        item: ItemInstance,
        position: Vec2,
    ) -> Result<(), FactoryError> {
        let handler = InteractionHandler::Delegate(Arc::clone(&self.interactors.item));
        world.insert(entity, Class::new(EntityKind::Item, item.name.clone()))?;
        world.insert(entity, Item { item })?;
        world.insert(entity, Position::from(position))?;
        world.insert(entity, Interactable::new(self.config.item_interact_radius, handler))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ember_component::{Signature, World};

    use super::*;
    use crate::fixtures;
    use crate::interact::{Interactor, Interactors};

    struct Pickup;

    impl Interactor for Pickup {
        fn on_interact(&self, _entity: Entity, _actor: Entity) {}
    }

    #[test]
    fn test_item_is_interactable_at_fixed_radius() {
        let mut factory = fixtures::factory();
        let mut world = World::new();
        let item = ItemInstance {
            code: "hp1".into(),
            name: "Minor Healing Potion".into(),
        };
        let e = factory.create_item(&mut world, item.clone(), Vec2::new(3.0, 3.0)).unwrap();

        let expected = Signature::new()
            .with::<Class>()
            .with::<Item>()
            .with::<Position>()
            .with::<Interactable>();
        assert_eq!(world.signature(e), Some(&expected));
        assert_eq!(world.get::<Item>(e).unwrap().item, item);
        assert_eq!(world.get::<Interactable>(e).unwrap().radius, 1.0);
    }

    #[test]
    fn test_every_item_shares_the_item_interactor() {
        let pickup: Arc<dyn Interactor> = Arc::new(Pickup);
        let defaults = Interactors::default();
        let mut factory = fixtures::factory().with_interactors(Interactors {
            item: Arc::clone(&pickup),
            ..defaults
        });
        let mut world = World::new();

        for code in ["gld", "key"] {
            let item = ItemInstance {
                code: code.into(),
                name: code.into(),
            };
            let e = factory.create_item(&mut world, item, Vec2::ZERO).unwrap();
            let InteractionHandler::Delegate(handler) = &world.get::<Interactable>(e).unwrap().handler else {
                panic!("expected the item interactor");
            };
            assert!(Arc::ptr_eq(handler, &pickup));
        }
    }
}
