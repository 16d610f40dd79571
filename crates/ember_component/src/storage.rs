//! Component storage.
//!
//! [`ComponentStore`] is the capability the entity composer programs against:
//! allocate a handle, attach typed components, tear everything down again.
//! [`World`] is the in-memory implementation, one type-erased column per
//! component type plus a [`Signature`] per live entity.

use std::any::Any;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::component::{Component, ComponentTypeId};
use crate::entity::{Entity, EntityAllocator};
use crate::error::StorageError;
use crate::signature::Signature;

/// Entity-keyed storage addressed by component type.
pub trait ComponentStore {
    /// Allocate a new entity with no components.
    fn spawn(&mut self) -> Entity;

    /// Destroy an entity and every component attached to it.
    ///
    /// Returns `true` if the entity was alive.
    fn despawn(&mut self, entity: Entity) -> bool;

    /// Returns `true` if the entity is alive.
    fn is_alive(&self, entity: Entity) -> bool;

    /// Attach a component, replacing any previous value of the same type.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::EntityNotFound`] if the entity is not alive.
    fn insert<T: Component>(&mut self, entity: Entity, component: T) -> Result<&mut T, StorageError>;

    /// Get a component of type `T`.
    fn get<T: Component>(&self, entity: Entity) -> Option<&T>;

    /// Get a mutable component of type `T`.
    fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T>;

    /// Detach and return a component of type `T`.
    fn remove<T: Component>(&mut self, entity: Entity) -> Option<T>;

    /// The set of component types attached to the entity.
    fn signature(&self, entity: Entity) -> Option<&Signature>;

    /// Returns `true` if the entity has a component of type `T`.
    fn has<T: Component>(&self, entity: Entity) -> bool {
        self.get::<T>(entity).is_some()
    }
}

trait ErasedColumn: Send + Sync {
    fn remove_entity(&mut self, entity: Entity) -> bool;
    fn len(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

struct Column<T> {
    values: HashMap<Entity, T>,
}

impl<T: Component> ErasedColumn for Column<T> {
    fn remove_entity(&mut self, entity: Entity) -> bool {
        self.values.remove(&entity).is_some()
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The simulation's entity and component state.
///
/// Mutated only by the owning simulation thread.
pub struct World {
    /// Entity handle allocator.
    allocator: EntityAllocator,
    /// One column per component type.
    columns: HashMap<ComponentTypeId, Box<dyn ErasedColumn>>,
    /// Component types attached to each live entity.
    signatures: HashMap<Entity, Signature>,
}

impl World {
    /// Create a new empty world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            columns: HashMap::new(),
            signatures: HashMap::new(),
        }
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.signatures.len()
    }

    /// Returns the number of entities carrying a component of type `T`.
    #[must_use]
    pub fn count<T: Component>(&self) -> usize {
        self.columns
            .get(&T::component_type_id())
            .map_or(0, |column| column.len())
    }

    /// Returns the total number of components across all types.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.columns.values().map(|column| column.len()).sum()
    }

    /// Returns an iterator over all live entities.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.signatures.keys().copied()
    }

    fn column<T: Component>(&self) -> Option<&Column<T>> {
        self.columns
            .get(&T::component_type_id())?
            .as_any()
            .downcast_ref::<Column<T>>()
    }

    fn column_mut<T: Component>(&mut self) -> Option<&mut Column<T>> {
        self.columns
            .get_mut(&T::component_type_id())?
            .as_any_mut()
            .downcast_mut::<Column<T>>()
    }
}

impl ComponentStore for World {
    fn spawn(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.signatures.insert(entity, Signature::new());
        entity
    }

    fn despawn(&mut self, entity: Entity) -> bool {
        let Some(signature) = self.signatures.remove(&entity) else {
            return false;
        };
        for type_id in signature.iter() {
            if let Some(column) = self.columns.get_mut(&type_id) {
                column.remove_entity(entity);
            }
        }
        self.allocator.release(entity);
        true
    }

    fn is_alive(&self, entity: Entity) -> bool {
        self.signatures.contains_key(&entity)
    }

    fn insert<T: Component>(&mut self, entity: Entity, component: T) -> Result<&mut T, StorageError> {
        let signature = self
            .signatures
            .get_mut(&entity)
            .ok_or(StorageError::EntityNotFound(entity))?;

        let type_id = T::component_type_id();
        let column = self.columns.entry(type_id).or_insert_with(|| {
            Box::new(Column::<T> {
                values: HashMap::new(),
            })
        });
        let column = column
            .as_any_mut()
            .downcast_mut::<Column<T>>()
            .ok_or(StorageError::ColumnTypeMismatch(T::type_name()))?;

        signature.insert(type_id);
        Ok(match column.values.entry(entity) {
            Entry::Occupied(mut slot) => {
                slot.insert(component);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(component),
        })
    }

    fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.column::<T>()?.values.get(&entity)
    }

    fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.column_mut::<T>()?.values.get_mut(&entity)
    }

    fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        let value = self.column_mut::<T>()?.values.remove(&entity)?;
        if let Some(signature) = self.signatures.get_mut(&entity) {
            signature.remove(T::component_type_id());
        }
        Some(value)
    }

    fn signature(&self, entity: Entity) -> Option<&Signature> {
        self.signatures.get(&entity)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.signatures.len())
            .field("component_types", &self.columns.len())
            .field("components", &self.component_count())
            .finish()
    }
}
