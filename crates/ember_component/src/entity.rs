//! Entity handles.
//!
//! Handles are unique while alive and recycled after release. Zero is never
//! allocated; the composer returns it when a spawn could not be resolved.

use serde::{Deserialize, Serialize};

/// An entity handle.
///
/// A handle owns nothing. Everything an entity is lives in the components a
/// [`ComponentStore`](crate::ComponentStore) keeps under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(pub u64);

impl Entity {
    /// Returned in place of a handle when composition was abandoned.
    pub const INVALID: Entity = Entity(0);

    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// `false` only for [`Entity::INVALID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Allocates entity handles.
///
/// Fresh ids increase monotonically from 1. Released ids go onto a free list
/// and are reused last-in, first-out before any fresh id is minted.
#[derive(Debug)]
pub struct EntityAllocator {
    next_id: u64,
    free: Vec<Entity>,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            free: Vec::new(),
        }
    }

    pub fn allocate(&mut self) -> Entity {
        if let Some(entity) = self.free.pop() {
            return entity;
        }
        let id = self.next_id;
        self.next_id += 1;
        Entity(id)
    }

    /// Returns a handle to the allocator so it can be reused.
    ///
    /// Releasing [`Entity::INVALID`] or an id that was never allocated is a
    /// no-op.
    pub fn release(&mut self, entity: Entity) {
        if entity.is_valid() && entity.0 < self.next_id && !self.free.contains(&entity) {
            self.free.push(entity);
        }
    }

    /// Returns the number of handles currently in use.
    #[must_use]
    pub fn live(&self) -> u64 {
        self.next_id - 1 - self.free.len() as u64
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
