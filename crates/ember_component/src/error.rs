//! Storage-layer error types.

use crate::entity::Entity;

/// Errors that can occur while mutating component storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The entity is not alive in this store.
    #[error("entity {0} not found")]
    EntityNotFound(Entity),

    /// Two component types hash to the same [`ComponentTypeId`](crate::ComponentTypeId).
    #[error("component column for '{0}' holds a different type")]
    ColumnTypeMismatch(&'static str),
}
