//! Composer errors.
//!
//! Unresolved joins are not errors: they are logged and the composer returns
//! [`Entity::INVALID`](ember_component::Entity::INVALID). The variants here
//! abort creation of the one entity and are propagated to the caller.

use ember_ai::BehaviorError;
use ember_component::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// A component could not be attached.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The monster's behavior could not be resolved.
    #[error(transparent)]
    Behavior(#[from] BehaviorError),
}
