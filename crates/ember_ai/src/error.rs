//! Behavior errors.

use ember_component::Entity;

use crate::inject::Dependency;
use crate::instance::Lifecycle;

/// Errors raised while resolving or driving a behavior.
#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    /// The behavior id has no matching strategy.
    #[error("unknown behavior `{0}`")]
    UnknownBehavior(String),

    /// A lifecycle call arrived out of order.
    #[error("entity {entity}: cannot go from {from:?} to {to:?}")]
    InvalidTransition {
        entity: Entity,
        from: Lifecycle,
        to: Lifecycle,
    },

    /// `update` or `interact` before `initialize`.
    #[error("entity {0}: behavior used before initialization")]
    NotInitialized(Entity),
}

/// A dependency could not be supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InjectionError {
    #[error("{0:?} is not available")]
    Unavailable(Dependency),
}
