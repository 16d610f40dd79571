//! Deferred dependencies.
//!
//! Strategies declare what they need as [`Dependency`] tags. After a strategy
//! is constructed the resolver asks an [`Injector`] for each one, exactly once.
//! A dependency the injector cannot supply is logged and left unset, so
//! strategies must cope with a missing service.

use std::fmt;
use std::sync::Arc;

use ember_component::Entity;

use crate::error::InjectionError;

/// Something a strategy can ask to have injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    Senses,
    Navigator,
}

/// Something an entity perceives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub entity: Entity,
    pub distance: f32,
}

/// Perception queries.
pub trait Senses: Send + Sync {
    /// The closest hostile entity within `range` of `observer`.
    fn nearest_target(&self, observer: Entity, range: f32) -> Option<Target>;

    /// Distance between two live entities.
    fn distance(&self, from: Entity, to: Entity) -> Option<f32>;
}

/// Movement requests.
pub trait Navigator: Send + Sync {
    /// Start moving `entity` toward `target`.
    fn steer_toward(&self, entity: Entity, target: Entity);

    /// Stop moving `entity`.
    fn halt(&self, entity: Entity);
}

/// A supplied dependency.
#[derive(Clone)]
pub enum Service {
    Senses(Arc<dyn Senses>),
    Navigator(Arc<dyn Navigator>),
}

impl Service {
    #[must_use]
    pub fn dependency(&self) -> Dependency {
        match self {
            Self::Senses(_) => Dependency::Senses,
            Self::Navigator(_) => Dependency::Navigator,
        }
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Service").field(&self.dependency()).finish()
    }
}

/// Supplies strategy dependencies.
pub trait Injector: Send + Sync {
    /// Provide `dependency`.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError::Unavailable`] if this injector cannot supply it.
    fn provide(&self, dependency: Dependency) -> Result<Service, InjectionError>;
}
