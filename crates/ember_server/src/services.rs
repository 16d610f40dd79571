//! Behavior dependencies for the headless driver.

use std::sync::Arc;

use ember_ai::{Dependency, InjectionError, Injector, Senses, Service, Target};
use ember_component::Entity;

/// Injector for a world with no perception or pathing backend: senses see
/// nothing and there is no navigator.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldServices;

impl Injector for WorldServices {
    fn provide(&self, dependency: Dependency) -> Result<Service, InjectionError> {
        match dependency {
            Dependency::Senses => Ok(Service::Senses(Arc::new(Blind))),
            Dependency::Navigator => Err(InjectionError::Unavailable(dependency)),
        }
    }
}

struct Blind;

impl Senses for Blind {
    fn nearest_target(&self, _observer: Entity, _range: f32) -> Option<Target> {
        None
    }

    fn distance(&self, _from: Entity, _to: Entity) -> Option<f32> {
        None
    }
}
