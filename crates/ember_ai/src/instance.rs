//! Per-entity behavior lifecycle.

use ember_component::Entity;
use tracing::warn;

use crate::error::BehaviorError;
use crate::inject::Injector;
use crate::kind::{AiParams, BehaviorKind};
use crate::strategy::{Behavior, Strategy};

/// Lifecycle stage of a [`BehaviorInstance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Constructed,
    Injected,
    Initialized,
    Updating,
    Disposed,
}

/// A strategy bound to one entity, with its lifecycle enforced.
#[derive(Debug)]
pub struct BehaviorInstance {
    entity: Entity,
    strategy: Strategy,
    state: Lifecycle,
}

impl BehaviorInstance {
    /// Construct the strategy for `kind`.
    #[must_use]
    pub fn new(entity: Entity, kind: BehaviorKind, params: &AiParams) -> Self {
        Self {
            entity,
            strategy: Strategy::new(kind, entity, params),
            state: Lifecycle::Constructed,
        }
    }

    /// Ask `injector` for every dependency the strategy declares.
    ///
    /// A dependency the injector cannot supply is logged and left unset.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidTransition`] unless the instance was
    /// just constructed.
    pub fn inject(&mut self, injector: &dyn Injector) -> Result<(), BehaviorError> {
        self.advance(Lifecycle::Constructed, Lifecycle::Injected)?;
        for &dependency in self.strategy.dependencies() {
            match injector.provide(dependency) {
                Ok(service) => self.strategy.inject(service),
                Err(err) => warn!(
                    entity = %self.entity,
                    kind = %self.strategy.kind(),
                    ?dependency,
                    %err,
                    "dependency not injected"
                ),
            }
        }
        Ok(())
    }

    /// Run one-time initialization.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidTransition`] unless the instance was
    /// just injected.
    pub fn initialize(&mut self) -> Result<(), BehaviorError> {
        self.advance(Lifecycle::Injected, Lifecycle::Initialized)?;
        self.strategy.initialize();
        Ok(())
    }

    /// Advance the strategy by `delta` seconds.
    ///
    /// # Errors
    ///
    /// - [`BehaviorError::NotInitialized`] before [`initialize`](Self::initialize).
    /// - [`BehaviorError::InvalidTransition`] after [`dispose`](Self::dispose).
    pub fn update(&mut self, delta: f32) -> Result<(), BehaviorError> {
        self.ensure_live(Lifecycle::Updating)?;
        self.state = Lifecycle::Updating;
        self.strategy.update(delta);
        Ok(())
    }

    /// Forward an interaction from `actor` to the strategy.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    pub fn interact(&mut self, actor: Entity) -> Result<(), BehaviorError> {
        self.ensure_live(Lifecycle::Updating)?;
        self.strategy.interact(actor);
        Ok(())
    }

    /// Retire the instance. Any further call fails.
    pub fn dispose(&mut self) {
        self.state = Lifecycle::Disposed;
    }

    #[must_use]
    pub fn entity(&self) -> Entity {
        self.entity
    }

    #[must_use]
    pub fn kind(&self) -> BehaviorKind {
        self.strategy.kind()
    }

    #[must_use]
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    #[must_use]
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    fn advance(&mut self, from: Lifecycle, to: Lifecycle) -> Result<(), BehaviorError> {
        if self.state != from {
            return Err(BehaviorError::InvalidTransition {
                entity: self.entity,
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    fn ensure_live(&self, to: Lifecycle) -> Result<(), BehaviorError> {
        match self.state {
            Lifecycle::Initialized | Lifecycle::Updating => Ok(()),
            Lifecycle::Constructed | Lifecycle::Injected => {
                Err(BehaviorError::NotInitialized(self.entity))
            }
            Lifecycle::Disposed => Err(BehaviorError::InvalidTransition {
                entity: self.entity,
                from: self.state,
                to,
            }),
        }
    }
}
