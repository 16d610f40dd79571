//! Interaction wiring.
//!
//! Entities that can be interacted with carry an [`Interactable`]: a radius
//! and a handler. The composer only wires the handler; whatever detects a
//! player in range invokes it.

use std::fmt;
use std::sync::Arc;

use ember_ai::BehaviorKind;
use ember_component::Entity;
use tracing::debug;

use crate::components::{EntityKind, impl_component};

/// Reacts to an actor interacting with an entity.
pub trait Interactor: Send + Sync {
    fn on_interact(&self, entity: Entity, actor: Entity);
}

/// Who handles an interaction.
#[derive(Clone)]
pub enum InteractionHandler {
    /// A per-kind interactor shared by every entity of that kind.
    Delegate(Arc<dyn Interactor>),
    /// The entity's own behavior (talking NPCs).
    Behavior(BehaviorKind),
}

impl fmt::Debug for InteractionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delegate(_) => f.write_str("Delegate(..)"),
            Self::Behavior(kind) => f.debug_tuple("Behavior").field(kind).finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Interactable {
    pub radius: f32,
    pub handler: InteractionHandler,
}

impl Interactable {
    #[must_use]
    pub fn new(radius: f32, handler: InteractionHandler) -> Self {
        Self { radius, handler }
    }
}

impl_component!(Interactable);

/// The object, warp and item interactors, one each.
#[derive(Clone)]
pub struct Interactors {
    pub object: Arc<dyn Interactor>,
    pub warp: Arc<dyn Interactor>,
    pub item: Arc<dyn Interactor>,
}

impl Interactors {
    #[must_use]
    pub fn new(object: Arc<dyn Interactor>, warp: Arc<dyn Interactor>, item: Arc<dyn Interactor>) -> Self {
        Self { object, warp, item }
    }
}

impl Default for Interactors {
    fn default() -> Self {
        Self {
            object: Arc::new(TracingInteractor(EntityKind::Object)),
            warp: Arc::new(TracingInteractor(EntityKind::Warp)),
            item: Arc::new(TracingInteractor(EntityKind::Item)),
        }
    }
}

impl fmt::Debug for Interactors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interactors").finish_non_exhaustive()
    }
}

/// Interactor that only logs.
#[derive(Debug, Clone, Copy)]
pub struct TracingInteractor(pub EntityKind);

impl Interactor for TracingInteractor {
    fn on_interact(&self, entity: Entity, actor: Entity) {
        debug!(kind = ?self.0, %entity, %actor, "interact");
    }
}
