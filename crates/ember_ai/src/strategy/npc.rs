//! Town NPCs.
//!
//! No parameter slots are read. Injected [`Senses`] tell the NPC when the
//! actor it is talking to has walked out of [`TALK_RANGE`].

use std::sync::Arc;

use ember_component::Entity;
use tracing::debug;

use crate::brain::Brain;
use crate::inject::{Dependency, Senses, Service};
use crate::kind::BehaviorKind;
use crate::strategy::Behavior;

/// Distance at which an NPC stops talking to an actor who walked off.
pub const TALK_RANGE: f32 = 8.0;

/// Town NPC. Talks to the last actor that interacted with it until the actor
/// walks away.
pub struct Npc {
    entity: Entity,
    brain: Brain,
    senses: Option<Arc<dyn Senses>>,
    talking_to: Option<Entity>,
}

impl Npc {
    #[must_use]
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            brain: Brain::default(),
            senses: None,
            talking_to: None,
        }
    }

    #[must_use]
    pub fn talking_to(&self) -> Option<Entity> {
        self.talking_to
    }
}

impl Behavior for Npc {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Npc
    }

    fn dependencies(&self) -> &'static [Dependency] {
        &[Dependency::Senses]
    }

    fn inject(&mut self, service: Service) {
        if let Service::Senses(senses) = service {
            self.senses = Some(senses);
        }
    }

    fn update(&mut self, delta: f32) {
        if !self.brain.update(delta) {
            return;
        }
        let (Some(actor), Some(senses)) = (self.talking_to, &self.senses) else {
            return;
        };
        let in_range = senses
            .distance(self.entity, actor)
            .is_some_and(|distance| distance <= TALK_RANGE);
        if !in_range {
            debug!(npc = %self.entity, %actor, "actor left");
            self.talking_to = None;
        }
    }

    fn interact(&mut self, actor: Entity) {
        debug!(npc = %self.entity, %actor, "talking");
        self.talking_to = Some(actor);
    }

    fn brain(&self) -> &Brain {
        &self.brain
    }
}

impl std::fmt::Debug for Npc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Npc")
            .field("entity", &self.entity)
            .field("senses", &self.senses.is_some())
            .field("talking_to", &self.talking_to)
            .finish()
    }
}
