//! The behavior for monsters whose `AI` column is `Idle`.

use ember_component::Entity;

use crate::brain::Brain;
use crate::kind::BehaviorKind;
use crate::strategy::Behavior;

/// Does nothing beyond keeping time.
#[derive(Debug)]
pub struct Idle {
    entity: Entity,
    brain: Brain,
}

impl Idle {
    #[must_use]
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            brain: Brain::default(),
        }
    }

    #[must_use]
    pub fn entity(&self) -> Entity {
        self.entity
    }
}

impl Behavior for Idle {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Idle
    }

    fn update(&mut self, delta: f32) {
        self.brain.update(delta);
    }

    fn brain(&self) -> &Brain {
        &self.brain
    }
}
