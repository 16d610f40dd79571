//! Melee monster that walks at whatever it sees.
//!
//! Parameters:
//!
//! | slot | meaning |
//! |---|---|
//! | 0 | sight range, subtiles |
//! | 1 | attack reach, subtiles |
//! | 2 | think delay, frames |

use std::sync::Arc;

use ember_component::Entity;
use tracing::trace;

use crate::brain::Brain;
use crate::inject::{Dependency, Navigator, Senses, Service};
use crate::kind::{AiParams, BehaviorKind};
use crate::strategy::Behavior;

const SIGHT_RANGE: usize = 0;
const REACH: usize = 1;
const THINK_DELAY: usize = 2;

/// What the zombie decided on its last think.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZombieAction {
    Idle,
    Approach(Entity),
    Attack(Entity),
}

pub struct Zombie {
    entity: Entity,
    brain: Brain,
    sight_range: f32,
    reach: f32,
    senses: Option<Arc<dyn Senses>>,
    navigator: Option<Arc<dyn Navigator>>,
    action: ZombieAction,
}

impl Zombie {
    #[must_use]
    pub fn new(entity: Entity, params: &AiParams) -> Self {
        Self {
            entity,
            brain: Brain::new(params.get(THINK_DELAY)),
            sight_range: params.get(SIGHT_RANGE).max(0) as f32,
            reach: params.get(REACH).max(0) as f32,
            senses: None,
            navigator: None,
            action: ZombieAction::Idle,
        }
    }

    #[must_use]
    pub fn action(&self) -> ZombieAction {
        self.action
    }

    #[must_use]
    pub fn sight_range(&self) -> f32 {
        self.sight_range
    }

    #[must_use]
    pub fn reach(&self) -> f32 {
        self.reach
    }

    fn think(&mut self) -> ZombieAction {
        let Some(senses) = &self.senses else {
            return ZombieAction::Idle;
        };
        match senses.nearest_target(self.entity, self.sight_range) {
            None => ZombieAction::Idle,
            Some(target) if target.distance <= self.reach => ZombieAction::Attack(target.entity),
            Some(target) => ZombieAction::Approach(target.entity),
        }
    }
}

impl Behavior for Zombie {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Zombie
    }

    fn dependencies(&self) -> &'static [Dependency] {
        &[Dependency::Senses, Dependency::Navigator]
    }

    fn inject(&mut self, service: Service) {
        match service {
            Service::Senses(senses) => self.senses = Some(senses),
            Service::Navigator(navigator) => self.navigator = Some(navigator),
        }
    }

    fn update(&mut self, delta: f32) {
        if !self.brain.update(delta) {
            return;
        }

        let action = self.think();
        if action != self.action {
            trace!(entity = %self.entity, ?action, "zombie changed action");
        }
        if let Some(navigator) = &self.navigator {
            match action {
                ZombieAction::Approach(target) => navigator.steer_toward(self.entity, target),
                ZombieAction::Idle | ZombieAction::Attack(_) => navigator.halt(self.entity),
            }
        }
        self.action = action;
    }

    fn brain(&self) -> &Brain {
        &self.brain
    }
}

impl std::fmt::Debug for Zombie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Zombie")
            .field("entity", &self.entity)
            .field("sight_range", &self.sight_range)
            .field("reach", &self.reach)
            .field("senses", &self.senses.is_some())
            .field("navigator", &self.navigator.is_some())
            .field("action", &self.action)
            .finish()
    }
}
