//! AI strategies.
//!
//! Every strategy implements [`Behavior`]. [`Strategy`] is the closed set of
//! strategies a [`BehaviorKind`] can select, dispatching to the variant.

mod idle;
mod npc;
mod zombie;

pub use idle::Idle;
pub use npc::Npc;
pub use zombie::{Zombie, ZombieAction};

use ember_component::Entity;

use crate::brain::Brain;
use crate::inject::{Dependency, Service};
use crate::kind::{AiParams, BehaviorKind};

/// The capability set every strategy exposes.
pub trait Behavior {
    /// The kind this strategy implements.
    fn kind(&self) -> BehaviorKind;

    /// Dependencies to inject after construction.
    fn dependencies(&self) -> &'static [Dependency] {
        &[]
    }

    /// Receive one declared dependency.
    fn inject(&mut self, _service: Service) {}

    /// One-time setup, after injection.
    fn initialize(&mut self) {}

    /// Advance by `delta` seconds.
    fn update(&mut self, delta: f32);

    /// `actor` interacted with the controlled entity.
    fn interact(&mut self, _actor: Entity) {}

    /// The shared clock and think timer.
    fn brain(&self) -> &Brain;
}

/// One strategy per [`BehaviorKind`].
#[derive(Debug)]
pub enum Strategy {
    Idle(Idle),
    Zombie(Zombie),
    Npc(Npc),
}

impl Strategy {
    /// Build the strategy for `kind`, controlling `entity`.
    #[must_use]
    pub fn new(kind: BehaviorKind, entity: Entity, params: &AiParams) -> Self {
        match kind {
            BehaviorKind::Idle => Self::Idle(Idle::new(entity)),
            BehaviorKind::Zombie => Self::Zombie(Zombie::new(entity, params)),
            BehaviorKind::Npc => Self::Npc(Npc::new(entity)),
        }
    }

    fn as_behavior(&self) -> &dyn Behavior {
        match self {
            Self::Idle(s) => s,
            Self::Zombie(s) => s,
            Self::Npc(s) => s,
        }
    }

    fn as_behavior_mut(&mut self) -> &mut dyn Behavior {
        match self {
            Self::Idle(s) => s,
            Self::Zombie(s) => s,
            Self::Npc(s) => s,
        }
    }
}

impl Behavior for Strategy {
    fn kind(&self) -> BehaviorKind {
        self.as_behavior().kind()
    }

    fn dependencies(&self) -> &'static [Dependency] {
        self.as_behavior().dependencies()
    }

    fn inject(&mut self, service: Service) {
        self.as_behavior_mut().inject(service);
    }

    fn initialize(&mut self) {
        self.as_behavior_mut().initialize();
    }

    fn update(&mut self, delta: f32) {
        self.as_behavior_mut().update(delta);
    }

    fn interact(&mut self, actor: Entity) {
        self.as_behavior_mut().interact(actor);
    }

    fn brain(&self) -> &Brain {
        self.as_behavior().brain()
    }
}
