//! # ember_ai
//!
//! Behavior resolution for monster entities.
//!
//! A monster's table row names a behavior (`AI` column). The
//! [`BehaviorResolver`] turns that name into a [`BehaviorKind`], builds the
//! matching [`Strategy`] with the monster's [`AiParams`], injects the
//! dependencies the strategy declares through an [`Injector`], and
//! initializes it. Each `(entity, kind)` pair gets exactly one
//! [`BehaviorInstance`] for the entity's lifetime.
//!
//! ## Lifecycle
//!
//! ```text
//! Constructed → Injected → Initialized → Updating ⟲ → Disposed
//! ```
//!
//! No stage is skipped. Updating an instance that has not been initialized
//! is an error, never a silent no-op.

pub mod brain;
pub mod error;
pub mod inject;
pub mod instance;
pub mod kind;
pub mod resolver;
pub mod strategy;

pub use brain::Brain;
pub use error::{BehaviorError, InjectionError};
pub use inject::{Dependency, Injector, Navigator, Senses, Service, Target};
pub use instance::{BehaviorInstance, Lifecycle};
pub use kind::{AiParams, BehaviorKind};
pub use resolver::BehaviorResolver;
pub use strategy::{Behavior, Idle, Npc, Strategy, Zombie, ZombieAction};
