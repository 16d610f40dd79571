//! # ember_component
//!
//! Entity handles and typed component storage for composed simulation
//! entities.
//!
//! This crate provides:
//!
//! - [`Component`]: implemented by every value that can be attached to an entity.
//! - [`Entity`]: lightweight `u64` entity handles.
//! - [`EntityAllocator`]: handle allocator with id recycling.
//! - [`Signature`]: the set of component types an entity carries.
//! - [`ComponentStore`]: the abstract storage capability the composer uses.
//! - [`World`]: the in-memory [`ComponentStore`] used by the simulation.

pub mod component;
pub mod entity;
pub mod error;
pub mod signature;
pub mod storage;

pub use component::{Component, ComponentTypeId};
pub use entity::{Entity, EntityAllocator};
pub use error::StorageError;
pub use signature::{Signature, SignatureId};
pub use storage::{ComponentStore, World};
