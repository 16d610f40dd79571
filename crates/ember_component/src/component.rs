//! The [`Component`] trait.
//!
//! A component type is identified by a [`ComponentTypeId`] hashed from its
//! name, not from `std::any::TypeId`, so ids are identical across builds and
//! can be written into logs or sent to peers.

use std::fmt;

use serde::{Deserialize, Serialize};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// FNV-1a 64 of a component type's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    /// Hash a component name.
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash = (hash ^ bytes[i] as u64).wrapping_mul(FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }
}

impl fmt::Display for ComponentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Data that can be attached to an entity.
///
/// An entity has a component only after one was inserted for it; there are no
/// implicit defaults. `Send + Sync` lets a store be read from other threads
/// once composition is done.
///
/// ```rust
/// use ember_component::Component;
///
/// struct Burning {
///     frames_left: u32,
/// }
///
/// impl Component for Burning {
///     fn type_name() -> &'static str {
///         "Burning"
///     }
/// }
/// ```
pub trait Component: Send + Sync + 'static {
    /// Stable name the type id is hashed from.
    fn type_name() -> &'static str;

    fn component_type_id() -> ComponentTypeId {
        ComponentTypeId::from_name(Self::type_name())
    }
}
