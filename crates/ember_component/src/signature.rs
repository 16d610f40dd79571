//! Component signatures.
//!
//! A signature is the set of component types an entity currently carries.
//! Two entities composed the same way share the same signature, which makes
//! it the natural unit for asserting "exactly these components".

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::component::{Component, ComponentTypeId};

/// A compact identifier for a signature, computed from its sorted set of
/// [`ComponentTypeId`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureId(pub u64);

/// The sorted set of component types attached to one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    types: BTreeSet<ComponentTypeId>,
}

impl Signature {
    /// Create an empty signature.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add component type `T`.
    #[must_use]
    pub fn with<T: Component>(mut self) -> Self {
        self.types.insert(T::component_type_id());
        self
    }

    /// Add a component type. Returns `false` if it was already present.
    pub fn insert(&mut self, type_id: ComponentTypeId) -> bool {
        self.types.insert(type_id)
    }

    /// Remove a component type. Returns `true` if it was present.
    pub fn remove(&mut self, type_id: ComponentTypeId) -> bool {
        self.types.remove(&type_id)
    }

    /// Returns `true` if the signature contains the given component type.
    #[must_use]
    pub fn contains(&self, type_id: ComponentTypeId) -> bool {
        self.types.contains(&type_id)
    }

    /// Returns `true` if every type in `other` is also in `self`.
    #[must_use]
    pub fn is_superset_of(&self, other: &Signature) -> bool {
        self.types.is_superset(&other.types)
    }

    /// Number of component types in the signature.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if the signature holds no component types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate the component types in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = ComponentTypeId> + '_ {
        self.types.iter().copied()
    }

    /// Compute the signature id.
    ///
    /// The result is deterministic: the same set of types always produces the
    /// same id regardless of insertion order.
    #[must_use]
    pub fn id(&self) -> SignatureId {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        for ty in &self.types {
            ty.hash(&mut hasher);
        }
        SignatureId(hasher.finish())
    }
}

impl FromIterator<ComponentTypeId> for Signature {
    fn from_iter<I: IntoIterator<Item = ComponentTypeId>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_id_deterministic() {
        let sig: Signature = [ComponentTypeId(1), ComponentTypeId(2)].into_iter().collect();
        assert_eq!(sig.id(), sig.clone().id());
    }

    #[test]
    fn test_signature_id_order_independent() {
        let mut a = Signature::new();
        a.insert(ComponentTypeId(1));
        a.insert(ComponentTypeId(2));

        let mut b = Signature::new();
        b.insert(ComponentTypeId(2));
        b.insert(ComponentTypeId(1));

        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_superset() {
        let full: Signature = [ComponentTypeId(1), ComponentTypeId(2), ComponentTypeId(3)]
            .into_iter()
            .collect();
        let part: Signature = [ComponentTypeId(1), ComponentTypeId(3)].into_iter().collect();
        assert!(full.is_superset_of(&part));
        assert!(!part.is_superset_of(&full));
    }

    #[test]
    fn test_insert_remove() {
        let mut sig = Signature::new();
        assert!(sig.insert(ComponentTypeId(7)));
        assert!(!sig.insert(ComponentTypeId(7)));
        assert!(sig.contains(ComponentTypeId(7)));
        assert!(sig.remove(ComponentTypeId(7)));
        assert!(sig.is_empty());
    }
}
