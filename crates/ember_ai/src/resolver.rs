//! The behavior resolver.
//!
//! Maps `(entity, behavior kind)` to the one [`BehaviorInstance`] that entity
//! owns for that kind, building and initializing it on first resolution.

use std::collections::BTreeMap;

use ember_component::Entity;
use tracing::{debug, warn};

use crate::error::BehaviorError;
use crate::inject::Injector;
use crate::instance::BehaviorInstance;
use crate::kind::{AiParams, BehaviorKind};

/// Cache of live behavior instances.
///
/// Instances are kept in entity order, so [`update_all`](Self::update_all)
/// visits them deterministically.
#[derive(Debug, Default)]
pub struct BehaviorResolver {
    instances: BTreeMap<(Entity, BehaviorKind), BehaviorInstance>,
}

impl BehaviorResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a table-declared behavior id for `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::UnknownBehavior`] if `behavior_id` names no
    /// strategy.
    pub fn resolve(
        &mut self,
        entity: Entity,
        behavior_id: &str,
        params: &AiParams,
        injector: &dyn Injector,
    ) -> Result<&mut BehaviorInstance, BehaviorError> {
        let kind = behavior_id.parse()?;
        self.resolve_kind(entity, kind, params, injector)
    }

    /// Return the instance for `(entity, kind)`, constructing, injecting and
    /// initializing it if there is none yet. An existing instance is returned
    /// as is; `params` only apply on first resolution.
    ///
    /// # Errors
    ///
    /// Propagates lifecycle errors from a freshly built instance.
    pub fn resolve_kind(
        &mut self,
        entity: Entity,
        kind: BehaviorKind,
        params: &AiParams,
        injector: &dyn Injector,
    ) -> Result<&mut BehaviorInstance, BehaviorError> {
        use std::collections::btree_map::Entry;

        match self.instances.entry((entity, kind)) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                let mut instance = BehaviorInstance::new(entity, kind, params);
                instance.inject(injector)?;
                instance.initialize()?;
                debug!(%entity, %kind, "behavior initialized");
                Ok(slot.insert(instance))
            }
        }
    }

    /// Build the instance for a freshly spawned `entity`.
    ///
    /// Handles are recycled, so instances still cached under `entity` belong
    /// to a previous owner. They are disposed first; the new entity never
    /// inherits another entity's state.
    ///
    /// # Errors
    ///
    /// Propagates lifecycle errors from the new instance.
    pub fn bind(
        &mut self,
        entity: Entity,
        kind: BehaviorKind,
        params: &AiParams,
        injector: &dyn Injector,
    ) -> Result<&mut BehaviorInstance, BehaviorError> {
        let stale = self.dispose(entity);
        if stale > 0 {
            warn!(%entity, stale, "disposed behaviors left under a reused handle");
        }
        self.resolve_kind(entity, kind, params, injector)
    }

    #[must_use]
    pub fn get(&self, entity: Entity, kind: BehaviorKind) -> Option<&BehaviorInstance> {
        self.instances.get(&(entity, kind))
    }

    pub fn get_mut(&mut self, entity: Entity, kind: BehaviorKind) -> Option<&mut BehaviorInstance> {
        self.instances.get_mut(&(entity, kind))
    }

    /// Update every instance by `delta` seconds.
    pub fn update_all(&mut self, delta: f32) {
        for instance in self.instances.values_mut() {
            if let Err(err) = instance.update(delta) {
                warn!(entity = %instance.entity(), %err, "behavior update failed");
            }
        }
    }

    /// Forward an interaction from `actor` to `entity`'s `kind` behavior.
    ///
    /// Returns `Ok(false)` if the entity has no such behavior.
    ///
    /// # Errors
    ///
    /// Propagates lifecycle errors from the instance.
    pub fn interact(
        &mut self,
        entity: Entity,
        kind: BehaviorKind,
        actor: Entity,
    ) -> Result<bool, BehaviorError> {
        let Some(instance) = self.instances.get_mut(&(entity, kind)) else {
            return Ok(false);
        };
        instance.interact(actor)?;
        Ok(true)
    }

    /// Dispose and drop every instance owned by `entity`. Returns how many
    /// were dropped.
    pub fn dispose(&mut self, entity: Entity) -> usize {
        let keys: Vec<_> = self
            .instances
            .range((entity, BehaviorKind::Idle)..=(entity, BehaviorKind::Npc))
            .map(|(key, _)| *key)
            .collect();
        for key in &keys {
            if let Some(mut instance) = self.instances.remove(key) {
                instance.dispose();
                debug!(%entity, kind = %key.1, "behavior disposed");
            }
        }
        keys.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
