use std::sync::Arc;

use ember_ai::{AiParams, BehaviorKind};
use ember_component::{ComponentStore, Entity};
use ember_math::{Angle, Position, Size, Vec2, Velocity};
use ember_tables::records::{MonStats, MonStats2};
use rand::Rng;
use tracing::error;

use super::EntityFactory;
use crate::components::{
    BehaviorWrapper, Class, CofAlphas, CofComponents, CofReference, CofTransforms, EntityKind, Monster,
    MovementModes, Networked, PathWrapper, PlacementWrapper,
};
use crate::error::FactoryError;
use crate::interact::{Interactable, InteractionHandler};
use crate::modes::monster::{DEFAULT_MODE, MODE_NU, MODE_RN, MODE_WL};
use crate::placement::{PlacedObject, Zone};

/// Everything a monster needs, resolved before its handle is allocated.
pub(super) struct MonsterPlan {
    stats: Arc<MonStats>,
    stats2: Arc<MonStats2>,
    mode: i32,
    wclass: i32,
    components: CofComponents,
    behavior: BehaviorKind,
    params: AiParams,
}

impl EntityFactory {
    /// Create a monster from its `monstats` row.
    ///
    /// Returns [`Entity::INVALID`] if the linked `monstats2` row, the spawn
    /// mode, the weapon class or a picked component code does not resolve.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::Behavior`] if the row's `AI` names no behavior.
    /// - [`FactoryError::Storage`] if a component cannot be attached.
    pub fn create_monster<W: ComponentStore>(
        &mut self,
        world: &mut W,
        zone: Zone,
        stats: &Arc<MonStats>,
        position: Vec2,
    ) -> Result<Entity, FactoryError> {
        let Some(plan) = self.plan_monster(zone, stats)? else {
            return Ok(Entity::INVALID);
        };
        let entity = world.spawn();
        let attached = self.attach_monster(world, entity, plan, position);
        self.commit(world, entity, attached)
    }

    /// Create the monster a layout placement refers to through `MonPreset`.
    ///
    /// Returns [`Entity::INVALID`] if the placement maps to no `monstats` row,
    /// or if the monster itself does not resolve.
    ///
    /// # Errors
    ///
    /// See [`create_monster`](Self::create_monster).
    pub fn create_dynamic_object<W: ComponentStore>(
        &mut self,
        world: &mut W,
        zone: Zone,
        object: &PlacedObject,
        position: Vec2,
    ) -> Result<Entity, FactoryError> {
        let Some(place) = self.tables.mon_preset.place(zone.act, object.id) else {
            error!(
                act = zone.act,
                id = object.id,
                level = zone.level_id,
                "no MonPreset entry for dynamic object"
            );
            return Ok(Entity::INVALID);
        };
        let Some(stats) = self.tables.mon_stats.get_by_key(place).cloned() else {
            error!(
                place,
                act = zone.act,
                id = object.id,
                level = zone.level_id,
                "unknown dynamic entity id"
            );
            return Ok(Entity::INVALID);
        };

        let Some(plan) = self.plan_monster(zone, &stats)? else {
            return Ok(Entity::INVALID);
        };
        let entity = world.spawn();
        let attached = self.attach_dynamic_object(world, entity, plan, zone, object, position);
        self.commit(world, entity, attached)
    }

    /// Resolve a monster's joins and pick its visual variants.
    ///
    /// `Ok(None)` means a join did not resolve; it has been logged.
    fn plan_monster(&mut self, zone: Zone, stats: &Arc<MonStats>) -> Result<Option<MonsterPlan>, FactoryError> {
        let tables = &self.tables;

        let Some(stats2) = tables.mon_stats2.get_by_key(&stats.mon_stats_ex).cloned() else {
            error!(
                monster = %stats.id,
                monstats2 = %stats.mon_stats_ex,
                level = zone.level_id,
                "unknown monstats2 row"
            );
            return Ok(None);
        };

        let mode = if stats.spawn_mode.is_empty() {
            DEFAULT_MODE
        } else if let Some(mode) = tables.mon_mode.index_of(&stats.spawn_mode) {
            mode
        } else {
            error!(monster = %stats.id, mode = %stats.spawn_mode, "unknown spawn mode");
            return Ok(None);
        };

        let Some(wclass) = tables.weapon_class.index_of(&stats2.base_w) else {
            error!(monster = %stats.id, wclass = %stats2.base_w, "unknown weapon class");
            return Ok(None);
        };

        let behavior: BehaviorKind = stats.ai.parse()?;

        let mut components = CofComponents::default();
        for (slot, component) in components.component.iter_mut().enumerate() {
            let candidates: Vec<&str> = stats2.candidates(slot).collect();
            if candidates.is_empty() {
                continue;
            }
            let code = candidates[self.rng.gen_range(0..candidates.len())];
            let Some(index) = tables.comp_code.index_of(code) else {
                error!(monster = %stats.id, slot, code, "unknown component code");
                return Ok(None);
            };
            *component = index;
        }

        Ok(Some(MonsterPlan {
            stats: Arc::clone(stats),
            params: AiParams::from(stats.normal_ai_params()),
            stats2,
            mode,
            wclass,
            components,
            behavior,
        }))
    }

    fn attach_monster<W: ComponentStore>(
        &mut self,
        world: &mut W,
        entity: Entity,
        plan: MonsterPlan,
        position: Vec2,
    ) -> Result<(), FactoryError> {
        // SizeX and SizeY are equal for every monster; the radius uses SizeX.
        let size = plan.stats2.size_x as f32;

        world.insert(entity, Class::new(EntityKind::Monster, plan.stats.id.clone()))?;
        world.insert(entity, Monster {
            stats: Arc::clone(&plan.stats),
            stats2: Arc::clone(&plan.stats2),
        })?;

        world.insert(entity, Position::from(position))?;
        world.insert(entity, Velocity::with_speeds(plan.stats.velocity, plan.stats.run))?;
        world.insert(entity, Angle::default())?;

        world.insert(entity, CofReference::new(plan.stats.code.clone(), plan.mode).with_wclass(plan.wclass))?;
        world.insert(entity, plan.components)?;
        world.insert(entity, CofAlphas::default())?;
        world.insert(entity, CofTransforms::default())?;

        world.insert(entity, MovementModes::new(MODE_NU, MODE_WL, MODE_RN))?;
        world.insert(entity, Size::new(size))?;

        world.insert(entity, BehaviorWrapper { kind: plan.behavior })?;
        self.behaviors
            .bind(entity, plan.behavior, &plan.params, self.injector.as_ref())?;

        if plan.stats.interact {
            world.insert(entity, Interactable::new(size, InteractionHandler::Behavior(plan.behavior)))?;
        }
        Ok(())
    }

    fn attach_dynamic_object<W: ComponentStore>(
        &mut self,
        world: &mut W,
        entity: Entity,
        plan: MonsterPlan,
        zone: Zone,
        object: &PlacedObject,
        position: Vec2,
    ) -> Result<(), FactoryError> {
        self.attach_monster(world, entity, plan, position)?;
        world.insert(entity, PlacementWrapper {
            act: zone.act,
            object: object.clone(),
        })?;
        if let Some(path) = &object.path {
            world.insert(entity, PathWrapper { path: path.clone() })?;
        }
        world.insert(entity, Networked)?;
        Ok(())
    }
}
