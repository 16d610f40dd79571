//! Fixed-timestep tick loop.
//!
//! Each tick advances every monster behavior by one step of `1 / tick_rate`
//! seconds.

use std::time::{Duration, Instant};

use ember_component::World;
use ember_factory::EntityFactory;
use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Simulation steps per second. Behaviors see `1 / tick_rate` as their delta.
    pub tick_rate: f64,
    /// Stop after this many steps. 0 runs until the process is killed.
    pub max_ticks: u64,
}

impl TickConfig {
    /// Wall-clock length of one step.
    ///
    /// # Errors
    ///
    /// Fails unless `tick_rate` is finite and positive.
    pub fn step(&self) -> Result<Duration> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            bail!("tick rate must be a positive number, got {}", self.tick_rate);
        }
        Duration::try_from_secs_f64(1.0 / self.tick_rate)
            .with_context(|| format!("tick rate {} has no representable step", self.tick_rate))
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_rate: 25.0,
            max_ticks: 0,
        }
    }
}

/// Owns the composed world and steps its behaviors.
#[derive(Debug)]
pub struct TickLoop {
    tick_id: u64,
    config: TickConfig,
    world: World,
    factory: EntityFactory,
}

impl TickLoop {
    #[must_use]
    pub fn new(config: TickConfig, world: World, factory: EntityFactory) -> Self {
        Self {
            tick_id: 0,
            config,
            world,
            factory,
        }
    }

    #[must_use]
    pub fn tick_id(&self) -> u64 {
        self.tick_id
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[must_use]
    pub fn factory(&self) -> &EntityFactory {
        &self.factory
    }

    /// Advance every behavior by `delta` seconds.
    pub fn tick(&mut self, delta: f32) {
        self.tick_id += 1;
        debug!(
            tick_id = self.tick_id,
            delta,
            entities = self.world.entity_count(),
            behaviors = self.factory.behaviors().len(),
            "tick"
        );
        self.factory.behaviors_mut().update_all(delta);
    }

    /// Step at `tick_rate` until `max_ticks` is reached.
    ///
    /// The delta handed to behaviors is always the nominal step, even when a
    /// step overruns its budget.
    ///
    /// # Errors
    ///
    /// See [`TickConfig::step`].
    pub fn run(&mut self) -> Result<()> {
        let step = self.config.step()?;
        let delta = step.as_secs_f32();
        info!(
            tick_rate = self.config.tick_rate,
            max_ticks = self.config.max_ticks,
            behaviors = self.factory.behaviors().len(),
            "simulation started"
        );

        while self.config.max_ticks == 0 || self.tick_id < self.config.max_ticks {
            let started = Instant::now();
            self.tick(delta);

            match step.checked_sub(started.elapsed()) {
                Some(remaining) => std::thread::sleep(remaining),
                None => warn!(
                    tick_id = self.tick_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    budget_ms = step.as_millis() as u64,
                    "tick overran its step"
                ),
            }
        }
        info!(ticks = self.tick_id, "simulation finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ember_ai::{Behavior, BehaviorKind};
    use ember_factory::FactoryConfig;
    use ember_math::Vec2;
    use ember_tables::Tables;
    use ember_tables::records::{MonStats, MonStats2, WeaponClass};

    use super::*;
    use crate::services::WorldServices;

    fn tick_loop(config: TickConfig) -> (TickLoop, ember_component::Entity) {
        let rows = ember_tables::TableRows {
            mon_stats: vec![MonStats {
                id: "zombie1".into(),
                mon_stats_ex: "zombie1".into(),
                ai: "Zombie".into(),
                ..MonStats::default()
            }],
            mon_stats2: vec![MonStats2 {
                id: "zombie1".into(),
                base_w: "HTH".into(),
                ..MonStats2::default()
            }],
            weapon_class: vec![WeaponClass::new("HTH")],
            ..ember_tables::TableRows::default()
        };
        let tables = Arc::new(Tables::load(rows).unwrap());
        let stats = tables.mon_stats.get_by_key("zombie1").cloned().unwrap();

        let mut factory = EntityFactory::new(tables, Arc::new(WorldServices), FactoryConfig::default());
        let mut world = World::new();
        let zone = ember_factory::Zone { level_id: 1, act: 1 };
        let zombie = factory.create_monster(&mut world, zone, &stats, Vec2::ZERO).unwrap();
        (TickLoop::new(config, world, factory), zombie)
    }

    #[test]
    fn test_tick_advances_counter_and_behaviors() {
        let (mut tick_loop, zombie) = tick_loop(TickConfig::default());
        assert_eq!(tick_loop.tick_id(), 0);
        tick_loop.tick(0.04);
        tick_loop.tick(0.04);
        assert_eq!(tick_loop.tick_id(), 2);

        let instance = tick_loop.factory().behaviors().get(zombie, BehaviorKind::Zombie).unwrap();
        assert_eq!(instance.strategy().brain().thinks(), 2);
        assert_eq!(tick_loop.world().entity_count(), 1);
    }

    #[test]
    fn test_step_is_inverse_of_rate() {
        assert_eq!(TickConfig::default().step().unwrap(), Duration::from_millis(40));
    }

    #[test]
    fn test_step_rejects_unusable_rates() {
        for tick_rate in [0.0, -25.0, f64::NAN, f64::INFINITY, 1e-300] {
            let config = TickConfig {
                tick_rate,
                max_ticks: 1,
            };
            assert!(config.step().is_err(), "{tick_rate}");
        }
    }

    #[test]
    fn test_run_with_zero_rate_fails_without_ticking() {
        let config = TickConfig {
            tick_rate: 0.0,
            max_ticks: 1,
        };
        let (mut tick_loop, _) = tick_loop(config);
        assert!(tick_loop.run().is_err());
        assert_eq!(tick_loop.tick_id(), 0);
    }

    #[test]
    fn test_run_limited_ticks() {
        let config = TickConfig {
            tick_rate: 1000.0,
            max_ticks: 5,
        };
        let (mut tick_loop, _) = tick_loop(config);
        tick_loop.run().unwrap();
        assert_eq!(tick_loop.tick_id(), 5);
    }
}
