//! # ember-server
//!
//! Headless driver for the simulation core.
//!
//! ## Startup Sequence
//!
//! 1. Read the scenario file: table rows, the zone, and a list of spawns.
//! 2. Load and finalize every table.
//! 3. Compose every spawn; placements that do not resolve are skipped.
//! 4. Run the fixed-timestep tick loop over the monsters' behaviors.

mod scenario;
mod services;
mod tick;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ember_component::World;
use ember_factory::{EntityFactory, FactoryConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use scenario::Scenario;
use services::WorldServices;
use tick::{TickConfig, TickLoop};

#[derive(Parser)]
#[command(name = "ember-server", about = "Compose a scenario's entities and run their behaviors")]
struct Args {
    /// Path to the scenario JSON file
    #[arg(short, long)]
    scenario: PathBuf,

    /// Seed for visual variant selection (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to run (0 = until interrupted)
    #[arg(short, long, default_value_t = 250)]
    ticks: u64,

    /// Ticks per second
    #[arg(long, default_value_t = 25.0, value_parser = parse_tick_rate)]
    tick_rate: f64,
}

fn parse_tick_rate(value: &str) -> Result<f64, String> {
    let rate: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("expected a positive number of ticks per second, got {value}"))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    info!(path = %args.scenario.display(), "loading scenario");
    let scenario = Scenario::open(&args.scenario)
        .with_context(|| format!("failed to load scenario {}", args.scenario.display()))?;
    let (tables, zone, spawns) = scenario.into_parts()?;
    let tables = Arc::new(tables);

    let mut config = FactoryConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut factory = EntityFactory::new(tables, Arc::new(WorldServices), config);
    let mut world = World::new();

    let mut skipped = 0usize;
    for (index, request) in spawns.iter().enumerate() {
        match factory.spawn(&mut world, zone, request) {
            Ok(entity) if entity.is_valid() => {}
            Ok(_) => {
                warn!(index, "spawn skipped");
                skipped += 1;
            }
            Err(err) => {
                error!(index, %err, "spawn failed");
                skipped += 1;
            }
        }
    }
    info!(
        entities = world.entity_count(),
        components = world.component_count(),
        behaviors = factory.behaviors().len(),
        skipped,
        "scenario composed"
    );

    let config = TickConfig {
        tick_rate: args.tick_rate,
        max_ticks: args.ticks,
    };
    let mut tick_loop = TickLoop::new(config, world, factory);
    tick_loop.run()?;

    info!(ticks = tick_loop.tick_id(), "ember-server shut down");
    Ok(())
}
