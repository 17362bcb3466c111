//! plaza — smallest example for the rust_crowd steering framework.
//!
//! Simulates pedestrians circulating a 60 × 60 m plaza: two looping patrol
//! routes around a central fountain, plus a spawner that trickles in
//! wanderers at the south gate.  Scale comment: bump MAX_AGENTS and the
//! grid dimensions to run tens of thousands of agents with the `parallel`
//! feature enabled on crowd-sim.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crowd_agent::AgentSeed;
use crowd_core::{CrowdConfig, ObstacleRecord, Vec3};
use crowd_output::{CrowdOutputObserver, CsvWriter};
use crowd_path::{PathAsset, PathSeed};
use crowd_sim::{CrowdSimBuilder, SpawnPlan, SpawnRequest};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const SIM_SECS: u64 = 60;
const TICKS_PER_SEC: u64 = 60;
const SNAPSHOT_INTERVAL: u64 = 30; // 2 captures per simulated second
const PATROL_COUNT: usize = 12;
const MAX_AGENTS: usize = 40;

// ── Scene ─────────────────────────────────────────────────────────────────────

/// Clockwise circuit around the fountain, 10 m out.
fn outer_circuit() -> std::sync::Arc<PathAsset> {
    PathAsset::new(vec![
        Vec3::new(-10.0, 0.0, -10.0),
        Vec3::new(10.0, 0.0, -10.0),
        Vec3::new(10.0, 0.0, 10.0),
        Vec3::new(-10.0, 0.0, 10.0),
    ])
}

/// Figure between the fountain and the east colonnade.
fn east_walk() -> std::sync::Arc<PathAsset> {
    PathAsset::new(vec![
        Vec3::new(20.0, 0.0, -15.0),
        Vec3::new(6.0, 0.0, 0.0),
        Vec3::new(20.0, 0.0, 15.0),
        Vec3::new(25.0, 0.0, 0.0),
    ])
}

fn obstacles() -> Vec<ObstacleRecord> {
    vec![
        // Central fountain.
        ObstacleRecord::fixed(Vec3::ZERO, 3.0),
        // Colonnade pillars along the east edge.
        ObstacleRecord::fixed(Vec3::new(22.0, 0.0, -8.0), 0.6),
        ObstacleRecord::fixed(Vec3::new(22.0, 0.0, 0.0), 0.6),
        ObstacleRecord::fixed(Vec3::new(22.0, 0.0, 8.0), 0.6),
    ]
}

fn patrols() -> Vec<SpawnRequest> {
    let outer = outer_circuit();
    let east = east_walk();
    (0..PATROL_COUNT)
        .map(|i| {
            // Alternate the two routes, staggered around the plaza rim.
            let angle = i as f32 / PATROL_COUNT as f32 * std::f32::consts::TAU;
            let start = Vec3::new(angle.cos() * 14.0, 0.0, angle.sin() * 14.0);
            let path = if i % 2 == 0 { &outer } else { &east };
            SpawnRequest::at(start)
                .with_agent(AgentSeed::at(start).with_max_speed(1.4).with_group(1))
                .with_path(PathSeed::following(path.clone()).looping(true))
        })
        .collect()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== plaza — rust_crowd steering demo ===");
    println!("Patrols: {PATROL_COUNT}  |  Cap: {MAX_AGENTS}  |  Seed: {SEED}");
    println!();

    // 1. Sim config: 60 × 60 m plaza, 60 Hz fixed step.
    let config = CrowdConfig {
        cell_size: 4.0,
        grid_width: 16,
        grid_height: 16,
        world_min: Vec3::new(-32.0, 0.0, -32.0),
        world_max: Vec3::new(32.0, 0.0, 32.0),
        delta_secs: 1.0 / TICKS_PER_SEC as f32,
        default_max_speed: 1.4, // pedestrian pace
        snapshot_interval_ticks: SNAPSHOT_INTERVAL,
        seed: SEED,
        ..CrowdConfig::default()
    };

    // 2. Wanderers trickle in at the south gate, capped at MAX_AGENTS total.
    let south_gate = Vec3::new(0.0, 0.0, -28.0);
    let wanderers = SpawnPlan::new(south_gate, 3.0)
        .every(2 * TICKS_PER_SEC) // one batch every 2 s
        .batch(2)
        .capped(MAX_AGENTS)
        .template(
            SpawnRequest::at(south_gate)
                .with_path(PathSeed::following(outer_circuit()).looping(true)),
        );

    // 3. Assemble.
    let mut sim = CrowdSimBuilder::new(config)
        .obstacles(obstacles())
        .spawn_all(patrols())
        .spawner(wanderers)
        .build()?;
    println!(
        "Scene: {} initial agents, {} obstacles, {}×{} grid",
        sim.agent_count(),
        sim.obstacles().len(),
        sim.grid.width,
        sim.grid.height,
    );

    // 4. Output.
    std::fs::create_dir_all("output/plaza")?;
    let writer = CsvWriter::new(Path::new("output/plaza"))?;
    let mut obs = CrowdOutputObserver::new(writer);

    // 5. Run.
    let total_ticks = SIM_SECS * TICKS_PER_SEC;
    println!("Running {total_ticks} ticks ({SIM_SECS} simulated seconds)…");
    let t0 = Instant::now();
    sim.run_ticks(total_ticks, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s wall clock", elapsed.as_secs_f64());
    println!("Final population: {} agents", sim.agent_count());
    println!();

    // 7. Final agent table.
    println!(
        "{:<8} {:<10} {:<10} {:<8} {:<10} {:<8}",
        "Agent", "x", "z", "speed", "traveled", "blocked"
    );
    println!("{}", "-".repeat(58));
    for i in 0..sim.agent_count() {
        let position = sim.agents.position[i];
        println!(
            "{:<8} {:<10.2} {:<10.2} {:<8.2} {:<10.1} {:<8}",
            i,
            position.x,
            position.z,
            sim.agents.velocity[i].planar().length(),
            sim.motion.distance_traveled[i],
            if sim.motion.blocked[i] { "yes" } else { "no" },
        );
    }

    Ok(())
}
