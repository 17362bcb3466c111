//! Interval spawner: periodic batches of agents placed randomly inside a
//! circular spawn area.

use std::f32::consts::TAU;

use crowd_core::{SimRng, Tick, Vec3};

use crate::SpawnRequest;

// ── SpawnPlan ─────────────────────────────────────────────────────────────────

/// Declarative description of a spawn schedule.  Converted into a live
/// [`CrowdSpawner`] by the builder.
#[derive(Clone, Debug)]
pub struct SpawnPlan {
    /// Ticks between batches.  An interval of 1 spawns every tick.
    pub interval_ticks: u64,
    /// Agents per batch.
    pub batch_size: usize,
    /// Population cap.  Batches are truncated (or skipped) to respect it.
    pub max_agents: usize,
    /// Center of the circular spawn area.
    pub center: Vec3,
    /// Radius of the spawn area.
    pub radius: f32,
    /// Seed copied for each spawned agent, with the position overwritten.
    pub template: SpawnRequest,
}

impl SpawnPlan {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            interval_ticks: 1,
            batch_size: 1,
            max_agents: usize::MAX,
            center,
            radius,
            template: SpawnRequest::at(center),
        }
    }

    pub fn every(mut self, interval_ticks: u64) -> Self {
        self.interval_ticks = interval_ticks.max(1);
        self
    }

    pub fn batch(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn capped(mut self, max_agents: usize) -> Self {
        self.max_agents = max_agents;
        self
    }

    pub fn template(mut self, template: SpawnRequest) -> Self {
        self.template = template;
        self
    }
}

// ── CrowdSpawner ──────────────────────────────────────────────────────────────

/// Live spawner state.  Polled by the orchestrator once per tick, before
/// queued spawns are applied.
#[derive(Clone, Debug)]
pub struct CrowdSpawner {
    plan: SpawnPlan,
    last_spawn_tick: Option<Tick>,
    spawned_total: usize,
}

impl CrowdSpawner {
    pub fn new(plan: SpawnPlan) -> Self {
        Self {
            plan,
            last_spawn_tick: None,
            spawned_total: 0,
        }
    }

    /// Total number of agents this spawner has emitted.
    pub fn spawned_total(&self) -> usize {
        self.spawned_total
    }

    /// Emit this tick's batch, or an empty vec if the interval has not
    /// elapsed or the population cap is reached.
    pub fn poll(&mut self, tick: Tick, live_agents: usize, rng: &mut SimRng) -> Vec<SpawnRequest> {
        let due = match self.last_spawn_tick {
            None => true,
            Some(last) => tick.since(last) >= self.plan.interval_ticks,
        };
        if !due {
            return Vec::new();
        }

        let headroom = self.plan.max_agents.saturating_sub(live_agents);
        let batch = self.plan.batch_size.min(headroom);
        if batch == 0 {
            return Vec::new();
        }

        self.last_spawn_tick = Some(tick);
        self.spawned_total += batch;

        (0..batch)
            .map(|_| {
                let mut request = self.plan.template.clone();
                request.agent.position = self.random_point(rng);
                request
            })
            .collect()
    }

    /// Uniform random point inside the spawn circle, on the ground plane.
    fn random_point(&self, rng: &mut SimRng) -> Vec3 {
        let angle = rng.gen_range(0.0..TAU);
        // sqrt keeps the distribution uniform over area, not radius.
        let distance = self.plan.radius * rng.random::<f32>().sqrt();
        self.plan.center + Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
    }
}
