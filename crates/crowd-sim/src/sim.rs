//! The `CrowdSim` struct and its tick pipeline.

use crowd_agent::{AgentSeed, AgentStore};
use crowd_core::{AgentId, CrowdConfig, CrowdResult, ObstacleRecord, SimClock, SimRng, Vec3};
use crowd_motion::{integrate, FrameInput, MotionStep, MotionStore};
use crowd_path::{PathSeed, PathStep, PathStore};
use crowd_spatial::SpatialGrid;
use crowd_steering::{obstacle_avoidance, peer_forces, PeerForces, SteeringStore};

use crate::{CrowdObserver, CrowdSnapshot, CrowdSpawner, SimResult};

// ── SpawnRequest ──────────────────────────────────────────────────────────────

/// Everything needed to create one agent: kinematic seed plus path
/// assignment.  Queued via [`CrowdSim::queue_spawn`] and applied at the next
/// tick boundary.
#[derive(Clone, Debug, Default)]
pub struct SpawnRequest {
    pub agent: AgentSeed,
    pub path: PathSeed,
}

impl SpawnRequest {
    /// A free (pathless) agent at `position` with config-default limits.
    pub fn at(position: Vec3) -> Self {
        Self {
            agent: AgentSeed::at(position),
            path: PathSeed::default(),
        }
    }

    pub fn with_path(mut self, path: PathSeed) -> Self {
        self.path = path;
        self
    }

    pub fn with_agent(mut self, agent: AgentSeed) -> Self {
        self.agent = agent;
        self
    }
}

// ── CrowdSim ──────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Owns every per-agent SoA store, the spatial grid, and the per-tick
/// obstacle snapshot.  All stores are index-aligned: `AgentId` `i` refers to
/// slot `i` in each of them, and population changes are applied to all
/// stores in lockstep at tick boundaries.
///
/// Create via [`CrowdSimBuilder`][crate::CrowdSimBuilder].
pub struct CrowdSim {
    /// Global configuration (weights, grid geometry, defaults, …).
    pub config: CrowdConfig,

    /// Tick counter and fixed step size.
    pub clock: SimClock,

    /// Kinematic state (position, velocity, yaw, per-agent limits).
    pub agents: AgentStore,

    /// Steering accumulator — recomputed from scratch every tick.
    pub steering: SteeringStore,

    /// Path assignment and traversal state.
    pub paths: PathStore,

    /// Movement bookkeeping and lifetime statistics.
    pub motion: MotionStore,

    /// The spatial index.  Rebuilt at the start of every tick; read-only for
    /// the remainder of it.
    pub grid: SpatialGrid,

    /// Obstacle snapshot.  Mutations submitted via
    /// [`set_obstacles`][Self::set_obstacles] take effect at the next tick.
    obstacles: Vec<ObstacleRecord>,
    pending_obstacles: Option<Vec<ObstacleRecord>>,

    /// Seeded RNG driving spawner placement.
    pub rng: SimRng,

    /// Optional interval spawner polled at every tick boundary.
    pub spawner: Option<CrowdSpawner>,

    pending_spawns: Vec<SpawnRequest>,
    pending_despawns: Vec<AgentId>,
}

impl CrowdSim {
    /// Package-private constructor used by the builder.
    pub(crate) fn new(
        config: CrowdConfig,
        obstacles: Vec<ObstacleRecord>,
        spawner: Option<CrowdSpawner>,
        initial: Vec<SpawnRequest>,
    ) -> Self {
        let capacity = initial.len();
        let mut sim = Self {
            clock: SimClock::new(config.delta_secs),
            grid: SpatialGrid::from_config(&config),
            rng: SimRng::new(config.seed),
            agents: AgentStore::with_capacity(capacity),
            steering: SteeringStore::with_capacity(capacity),
            paths: PathStore::with_capacity(capacity),
            motion: MotionStore::with_capacity(capacity),
            obstacles,
            pending_obstacles: None,
            spawner,
            pending_spawns: initial,
            pending_despawns: Vec::new(),
            config,
        };
        // Initial agents exist before the first tick rather than after it.
        sim.apply_population_changes();
        sim
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Number of live agents.
    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.count
    }

    /// Current obstacle snapshot.
    #[inline]
    pub fn obstacles(&self) -> &[ObstacleRecord] {
        &self.obstacles
    }

    /// Replace the obstacle list at the next tick boundary.  The current
    /// tick (if one is mid-flight conceptually) always sees the old
    /// snapshot.
    pub fn set_obstacles(&mut self, obstacles: Vec<ObstacleRecord>) {
        self.pending_obstacles = Some(obstacles);
    }

    /// Queue one agent for creation at the next tick boundary.
    pub fn queue_spawn(&mut self, request: SpawnRequest) {
        self.pending_spawns.push(request);
    }

    /// Queue one agent for removal at the next tick boundary.
    ///
    /// Despawning swap-removes the slot, so other agents' ids may change;
    /// treat ids as stable only between boundaries.
    pub fn queue_despawn(&mut self, agent: AgentId) {
        self.pending_despawns.push(agent);
    }

    /// Swap in a new configuration.
    ///
    /// Validation failures leave the previous configuration (and grid) fully
    /// in effect — this is the fallback contract for hot reload.
    pub fn reload_config(&mut self, config: CrowdConfig) -> CrowdResult<()> {
        config.validate()?;
        self.grid = SpatialGrid::from_config(&config);
        self.clock.delta_secs = config.delta_secs;
        self.config = config;
        Ok(())
    }

    /// Advance the simulation by one tick of `dt` simulated seconds.
    ///
    /// Stages run in fixed order with a full barrier between them; see the
    /// crate docs.  Never fails: all per-agent anomalies are absorbed as
    /// zero/no-op behavior inside the stages.
    pub fn step(&mut self, dt: f32) {
        self.apply_population_changes();

        // ── Stage 1: rebuild the spatial index ────────────────────────────
        self.grid.build(&self.agents.position);

        // ── Stages 2–5, each produce → barrier → apply ────────────────────
        self.path_pass();
        self.peer_pass();
        self.obstacle_pass();
        self.integrate_pass(dt);

        self.clock.advance();
    }

    /// Run exactly `n` ticks at the configured fixed step, with observer
    /// callbacks and snapshot captures at the configured interval.
    pub fn run_ticks<O: CrowdObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        let dt = self.config.delta_secs;
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.step(dt);
            observer.on_tick_end(now, self.agents.count);

            let interval = self.config.snapshot_interval_ticks;
            if interval > 0 && now.0 % interval == 0 {
                observer.on_snapshot(&CrowdSnapshot::capture(self));
            }
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    // ── Stage 0: population changes ───────────────────────────────────────

    fn apply_population_changes(&mut self) {
        if let Some(obstacles) = self.pending_obstacles.take() {
            self.obstacles = obstacles;
        }

        // Despawns first, highest index first, so earlier removals never
        // invalidate the indices of later ones.
        if !self.pending_despawns.is_empty() {
            let mut despawns = std::mem::take(&mut self.pending_despawns);
            despawns.sort_unstable_by(|a, b| b.cmp(a));
            despawns.dedup();
            for agent in despawns {
                if agent.index() >= self.agents.count {
                    continue; // already gone (double despawn)
                }
                self.agents.swap_remove(agent);
                self.steering.swap_remove(agent);
                self.paths.swap_remove(agent);
                self.motion.swap_remove(agent);
            }
        }

        // Interval spawner contributes requests before queued ones apply.
        if let Some(spawner) = &mut self.spawner {
            let live = self.agents.count + self.pending_spawns.len();
            self.pending_spawns
                .extend(spawner.poll(self.clock.current_tick, live, &mut self.rng));
        }

        for request in std::mem::take(&mut self.pending_spawns) {
            self.agents.push(&request.agent, &self.config);
            self.steering.push();
            self.paths.push(&request.path, &self.config);
            self.motion.push(request.agent.position);
        }

        debug_assert_eq!(self.agents.count, self.steering.len());
        debug_assert_eq!(self.agents.count, self.paths.len());
        debug_assert_eq!(self.agents.count, self.motion.len());
    }

    // ── Stage 2: path-following pass ──────────────────────────────────────

    fn path_pass(&mut self) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let paths = &self.paths;
        let positions = self.agents.position.as_slice();
        let max_speed = self.agents.max_speed.as_slice();
        let count = self.agents.count;

        let produce = |i: usize| paths.step(AgentId(i as u32), positions[i], max_speed[i]);

        #[cfg(not(feature = "parallel"))]
        let steps: Vec<PathStep> = (0..count).map(produce).collect();

        #[cfg(feature = "parallel")]
        let steps: Vec<PathStep> = {
            use rayon::prelude::*;
            (0..count).into_par_iter().map(produce).collect()
        };

        for (i, step) in steps.iter().enumerate() {
            let agent = AgentId(i as u32);
            self.paths.apply(agent, step);
            self.steering.desired_velocity[i] = step.desired_velocity;
            if step.waypoint_reached {
                self.motion.record_waypoint(agent);
            }
        }
    }

    // ── Stage 3: peer-avoidance pass ──────────────────────────────────────

    fn peer_pass(&mut self) {
        let grid = &self.grid;
        let positions = self.agents.position.as_slice();
        let velocities = self.agents.velocity.as_slice();
        let avoidance = self.agents.avoidance_radius.as_slice();
        let max_speed = self.agents.max_speed.as_slice();
        let max_force = self.agents.max_force.as_slice();
        let count = self.agents.count;

        let produce = |scratch: &mut Vec<u32>, i: usize| {
            scratch.clear();
            grid.neighbors_into(positions[i], scratch);
            peer_forces(
                i,
                positions[i],
                velocities[i],
                avoidance[i],
                max_speed[i],
                max_force[i],
                scratch,
                positions,
                velocities,
            )
        };

        #[cfg(not(feature = "parallel"))]
        let forces: Vec<PeerForces> = {
            let mut scratch = Vec::new();
            (0..count).map(|i| produce(&mut scratch, i)).collect()
        };

        #[cfg(feature = "parallel")]
        let forces: Vec<PeerForces> = {
            use rayon::prelude::*;
            // One candidate scratch buffer per worker, reused across agents.
            (0..count)
                .into_par_iter()
                .map_init(Vec::new, |scratch, i| produce(scratch, i))
                .collect()
        };

        for (i, peers) in forces.iter().enumerate() {
            self.steering.apply_peers(AgentId(i as u32), peers);
        }
    }

    // ── Stage 4: obstacle-avoidance pass ──────────────────────────────────

    fn obstacle_pass(&mut self) {
        let obstacles = self.obstacles.as_slice();
        let positions = self.agents.position.as_slice();
        let avoidance = self.agents.avoidance_radius.as_slice();
        let priority = self.config.obstacle_priority;
        let count = self.agents.count;

        // Runs even with an empty obstacle list: the accumulator column must
        // be rewritten (to zero) every tick, never carried over.
        let produce = |i: usize| obstacle_avoidance(positions[i], avoidance[i], obstacles, priority);

        #[cfg(not(feature = "parallel"))]
        let forces: Vec<Vec3> = (0..count).map(produce).collect();

        #[cfg(feature = "parallel")]
        let forces: Vec<Vec3> = {
            use rayon::prelude::*;
            (0..count).into_par_iter().map(produce).collect()
        };

        self.steering.obstacle[..count].copy_from_slice(&forces);
    }

    // ── Stage 5: integration pass ─────────────────────────────────────────

    fn integrate_pass(&mut self, dt: f32) {
        let agents = &self.agents;
        let steering = &self.steering;
        let paths = &self.paths;
        let motion = &self.motion;
        let config = &self.config;
        let count = agents.count;

        let produce = |i: usize| {
            let input = FrameInput {
                position: agents.position[i],
                velocity: agents.velocity[i],
                yaw: agents.yaw[i],
                max_speed: agents.max_speed[i],
                max_force: agents.max_force[i],
                desired_velocity: steering.desired_velocity[i],
                peers: PeerForces {
                    separation: steering.separation[i],
                    alignment: steering.alignment[i],
                    cohesion: steering.cohesion[i],
                    neighbor_count: steering.neighbor_count[i],
                },
                obstacle: steering.obstacle[i],
                terminal: paths.reached_end[i],
                stuck_timer: motion.stuck_timer[i],
                blocked: motion.blocked[i],
            };
            integrate(&input, config, dt)
        };

        #[cfg(not(feature = "parallel"))]
        let steps: Vec<MotionStep> = (0..count).map(produce).collect();

        #[cfg(feature = "parallel")]
        let steps: Vec<MotionStep> = {
            use rayon::prelude::*;
            (0..count).into_par_iter().map(produce).collect()
        };

        for (i, step) in steps.iter().enumerate() {
            let agent = AgentId(i as u32);
            let old_position = self.agents.position[i];

            self.agents.velocity[i] = step.velocity;
            self.agents.position[i] = step.position;
            self.agents.yaw[i] = step.yaw;

            self.steering.seek[i] = step.seek;
            self.steering.combined[i] = step.combined;

            self.motion.apply(agent, step, old_position, dt);
        }
    }
}
