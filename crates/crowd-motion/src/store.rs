//! Movement bookkeeping and accumulated statistics.

use crowd_core::{AgentId, Vec3};

use crate::MotionStep;

/// Structure-of-Arrays movement state and statistics, indexed by `AgentId`.
///
/// Statistics accumulate for an agent's entire lifetime; they are only ever
/// reset by despawning the agent (the slot vanishes with it).
pub struct MotionStore {
    /// Position at the end of the previous tick.
    pub last_position: Vec<Vec3>,

    /// Seconds of continuous sub-epsilon movement.
    pub stuck_timer: Vec<f32>,

    /// Raised once `stuck_timer` exceeds the stuck threshold; cleared the
    /// moment the agent moves again.
    pub blocked: Vec<bool>,

    /// Covered more than the movement epsilon this tick.
    pub is_moving: Vec<bool>,

    // ── Lifetime statistics ───────────────────────────────────────────────
    /// Total planar distance covered.
    pub distance_traveled: Vec<f32>,

    /// Total simulated seconds since spawn (accumulates even when parked at
    /// the end of a path).
    pub time_alive: Vec<f32>,

    /// Waypoints reached across all loops.
    pub waypoints_reached: Vec<u32>,
}

impl MotionStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            last_position: Vec::with_capacity(capacity),
            stuck_timer: Vec::with_capacity(capacity),
            blocked: Vec::with_capacity(capacity),
            is_moving: Vec::with_capacity(capacity),
            distance_traveled: Vec::with_capacity(capacity),
            time_alive: Vec::with_capacity(capacity),
            waypoints_reached: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.last_position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_position.is_empty()
    }

    /// Append a fresh slot for an agent spawned at `position`.
    pub fn push(&mut self, position: Vec3) {
        self.last_position.push(position);
        self.stuck_timer.push(0.0);
        self.blocked.push(false);
        self.is_moving.push(false);
        self.distance_traveled.push(0.0);
        self.time_alive.push(0.0);
        self.waypoints_reached.push(0);
    }

    /// Mirror of `AgentStore::swap_remove` — must be called with the same id.
    pub fn swap_remove(&mut self, agent: AgentId) {
        let i = agent.index();
        self.last_position.swap_remove(i);
        self.stuck_timer.swap_remove(i);
        self.blocked.swap_remove(i);
        self.is_moving.swap_remove(i);
        self.distance_traveled.swap_remove(i);
        self.time_alive.swap_remove(i);
        self.waypoints_reached.swap_remove(i);
    }

    /// Commit one agent's integration output.
    ///
    /// `old_position` is the agent's position before this tick (becomes
    /// `last_position`); `dt` feeds the `time_alive` accumulator regardless
    /// of whether the agent moved.
    pub fn apply(&mut self, agent: AgentId, step: &MotionStep, old_position: Vec3, dt: f32) {
        let i = agent.index();
        self.last_position[i] = old_position;
        self.stuck_timer[i] = step.stuck_timer;
        self.blocked[i] = step.blocked;
        self.is_moving[i] = step.is_moving;
        self.distance_traveled[i] += step.displacement;
        self.time_alive[i] += dt;
    }

    /// Count a reached waypoint (called by the path-following pass).
    #[inline]
    pub fn record_waypoint(&mut self, agent: AgentId) {
        self.waypoints_reached[agent.index()] += 1;
    }
}
