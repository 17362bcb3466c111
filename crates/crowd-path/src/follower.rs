//! Per-agent path-following state and the waypoint state machine.
//!
//! The state machine is split into a read-only **produce** step
//! ([`PathStore::step`]) and a sequential **apply** ([`PathStore::apply`]),
//! so the orchestrator can evaluate every agent in parallel against an
//! immutable store snapshot and commit the results behind a barrier.

use std::sync::Arc;

use crowd_core::{AgentId, CrowdConfig, Vec3};

use crate::PathAsset;

/// Distance below which the agent is considered "at" its target and stops
/// requesting velocity — prevents jitter when sitting on a waypoint.
const ARRIVAL_EPSILON: f32 = 0.1;

// ── PathSeed ──────────────────────────────────────────────────────────────────

/// Initial path assignment for one agent.
#[derive(Clone, Debug, Default)]
pub struct PathSeed {
    /// The route to follow.  `None` = free agent (desired velocity stays zero).
    pub path: Option<Arc<PathAsset>>,

    /// Waypoint-reached distance; `None` uses the config default.
    pub reach_distance: Option<f32>,

    /// Wrap to the first waypoint after the last; `None` uses the config
    /// default.
    pub looping: Option<bool>,
}

impl PathSeed {
    pub fn following(path: Arc<PathAsset>) -> Self {
        Self {
            path: Some(path),
            ..Default::default()
        }
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = Some(looping);
        self
    }

    pub fn reach_distance(mut self, distance: f32) -> Self {
        self.reach_distance = Some(distance);
        self
    }
}

// ── PathStep ──────────────────────────────────────────────────────────────────

/// One agent's path-following output for a tick: the produce half of the
/// produce/apply split.
#[derive(Clone, Debug, PartialEq)]
pub struct PathStep {
    /// Velocity the agent wants, before any avoidance: planar unit direction
    /// to the current waypoint times max speed, or zero when idle/terminal.
    pub desired_velocity: Vec3,
    /// Waypoint index after this tick.
    pub next_index: usize,
    /// Terminal flag after this tick (sticky unless looping).
    pub reached_end: bool,
    /// `next_index / len`, recomputed every tick.
    pub progress: f32,
    /// `true` if a waypoint was reached this tick (feeds the stats counter).
    pub waypoint_reached: bool,
}

impl PathStep {
    /// A step that changes nothing and requests no movement.
    fn idle(index: usize, reached_end: bool, progress: f32) -> Self {
        Self {
            desired_velocity: Vec3::ZERO,
            next_index: index,
            reached_end,
            progress,
            waypoint_reached: false,
        }
    }
}

// ── PathStore ─────────────────────────────────────────────────────────────────

/// Structure-of-Arrays path state for all agents, indexed by `AgentId`.
pub struct PathStore {
    /// Shared route handle per agent; `None` = no path assigned.
    pub path: Vec<Option<Arc<PathAsset>>>,

    /// Index of the waypoint currently targeted.  Invariant: in
    /// `[0, path.len())` while the agent is not terminal.
    pub current_index: Vec<usize>,

    /// Distance at which a waypoint counts as reached.
    pub reach_distance: Vec<f32>,

    /// Wrap to waypoint 0 after the last instead of terminating.
    pub looping: Vec<bool>,

    /// Sticky terminal flag: set once the last waypoint of a non-looping
    /// path is reached, never cleared afterwards.
    pub reached_end: Vec<bool>,

    /// Fraction of the path completed, in `[0, 1]`.
    pub progress: Vec<f32>,
}

impl PathStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            current_index: Vec::with_capacity(capacity),
            reach_distance: Vec::with_capacity(capacity),
            looping: Vec::with_capacity(capacity),
            reached_end: Vec::with_capacity(capacity),
            progress: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Append one agent's path state resolved from `seed`.
    pub fn push(&mut self, seed: &PathSeed, config: &CrowdConfig) {
        self.path.push(seed.path.clone());
        self.current_index.push(0);
        self.reach_distance
            .push(seed.reach_distance.unwrap_or(config.default_reach_distance));
        self.looping.push(seed.looping.unwrap_or(config.looping_paths));
        self.reached_end.push(false);
        self.progress.push(0.0);
    }

    /// Mirror of `AgentStore::swap_remove` — must be called with the same id.
    pub fn swap_remove(&mut self, agent: AgentId) {
        let i = agent.index();
        self.path.swap_remove(i);
        self.current_index.swap_remove(i);
        self.reach_distance.swap_remove(i);
        self.looping.swap_remove(i);
        self.reached_end.swap_remove(i);
        self.progress.swap_remove(i);
    }

    /// Evaluate the waypoint state machine for `agent` at `position`.
    ///
    /// Read-only: returns the [`PathStep`] to commit via [`apply`][Self::apply].
    /// Never faults — a missing path, an empty waypoint list, and the sticky
    /// terminal state all yield an idle step.
    pub fn step(&self, agent: AgentId, position: Vec3, max_speed: f32) -> PathStep {
        let i = agent.index();

        let Some(path) = self.path[i].as_deref() else {
            return PathStep::idle(self.current_index[i], self.reached_end[i], self.progress[i]);
        };
        if path.is_empty() || self.reached_end[i] {
            return PathStep::idle(self.current_index[i], self.reached_end[i], self.progress[i]);
        }

        let mut index = self.current_index[i];
        let mut waypoint_reached = false;

        let mut to_target = (path.waypoint(index) - position).planar();
        let mut distance = to_target.length();

        if distance <= self.reach_distance[i] {
            waypoint_reached = true;
            index += 1;

            if index >= path.len() {
                if self.looping[i] {
                    index = 0;
                } else {
                    // Terminal: freeze at the last index and stop requesting
                    // velocity, permanently.
                    return PathStep {
                        desired_velocity: Vec3::ZERO,
                        next_index: path.len() - 1,
                        reached_end: true,
                        progress: 1.0,
                        waypoint_reached,
                    };
                }
            }

            to_target = (path.waypoint(index) - position).planar();
            distance = to_target.length();
        }

        let desired_velocity = if distance > ARRIVAL_EPSILON {
            to_target.normalized_or_zero() * max_speed
        } else {
            Vec3::ZERO
        };

        PathStep {
            desired_velocity,
            next_index: index,
            reached_end: false,
            progress: index as f32 / path.len() as f32,
            waypoint_reached,
        }
    }

    /// Commit a previously produced [`PathStep`].
    pub fn apply(&mut self, agent: AgentId, step: &PathStep) {
        let i = agent.index();
        self.current_index[i] = step.next_index;
        self.reached_end[i] = step.reached_end;
        self.progress[i] = step.progress;
    }
}
