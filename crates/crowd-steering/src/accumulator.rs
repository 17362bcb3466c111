//! The per-agent steering accumulator.

use crowd_core::{AgentId, Vec3};

use crate::PeerForces;

/// Structure-of-Arrays steering state for all agents, indexed by `AgentId`.
///
/// Every column is recomputed from scratch each tick — there is no
/// carry-over between ticks.  Each pipeline stage writes its own columns:
/// the path pass writes `desired_velocity`, the peer pass writes
/// `separation`/`alignment`/`cohesion`/`neighbor_count`, the obstacle pass
/// writes `obstacle`, and the integrator writes `seek` and `combined`.
pub struct SteeringStore {
    /// Path-following output: the velocity the agent wants before avoidance.
    pub desired_velocity: Vec<Vec3>,

    /// Seek force toward `desired_velocity`.
    pub seek: Vec<Vec3>,

    /// Push away from nearby peers.
    pub separation: Vec<Vec3>,

    /// Velocity matching with nearby peers.
    pub alignment: Vec<Vec3>,

    /// Pull toward the local center of mass.
    pub cohesion: Vec<Vec3>,

    /// Repulsion from obstacles (pre-weighted, unclamped).
    pub obstacle: Vec<Vec3>,

    /// Final clamped force applied by the integrator.
    /// Invariant: `|combined[i]| <= max_force[i]` after the integration pass.
    pub combined: Vec<Vec3>,

    /// Peers within the avoidance radius this tick (diagnostics).
    pub neighbor_count: Vec<u32>,
}

impl SteeringStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            desired_velocity: Vec::with_capacity(capacity),
            seek: Vec::with_capacity(capacity),
            separation: Vec::with_capacity(capacity),
            alignment: Vec::with_capacity(capacity),
            cohesion: Vec::with_capacity(capacity),
            obstacle: Vec::with_capacity(capacity),
            combined: Vec::with_capacity(capacity),
            neighbor_count: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.desired_velocity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.desired_velocity.is_empty()
    }

    /// Append a zeroed slot for a newly spawned agent.
    pub fn push(&mut self) {
        self.desired_velocity.push(Vec3::ZERO);
        self.seek.push(Vec3::ZERO);
        self.separation.push(Vec3::ZERO);
        self.alignment.push(Vec3::ZERO);
        self.cohesion.push(Vec3::ZERO);
        self.obstacle.push(Vec3::ZERO);
        self.combined.push(Vec3::ZERO);
        self.neighbor_count.push(0);
    }

    /// Mirror of `AgentStore::swap_remove` — must be called with the same id.
    pub fn swap_remove(&mut self, agent: AgentId) {
        let i = agent.index();
        self.desired_velocity.swap_remove(i);
        self.seek.swap_remove(i);
        self.separation.swap_remove(i);
        self.alignment.swap_remove(i);
        self.cohesion.swap_remove(i);
        self.obstacle.swap_remove(i);
        self.combined.swap_remove(i);
        self.neighbor_count.swap_remove(i);
    }

    /// Commit one agent's peer-pass output.
    pub fn apply_peers(&mut self, agent: AgentId, peers: &PeerForces) {
        let i = agent.index();
        self.separation[i] = peers.separation;
        self.alignment[i] = peers.alignment;
        self.cohesion[i] = peers.cohesion;
        self.neighbor_count[i] = peers.neighbor_count;
    }
}
