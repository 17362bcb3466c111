//! Core agent storage: `AgentStore` (SoA kinematic data).
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let pos = store.position[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! The store supports spawn (`push`) and despawn (`swap_remove`) at tick
//! boundaries only.  `swap_remove` moves the last agent into the freed slot,
//! so the caller must apply the same operation to every sibling SoA store to
//! keep indices aligned — `crowd-sim` owns that coordination.

use crowd_core::{AgentId, CrowdConfig, Vec3};

use crate::AgentSeed;

/// Structure-of-Arrays storage for all agent kinematic state.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematics ────────────────────────────────────────────────────────
    /// World position.  Vertical component held at each agent's spawn plane.
    pub position: Vec<Vec3>,

    /// Current velocity.  Invariant: `|velocity[i]| <= max_speed[i]` after
    /// every integration pass.
    pub velocity: Vec<Vec3>,

    /// Heading in radians around the vertical axis, derived from velocity
    /// when the agent is moving; retains its last value when near-stationary.
    pub yaw: Vec<f32>,

    // ── Per-agent limits ──────────────────────────────────────────────────
    /// Speed ceiling enforced by the integrator.
    pub max_speed: Vec<f32>,

    /// Steering-force ceiling enforced by the final clamp.
    pub max_force: Vec<f32>,

    /// Radius within which peers and obstacles repel this agent.
    pub avoidance_radius: Vec<f32>,

    /// Body radius.
    pub radius: Vec<f32>,

    /// Crowd group tag.
    pub group: Vec<u16>,
}

impl AgentStore {
    /// An empty store with room for `capacity` agents before reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            count: 0,
            position: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
            yaw: Vec::with_capacity(capacity),
            max_speed: Vec::with_capacity(capacity),
            max_force: Vec::with_capacity(capacity),
            avoidance_radius: Vec::with_capacity(capacity),
            radius: Vec::with_capacity(capacity),
            group: Vec::with_capacity(capacity),
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Append one agent resolved from `seed`, returning its id.
    pub fn push(&mut self, seed: &AgentSeed, config: &CrowdConfig) -> AgentId {
        let (max_speed, max_force, avoidance_radius, radius) = seed.resolve(config);
        let id = AgentId(self.count as u32);

        self.position.push(seed.position);
        self.velocity.push(seed.velocity);
        // Face along the initial velocity if there is one, else +Z.
        self.yaw.push(if seed.velocity.planar().length_sq() > 0.0 {
            seed.velocity.yaw()
        } else {
            0.0
        });
        self.max_speed.push(max_speed);
        self.max_force.push(max_force);
        self.avoidance_radius.push(avoidance_radius);
        self.radius.push(radius);
        self.group.push(seed.group);

        self.count += 1;
        id
    }

    /// Remove `agent` by swapping the last agent into its slot.
    ///
    /// Returns the id of the agent that was moved into the freed slot, or
    /// `None` if the removed agent was the last one.  The caller must mirror
    /// the same swap-remove on every sibling SoA store.
    pub fn swap_remove(&mut self, agent: AgentId) -> Option<AgentId> {
        let i = agent.index();

        self.position.swap_remove(i);
        self.velocity.swap_remove(i);
        self.yaw.swap_remove(i);
        self.max_speed.swap_remove(i);
        self.max_force.swap_remove(i);
        self.avoidance_radius.swap_remove(i);
        self.radius.swap_remove(i);
        self.group.swap_remove(i);

        self.count -= 1;
        if i < self.count {
            // The former last agent now lives at index i.
            Some(AgentId(self.count as u32))
        } else {
            None
        }
    }

    /// Current speed of `agent`.
    #[inline]
    pub fn speed(&self, agent: AgentId) -> f32 {
        self.velocity[agent.index()].length()
    }
}
