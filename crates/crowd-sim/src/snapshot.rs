//! Point-in-time state captures for observers and exporters.

use crowd_core::{AgentId, ObstacleRecord, Tick, Vec3};

use crate::CrowdSim;

// ── AgentSnapshot ─────────────────────────────────────────────────────────────

/// One agent's state, copied out of the SoA stores at a tick boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub group: u16,
    /// Index of the waypoint currently being sought.
    pub waypoint_index: usize,
    /// World position of that waypoint; `None` for pathless agents.  Lets
    /// debug overlays draw target lines without touching the path stores.
    pub target_waypoint: Option<Vec3>,
    /// Fraction of the path completed, in `[0, 1]`.
    pub path_progress: f32,
    pub reached_end: bool,
    pub blocked: bool,
    pub distance_traveled: f32,
    pub time_alive: f32,
    pub waypoints_reached: u32,
}

// ── CrowdSnapshot ─────────────────────────────────────────────────────────────

/// A full capture of the simulation at one tick, plus a few aggregates that
/// summary exporters would otherwise recompute.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrowdSnapshot {
    pub tick: Tick,
    pub elapsed_secs: f32,
    pub agents: Vec<AgentSnapshot>,
    /// Obstacle geometry at capture time, for visualization.
    pub obstacles: Vec<ObstacleRecord>,
    pub blocked_count: usize,
    pub mean_speed: f32,
}

impl CrowdSnapshot {
    /// Copy out the current state of every live agent.
    pub fn capture(sim: &CrowdSim) -> Self {
        let count = sim.agents.count;
        let mut agents = Vec::with_capacity(count);
        let mut blocked_count = 0;
        let mut speed_sum = 0.0;

        for i in 0..count {
            let waypoint_index = sim.paths.current_index[i];
            let target_waypoint = sim.paths.path[i]
                .as_ref()
                .filter(|p| waypoint_index < p.len())
                .map(|p| p.waypoint(waypoint_index));
            let velocity = sim.agents.velocity[i];
            let blocked = sim.motion.blocked[i];
            if blocked {
                blocked_count += 1;
            }
            speed_sum += velocity.planar().length();

            agents.push(AgentSnapshot {
                id: AgentId(i as u32),
                position: sim.agents.position[i],
                velocity,
                yaw: sim.agents.yaw[i],
                group: sim.agents.group[i],
                waypoint_index,
                target_waypoint,
                path_progress: sim.paths.progress[i],
                reached_end: sim.paths.reached_end[i],
                blocked,
                distance_traveled: sim.motion.distance_traveled[i],
                time_alive: sim.motion.time_alive[i],
                waypoints_reached: sim.motion.waypoints_reached[i],
            });
        }

        let mean_speed = if count > 0 {
            speed_sum / count as f32
        } else {
            0.0
        };

        Self {
            tick: sim.clock.current_tick,
            elapsed_secs: sim.clock.elapsed_secs(),
            agents,
            obstacles: sim.obstacles().to_vec(),
            blocked_count,
            mean_speed,
        }
    }
}
