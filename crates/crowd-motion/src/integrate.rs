//! The per-agent integration step.

use crowd_core::{CrowdConfig, Vec3};
use crowd_steering::{combine, steer_toward, PeerForces};

/// Speed below which orientation is left unchanged — a near-stationary
/// agent should not spin to face numerical noise.
const ORIENTATION_EPSILON: f32 = 0.1;

/// Planar displacement per tick below which the agent counts as not moving.
const MOVE_EPSILON: f32 = 0.01;

/// Seconds of continuous non-movement before the blocked flag is raised.
const STUCK_SECS: f32 = 2.0;

// ── FrameInput ────────────────────────────────────────────────────────────────

/// Read-only snapshot of one agent's state gathered before integration.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub max_speed: f32,
    pub max_force: f32,

    /// Path-following output for this tick.
    pub desired_velocity: Vec3,
    /// Peer-pass output for this tick.
    pub peers: PeerForces,
    /// Obstacle-pass output for this tick (pre-weighted, unclamped).
    pub obstacle: Vec3,

    /// The agent's path is in the sticky terminal state: skip all force and
    /// velocity updates, freeze the position.
    pub terminal: bool,

    /// Stuck timer carried over from the previous tick.
    pub stuck_timer: f32,
    pub blocked: bool,
}

// ── MotionStep ────────────────────────────────────────────────────────────────

/// One agent's integration output: the produce half of the produce/apply
/// split.  Committed to the stores by the orchestrator after the barrier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionStep {
    pub velocity: Vec3,
    pub position: Vec3,
    pub yaw: f32,

    /// Seek force actually used (recorded back into the accumulator).
    pub seek: Vec3,
    /// Final clamped steering force.
    pub combined: Vec3,

    /// Planar distance covered this tick.
    pub displacement: f32,
    pub is_moving: bool,
    pub stuck_timer: f32,
    pub blocked: bool,
}

/// Integrate one agent for `dt` seconds.
///
/// Pure: reads only `input` and `config`, writes nothing.  Invariants on the
/// output: `|velocity| ≤ max_speed`, `|combined| ≤ max_force`, and a
/// terminal agent's position and velocity are identical to (zero for
/// velocity) its inputs.
pub fn integrate(input: &FrameInput, config: &CrowdConfig, dt: f32) -> MotionStep {
    if input.terminal {
        // Parked at the end of a one-shot path: no forces, no displacement.
        return MotionStep {
            velocity: Vec3::ZERO,
            position: input.position,
            yaw: input.yaw,
            seek: Vec3::ZERO,
            combined: Vec3::ZERO,
            displacement: 0.0,
            is_moving: false,
            stuck_timer: input.stuck_timer,
            blocked: input.blocked,
        };
    }

    // Seek toward the path follower's desired velocity, then fold in the
    // avoidance contributions under the configured weights.
    let seek = steer_toward(input.velocity, input.desired_velocity, input.max_force);
    let combined = combine(seek, &input.peers, input.obstacle, config, input.max_force);

    let velocity = (input.velocity + combined * dt).limit(input.max_speed);
    let position = input.position + velocity * dt;

    // Orientation follows the velocity direction once it is meaningful.
    let yaw = if velocity.planar().length() > ORIENTATION_EPSILON {
        velocity.yaw()
    } else {
        input.yaw
    };

    let displacement = input.position.planar_distance(position);
    let is_moving = displacement > MOVE_EPSILON;

    let (stuck_timer, blocked) = if is_moving {
        (0.0, false)
    } else {
        let timer = input.stuck_timer + dt;
        (timer, timer > STUCK_SECS)
    };

    MotionStep {
        velocity,
        position,
        yaw,
        seek,
        combined,
        displacement,
        is_moving,
        stuck_timer,
        blocked,
    }
}
