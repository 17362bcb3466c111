//! Pure steering-force functions.
//!
//! All distances and directions are planar (XZ); every returned force has a
//! zero vertical component.

use crowd_core::{CrowdConfig, ObstacleRecord, Vec3};

/// Distance below which two positions are treated as coincident and excluded
/// from repulsion math (avoids exploding `1/d` weights and self-matches).
const MIN_DISTANCE: f32 = 0.1;

// ── Seek ──────────────────────────────────────────────────────────────────────

/// Steer toward a world-space target point.
///
/// `desired = normalize(target − position) · max_speed`, returned as
/// `limit(desired − velocity, max_force)`.  A target coincident with the
/// position yields zero.
pub fn seek(position: Vec3, velocity: Vec3, target: Vec3, max_speed: f32, max_force: f32) -> Vec3 {
    let dir = (target - position).planar().normalized_or_zero();
    if dir == Vec3::ZERO {
        return Vec3::ZERO;
    }
    (dir * max_speed - velocity.planar()).limit(max_force)
}

/// Steer toward an already-computed desired velocity (the path follower's
/// output): `limit(desired − velocity, max_force)`.
///
/// With a zero desired velocity this becomes a braking force, which is what
/// lets idle agents coast to a stop instead of drifting.
pub fn steer_toward(velocity: Vec3, desired_velocity: Vec3, max_force: f32) -> Vec3 {
    (desired_velocity.planar() - velocity.planar()).limit(max_force)
}

// ── Peer forces ───────────────────────────────────────────────────────────────

/// The three neighbor-derived contributions, produced by one pass over the
/// candidate set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PeerForces {
    pub separation: Vec3,
    pub alignment: Vec3,
    pub cohesion: Vec3,
    /// Number of peers that fell within the avoidance radius — recorded as a
    /// diagnostic side effect (debug overlays, density heuristics).
    pub neighbor_count: u32,
}

/// Compute separation, alignment, and cohesion for one agent from grid
/// candidates.
///
/// `candidates` comes from the spatial grid's 3×3 query and may contain the
/// agent itself and peers beyond the radius; both are filtered here against
/// `avoidance_radius` by exact planar distance.
///
/// - **Separation** accumulates `normalize(self − other) / d` so closer
///   neighbors weigh more, then renormalizes toward `max_speed`, subtracts
///   the current velocity, and clamps to `max_force`.
/// - **Alignment** steers toward the mean neighbor velocity.
/// - **Cohesion** seeks the mean neighbor position.
///
/// All three are zero when no neighbor is in range.
#[allow(clippy::too_many_arguments)]
pub fn peer_forces(
    self_index: usize,
    position: Vec3,
    velocity: Vec3,
    avoidance_radius: f32,
    max_speed: f32,
    max_force: f32,
    candidates: &[u32],
    positions: &[Vec3],
    velocities: &[Vec3],
) -> PeerForces {
    let mut push = Vec3::ZERO;
    let mut velocity_sum = Vec3::ZERO;
    let mut center_sum = Vec3::ZERO;
    let mut count = 0u32;

    for &other in candidates {
        let j = other as usize;
        if j == self_index {
            continue;
        }
        let offset = (position - positions[j]).planar();
        let distance = offset.length();
        if distance >= avoidance_radius || distance <= MIN_DISTANCE {
            continue;
        }

        // Closer neighbors push harder: unit direction scaled by 1/d.
        push += offset.normalized_or_zero() / distance;
        velocity_sum += velocities[j].planar();
        center_sum += positions[j].planar();
        count += 1;
    }

    if count == 0 {
        return PeerForces::default();
    }

    let separation = {
        let desired = push.normalized_or_zero() * max_speed;
        if desired == Vec3::ZERO {
            // Symmetric neighbors cancelled out exactly.
            Vec3::ZERO
        } else {
            (desired - velocity.planar()).limit(max_force)
        }
    };

    let alignment = {
        let mean = velocity_sum / count as f32;
        let desired = mean.normalized_or_zero() * max_speed;
        if desired == Vec3::ZERO {
            Vec3::ZERO
        } else {
            (desired - velocity.planar()).limit(max_force)
        }
    };

    let cohesion = {
        let center = center_sum / count as f32;
        seek(position.planar(), velocity, center, max_speed, max_force)
    };

    PeerForces {
        separation,
        alignment,
        cohesion,
        neighbor_count: count,
    }
}

// ── Obstacle avoidance ────────────────────────────────────────────────────────

/// Repulsion away from static obstacles.
///
/// For each obstacle whose center lies closer than
/// `obstacle.radius + avoidance_radius`, accumulates a push proportional to
/// penetration depth: `normalize(self − obstacle) · (effective − d) / effective`.
/// The sum is scaled by `priority` (obstacles repel more strongly than
/// peers) and returned **unclamped** — only the final combination clamp
/// bounds it.
pub fn obstacle_avoidance(
    position: Vec3,
    avoidance_radius: f32,
    obstacles: &[ObstacleRecord],
    priority: f32,
) -> Vec3 {
    let mut force = Vec3::ZERO;

    for obstacle in obstacles {
        let offset = (position - obstacle.position).planar();
        let distance = offset.length();
        let effective = obstacle.effective_radius(avoidance_radius);

        if distance < effective && distance > MIN_DISTANCE {
            force += offset.normalized_or_zero() * ((effective - distance) / effective);
        }
    }

    force * priority
}

// ── Combination ───────────────────────────────────────────────────────────────

/// Sum all contributions under the configured weights and clamp to
/// `max_force`.  The vertical component is zeroed before the clamp so the
/// bound applies to the planar force actually used.
pub fn combine(
    seek: Vec3,
    peers: &PeerForces,
    obstacle: Vec3,
    config: &CrowdConfig,
    max_force: f32,
) -> Vec3 {
    let total = seek * config.path_weight
        + peers.separation * config.separation_weight
        + peers.alignment * config.alignment_weight
        + peers.cohesion * config.cohesion_weight
        + obstacle;
    total.planar().limit(max_force)
}
