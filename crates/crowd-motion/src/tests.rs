//! Unit tests for the integrator.

use crowd_core::{AgentId, CrowdConfig, Vec3};
use crowd_steering::PeerForces;

use crate::{integrate, FrameInput, MotionStep, MotionStore};

fn resting(position: Vec3) -> FrameInput {
    FrameInput {
        position,
        velocity: Vec3::ZERO,
        yaw: 0.0,
        max_speed: 3.0,
        max_force: 5.0,
        desired_velocity: Vec3::ZERO,
        peers: PeerForces::default(),
        obstacle: Vec3::ZERO,
        terminal: false,
        stuck_timer: 0.0,
        blocked: false,
    }
}

fn config() -> CrowdConfig {
    CrowdConfig::default()
}

#[cfg(test)]
mod limits {
    use super::*;

    #[test]
    fn velocity_never_exceeds_max_speed() {
        let mut input = resting(Vec3::ZERO);
        input.desired_velocity = Vec3::new(100.0, 0.0, 0.0);
        let mut velocity = input.velocity;
        // Push hard for many ticks; the clamp must hold throughout.
        for _ in 0..200 {
            input.velocity = velocity;
            let step = integrate(&input, &config(), 0.1);
            assert!(step.velocity.length() <= input.max_speed + 1e-4);
            velocity = step.velocity;
        }
        // And it actually gets there.
        assert!((velocity.length() - input.max_speed).abs() < 1e-2);
    }

    #[test]
    fn combined_force_never_exceeds_max_force() {
        let mut input = resting(Vec3::ZERO);
        input.desired_velocity = Vec3::new(50.0, 0.0, 0.0);
        input.obstacle = Vec3::new(0.0, 0.0, 80.0);
        input.peers.separation = Vec3::new(-30.0, 0.0, 0.0);
        let step = integrate(&input, &config(), 0.05);
        assert!(step.combined.length() <= input.max_force + 1e-4);
        assert_eq!(step.combined.y, 0.0);
    }

    #[test]
    fn vertical_velocity_is_never_introduced() {
        let mut input = resting(Vec3::new(0.0, 1.5, 0.0));
        input.desired_velocity = Vec3::new(2.0, 0.0, 0.0);
        let step = integrate(&input, &config(), 0.1);
        assert_eq!(step.velocity.y, 0.0);
        // The agent stays on its spawn plane.
        assert_eq!(step.position.y, 1.5);
    }
}

#[cfg(test)]
mod orientation {
    use super::*;

    #[test]
    fn yaw_follows_velocity_when_moving() {
        let mut input = resting(Vec3::ZERO);
        input.velocity = Vec3::new(0.0, 0.0, 2.0);
        input.desired_velocity = Vec3::new(0.0, 0.0, 3.0);
        let step = integrate(&input, &config(), 0.1);
        assert!(step.yaw.abs() < 1e-5); // +Z is yaw 0
    }

    #[test]
    fn yaw_unchanged_when_nearly_stationary() {
        let mut input = resting(Vec3::ZERO);
        input.yaw = 1.234;
        input.velocity = Vec3::new(0.001, 0.0, 0.0);
        let step = integrate(&input, &config(), 0.01);
        assert_eq!(step.yaw, 1.234);
    }
}

#[cfg(test)]
mod stuck_detection {
    use super::*;

    #[test]
    fn blocked_flag_raises_after_threshold() {
        // No desired velocity, no forces: the agent never moves.
        let mut input = resting(Vec3::ZERO);
        let dt = 0.5;
        let mut blocked_at = None;
        for tick in 0..10 {
            let step = integrate(&input, &config(), dt);
            input.stuck_timer = step.stuck_timer;
            input.blocked = step.blocked;
            if step.blocked && blocked_at.is_none() {
                blocked_at = Some(tick);
            }
        }
        // 2.0 s threshold at 0.5 s ticks → flagged on the 5th tick (2.5 s).
        assert_eq!(blocked_at, Some(4));
    }

    #[test]
    fn movement_resets_the_timer_and_flag() {
        let mut input = resting(Vec3::ZERO);
        input.stuck_timer = 5.0;
        input.blocked = true;
        input.velocity = Vec3::new(3.0, 0.0, 0.0);
        input.desired_velocity = Vec3::new(3.0, 0.0, 0.0);
        let step = integrate(&input, &config(), 0.1);
        assert!(step.is_moving);
        assert_eq!(step.stuck_timer, 0.0);
        assert!(!step.blocked);
    }
}

#[cfg(test)]
mod terminal {
    use super::*;

    #[test]
    fn terminal_agents_do_not_move() {
        let mut input = resting(Vec3::new(10.0, 0.0, 0.0));
        input.terminal = true;
        input.velocity = Vec3::new(3.0, 0.0, 0.0);
        // Even with neighbors shoving, the parked agent stays put.
        input.peers.separation = Vec3::new(9.0, 0.0, 0.0);
        let step = integrate(&input, &config(), 0.1);
        assert_eq!(step.position, input.position);
        assert_eq!(step.velocity, Vec3::ZERO);
        assert_eq!(step.combined, Vec3::ZERO);
        assert_eq!(step.displacement, 0.0);
    }
}

#[cfg(test)]
mod stats {
    use super::*;

    fn step_moving(displacement: f32) -> MotionStep {
        MotionStep {
            velocity: Vec3::new(1.0, 0.0, 0.0),
            position: Vec3::new(displacement, 0.0, 0.0),
            yaw: 0.0,
            seek: Vec3::ZERO,
            combined: Vec3::ZERO,
            displacement,
            is_moving: displacement > 0.01,
            stuck_timer: 0.0,
            blocked: false,
        }
    }

    #[test]
    fn distance_and_time_accumulate() {
        let mut store = MotionStore::with_capacity(1);
        store.push(Vec3::ZERO);
        let a = AgentId(0);

        store.apply(a, &step_moving(0.5), Vec3::ZERO, 0.1);
        store.apply(a, &step_moving(0.25), Vec3::new(0.5, 0.0, 0.0), 0.1);

        assert!((store.distance_traveled[0] - 0.75).abs() < 1e-6);
        assert!((store.time_alive[0] - 0.2).abs() < 1e-6);
        assert_eq!(store.last_position[0], Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn waypoint_counter_increments() {
        let mut store = MotionStore::with_capacity(1);
        store.push(Vec3::ZERO);
        store.record_waypoint(AgentId(0));
        store.record_waypoint(AgentId(0));
        assert_eq!(store.waypoints_reached[0], 2);
    }

    #[test]
    fn swap_remove_keeps_sibling_stats() {
        let mut store = MotionStore::with_capacity(2);
        store.push(Vec3::ZERO);
        store.push(Vec3::new(1.0, 0.0, 0.0));
        store.waypoints_reached[1] = 7;
        store.swap_remove(AgentId(0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.waypoints_reached[0], 7);
    }
}
