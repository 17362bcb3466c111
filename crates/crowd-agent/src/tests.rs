//! Unit tests for agent storage.

use crowd_core::{AgentId, CrowdConfig, Vec3};

use crate::{AgentSeed, AgentStore};

fn config() -> CrowdConfig {
    CrowdConfig::default()
}

#[cfg(test)]
mod seeds {
    use super::*;

    #[test]
    fn defaults_resolve_from_config() {
        let cfg = config();
        let mut store = AgentStore::with_capacity(1);
        let id = store.push(&AgentSeed::at(Vec3::new(1.0, 0.0, 2.0)), &cfg);

        assert_eq!(store.max_speed[id.index()], cfg.default_max_speed);
        assert_eq!(store.max_force[id.index()], cfg.default_max_force);
        assert_eq!(store.avoidance_radius[id.index()], cfg.default_avoidance_radius);
        assert_eq!(store.radius[id.index()], cfg.default_radius);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let cfg = config();
        let seed = AgentSeed::at(Vec3::ZERO)
            .with_max_speed(3.0)
            .with_max_force(5.0)
            .with_avoidance_radius(1.0)
            .with_group(4);
        let mut store = AgentStore::with_capacity(1);
        let id = store.push(&seed, &cfg);

        assert_eq!(store.max_speed[id.index()], 3.0);
        assert_eq!(store.max_force[id.index()], 5.0);
        assert_eq!(store.avoidance_radius[id.index()], 1.0);
        assert_eq!(store.group[id.index()], 4);
    }

    #[test]
    fn initial_yaw_follows_velocity() {
        let cfg = config();
        let mut seed = AgentSeed::at(Vec3::ZERO);
        seed.velocity = Vec3::new(1.0, 0.0, 0.0);
        let mut store = AgentStore::with_capacity(1);
        let id = store.push(&seed, &cfg);
        assert!((store.yaw[id.index()] - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}

#[cfg(test)]
mod removal {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let cfg = config();
        let mut store = AgentStore::with_capacity(3);
        for i in 0..3 {
            let id = store.push(&AgentSeed::at(Vec3::new(i as f32, 0.0, 0.0)), &cfg);
            assert_eq!(id, AgentId(i));
        }
        assert_eq!(store.count, 3);
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn swap_remove_moves_last_agent() {
        let cfg = config();
        let mut store = AgentStore::with_capacity(3);
        for i in 0..3 {
            store.push(&AgentSeed::at(Vec3::new(i as f32, 0.0, 0.0)), &cfg);
        }

        let moved = store.swap_remove(AgentId(0));
        assert_eq!(moved, Some(AgentId(2)));
        assert_eq!(store.count, 2);
        // Agent 2's position now lives at slot 0.
        assert_eq!(store.position[0], Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn removing_last_agent_moves_nobody() {
        let cfg = config();
        let mut store = AgentStore::with_capacity(2);
        store.push(&AgentSeed::at(Vec3::ZERO), &cfg);
        store.push(&AgentSeed::at(Vec3::new(1.0, 0.0, 0.0)), &cfg);

        assert_eq!(store.swap_remove(AgentId(1)), None);
        assert_eq!(store.count, 1);
    }
}
