//! Unit tests for the waypoint state machine.

use crowd_core::{AgentId, CrowdConfig, Vec3};

use crate::{PathAsset, PathSeed, PathStore};

fn config() -> CrowdConfig {
    CrowdConfig::default()
}

fn store_with(seed: PathSeed) -> PathStore {
    let mut store = PathStore::with_capacity(1);
    store.push(&seed, &config());
    store
}

fn square_path() -> std::sync::Arc<PathAsset> {
    PathAsset::new(vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 10.0),
        Vec3::new(0.0, 0.0, 10.0),
    ])
}

const A: AgentId = AgentId(0);

#[cfg(test)]
mod traveling {
    use super::*;

    #[test]
    fn desired_velocity_points_at_current_waypoint() {
        let store = store_with(PathSeed::following(square_path()).reach_distance(1.0));
        // Waypoint 0 is the origin; agent sits at (-5, 0, 0).
        let step = store.step(A, Vec3::new(-5.0, 0.0, 0.0), 3.0);
        assert!((step.desired_velocity - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5);
        assert_eq!(step.next_index, 0);
        assert!(!step.reached_end);
        assert!(!step.waypoint_reached);
    }

    #[test]
    fn desired_velocity_is_planar() {
        let store = store_with(PathSeed::following(square_path()).reach_distance(1.0));
        // Vertical offset must not leak into the desired velocity.
        let step = store.step(A, Vec3::new(-5.0, 7.0, 0.0), 3.0);
        assert_eq!(step.desired_velocity.y, 0.0);
        assert!(step.desired_velocity.x > 0.0);
    }

    #[test]
    fn reaching_a_waypoint_advances_and_retargets() {
        let mut store = store_with(PathSeed::following(square_path()).reach_distance(1.0));
        // Within reach of waypoint 0 → advance to waypoint 1 at (10, 0, 0).
        let step = store.step(A, Vec3::new(0.5, 0.0, 0.0), 3.0);
        assert!(step.waypoint_reached);
        assert_eq!(step.next_index, 1);
        assert!(step.desired_velocity.x > 0.0);
        store.apply(A, &step);
        assert_eq!(store.current_index[0], 1);
        assert!((store.progress[0] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn progress_tracks_index_over_length() {
        let mut store = store_with(PathSeed::following(square_path()).reach_distance(1.0));
        let step = store.step(A, Vec3::new(0.0, 0.0, 0.0), 3.0);
        store.apply(A, &step);
        assert!((store.progress[0] - 0.25).abs() < 1e-6);
        let step = store.step(A, Vec3::new(10.0, 0.0, 0.0), 3.0);
        store.apply(A, &step);
        assert!((store.progress[0] - 0.5).abs() < 1e-6);
    }
}

#[cfg(test)]
mod terminal {
    use super::*;

    #[test]
    fn non_looping_path_terminates_and_sticks() {
        let path = PathAsset::new(vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]);
        let mut store = store_with(PathSeed::following(path).looping(false).reach_distance(1.0));

        // Reach waypoint 0, then waypoint 1.
        let step = store.step(A, Vec3::new(0.2, 0.0, 0.0), 3.0);
        store.apply(A, &step);
        assert_eq!(store.current_index[0], 1);

        let step = store.step(A, Vec3::new(9.5, 0.0, 0.0), 3.0);
        assert!(step.reached_end);
        assert_eq!(step.desired_velocity, Vec3::ZERO);
        assert!((step.progress - 1.0).abs() < 1e-6);
        store.apply(A, &step);

        // Sticky: further steps never request velocity or change state.
        for _ in 0..5 {
            let step = store.step(A, Vec3::new(-50.0, 0.0, 0.0), 3.0);
            assert!(step.reached_end);
            assert_eq!(step.desired_velocity, Vec3::ZERO);
            store.apply(A, &step);
        }
        assert!(store.reached_end[0]);
        // Index stays in range after termination.
        assert_eq!(store.current_index[0], 1);
    }

    #[test]
    fn looping_path_wraps_to_first_waypoint() {
        let mut store = store_with(PathSeed::following(square_path()).looping(true).reach_distance(1.0));
        // Walk the agent onto each waypoint in turn.
        let corners = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 10.0),
        ];
        for (k, &corner) in corners.iter().enumerate() {
            let step = store.step(A, corner, 3.0);
            assert!(step.waypoint_reached, "waypoint {k} not reached");
            assert!(step.next_index < 4, "index escaped range at waypoint {k}");
            store.apply(A, &step);
        }
        // After the last corner the index wrapped to 0 and the agent is
        // still traveling.
        assert_eq!(store.current_index[0], 0);
        assert!(!store.reached_end[0]);
        assert_eq!(store.progress[0], 0.0);
    }
}

#[cfg(test)]
mod edge_cases {
    use super::*;

    #[test]
    fn no_path_yields_idle_steps() {
        let store = store_with(PathSeed::default());
        let step = store.step(A, Vec3::new(3.0, 0.0, 4.0), 3.0);
        assert_eq!(step.desired_velocity, Vec3::ZERO);
        assert!(!step.waypoint_reached);
    }

    #[test]
    fn empty_waypoint_list_yields_idle_steps() {
        let store = store_with(PathSeed::following(PathAsset::new(vec![])));
        let step = store.step(A, Vec3::ZERO, 3.0);
        assert_eq!(step.desired_velocity, Vec3::ZERO);
        assert!(!step.reached_end);
        assert_eq!(step.next_index, 0);
    }

    #[test]
    fn sitting_on_distant_target_requests_nothing() {
        // Exactly at the waypoint but outside reach_distance can't happen;
        // within the arrival epsilon the desired velocity must be zero even
        // if reach_distance is tiny.
        let path = PathAsset::new(vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]);
        let store = store_with(PathSeed::following(path).reach_distance(0.001));
        let step = store.step(A, Vec3::new(0.05, 0.0, 0.0), 3.0);
        assert_eq!(step.desired_velocity, Vec3::ZERO);
    }

    #[test]
    fn one_asset_shared_by_many_agents() {
        let path = square_path();
        let mut store = PathStore::with_capacity(3);
        for _ in 0..3 {
            store.push(&PathSeed::following(path.clone()), &config());
        }
        // Three handles, one asset.
        assert_eq!(std::sync::Arc::strong_count(&path), 4);
        // Independent traversal state.
        let step = store.step(AgentId(1), Vec3::new(0.0, 0.0, 0.0), 3.0);
        store.apply(AgentId(1), &step);
        assert_eq!(store.current_index[0], 0);
        assert_eq!(store.current_index[1], 1);
        assert_eq!(store.current_index[2], 0);
    }

    #[test]
    fn swap_remove_keeps_remaining_state() {
        let mut store = PathStore::with_capacity(2);
        store.push(&PathSeed::following(square_path()).reach_distance(9.0), &config());
        store.push(&PathSeed::following(square_path()).reach_distance(5.0), &config());
        store.swap_remove(AgentId(0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.reach_distance[0], 5.0);
    }
}
