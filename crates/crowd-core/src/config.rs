//! Crowd simulation configuration.
//!
//! `CrowdConfig` is the single configuration surface of the framework:
//! grid geometry, steering weight multipliers, per-agent defaults, and the
//! fixed time step.  Typically loaded from a TOML/JSON file by the
//! application crate (enable the `serde` feature) and passed to the
//! simulation builder.
//!
//! [`CrowdConfig::validate`] is the only place where bad input becomes a
//! user-visible error.  Everything past the validation boundary assumes a
//! well-formed config; per-tick anomalies degrade to no-ops instead.

use crate::{CrowdError, CrowdResult, Vec3};

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrowdConfig {
    // ── Grid geometry ─────────────────────────────────────────────────────
    /// Edge length of one grid cell.  The 3×3 neighborhood query is complete
    /// only for query radii up to this value, so it must be at least the
    /// largest avoidance radius in use.
    pub cell_size: f32,

    /// Number of grid columns (X axis).
    pub grid_width: u32,

    /// Number of grid rows (Z axis).
    pub grid_height: u32,

    /// Lower corner of the world bounds.  Positions outside are clamped to
    /// edge cells, never rejected.
    pub world_min: Vec3,

    /// Upper corner of the world bounds.
    pub world_max: Vec3,

    // ── Steering weights ──────────────────────────────────────────────────
    /// Multiplier on the peer-separation force.
    pub separation_weight: f32,

    /// Multiplier on the alignment force (velocity matching with neighbors).
    pub alignment_weight: f32,

    /// Multiplier on the cohesion force (steering toward the local center).
    pub cohesion_weight: f32,

    /// Multiplier on the path-following (seek) force.
    pub path_weight: f32,

    /// Multiplier applied to the obstacle repulsion force.  Obstacles repel
    /// more strongly than peers; their contribution is added unclamped and
    /// only bounded by the final max-force clamp.
    pub obstacle_priority: f32,

    // ── Per-agent defaults (used when a seed leaves them unset) ───────────
    /// Default speed ceiling.
    pub default_max_speed: f32,

    /// Default steering-force ceiling.
    pub default_max_force: f32,

    /// Default radius within which peers and obstacles are avoided.
    pub default_avoidance_radius: f32,

    /// Default body radius.
    pub default_radius: f32,

    /// Default distance at which a waypoint counts as reached.
    pub default_reach_distance: f32,

    /// Whether newly spawned agents loop their paths by default.
    pub looping_paths: bool,

    // ── Run parameters ────────────────────────────────────────────────────
    /// Simulated seconds advanced per tick by `run_ticks`.
    pub delta_secs: f32,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored when the `parallel` feature is disabled.
    pub num_threads: Option<usize>,

    /// Master RNG seed for spawn placement.
    pub seed: u64,
}

impl Default for CrowdConfig {
    /// Defaults sized for a 128 × 128 m plaza at 60 ticks/second.
    fn default() -> Self {
        Self {
            cell_size: 4.0,
            grid_width: 32,
            grid_height: 32,
            world_min: Vec3::new(-64.0, 0.0, -64.0),
            world_max: Vec3::new(64.0, 0.0, 64.0),

            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
            path_weight: 1.0,
            obstacle_priority: 2.0,

            default_max_speed: 7.0,
            default_max_force: 2.0,
            default_avoidance_radius: 2.0,
            default_radius: 0.5,
            default_reach_distance: 1.5,
            looping_paths: true,

            delta_secs: 1.0 / 60.0,
            snapshot_interval_ticks: 0,
            num_threads: None,
            seed: 42,
        }
    }
}

impl CrowdConfig {
    /// Check every field for validity.
    ///
    /// # Errors
    ///
    /// Returns [`CrowdError::Config`] naming the offending field.  Callers
    /// that hot-swap configuration should keep the prior valid config when
    /// this fails.
    pub fn validate(&self) -> CrowdResult<()> {
        fn fail(msg: String) -> CrowdResult<()> {
            Err(CrowdError::Config(msg))
        }

        if !(self.cell_size > 0.0) {
            return fail(format!("cell_size must be positive, got {}", self.cell_size));
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return fail(format!(
                "grid dimensions must be nonzero, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }
        if self.world_max.x <= self.world_min.x || self.world_max.z <= self.world_min.z {
            return fail(format!(
                "world bounds are inverted or empty: min {} max {}",
                self.world_min, self.world_max
            ));
        }
        if !(self.default_max_speed > 0.0) {
            return fail(format!(
                "default_max_speed must be positive, got {}",
                self.default_max_speed
            ));
        }
        if !(self.default_max_force > 0.0) {
            return fail(format!(
                "default_max_force must be positive, got {}",
                self.default_max_force
            ));
        }
        if self.default_avoidance_radius < 0.0 {
            return fail(format!(
                "default_avoidance_radius must not be negative, got {}",
                self.default_avoidance_radius
            ));
        }
        if self.default_radius < 0.0 {
            return fail(format!(
                "default_radius must not be negative, got {}",
                self.default_radius
            ));
        }
        if !(self.default_reach_distance > 0.0) {
            return fail(format!(
                "default_reach_distance must be positive, got {}",
                self.default_reach_distance
            ));
        }
        for (name, w) in [
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("path_weight", self.path_weight),
            ("obstacle_priority", self.obstacle_priority),
        ] {
            if w < 0.0 || !w.is_finite() {
                return fail(format!("{name} must be finite and non-negative, got {w}"));
            }
        }
        if !(self.delta_secs > 0.0) {
            return fail(format!("delta_secs must be positive, got {}", self.delta_secs));
        }
        Ok(())
    }
}
