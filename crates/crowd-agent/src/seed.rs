//! Initial description of a single agent, resolved against config defaults.

use crowd_core::{CrowdConfig, Vec3};

/// Everything needed to create one agent's kinematic state.
///
/// Per-agent limits are optional: `None` means "use the config default",
/// resolved once at spawn time so the store never has to consult the config
/// on the hot path.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSeed {
    /// Spawn position.  The vertical component is carried through unchanged;
    /// steering only ever moves agents in the XZ plane.
    pub position: Vec3,

    /// Initial velocity.  Defaults to rest.
    pub velocity: Vec3,

    /// Crowd group tag (visual variety, group-aware queries downstream).
    pub group: u16,

    pub max_speed: Option<f32>,
    pub max_force: Option<f32>,
    pub avoidance_radius: Option<f32>,
    pub radius: Option<f32>,
}

impl AgentSeed {
    /// A default-limits agent at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_group(mut self, group: u16) -> Self {
        self.group = group;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = Some(max_speed);
        self
    }

    pub fn with_max_force(mut self, max_force: f32) -> Self {
        self.max_force = Some(max_force);
        self
    }

    pub fn with_avoidance_radius(mut self, radius: f32) -> Self {
        self.avoidance_radius = Some(radius);
        self
    }

    /// Resolve optional limits against config defaults, producing the final
    /// per-agent values `(max_speed, max_force, avoidance_radius, radius)`.
    pub(crate) fn resolve(&self, config: &CrowdConfig) -> (f32, f32, f32, f32) {
        (
            self.max_speed.unwrap_or(config.default_max_speed),
            self.max_force.unwrap_or(config.default_max_force),
            self.avoidance_radius.unwrap_or(config.default_avoidance_radius),
            self.radius.unwrap_or(config.default_radius),
        )
    }
}
