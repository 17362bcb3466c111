//! Static obstacle description.

use crate::Vec3;

/// A static circular obstacle on the simulation plane.
///
/// Obstacles are read-only inputs to the steering core: their lifecycle
/// (placement, removal) is owned by the surrounding world, and the
/// orchestrator treats the obstacle list as an immutable snapshot for the
/// duration of each tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleRecord {
    /// Center of the obstacle footprint.
    pub position: Vec3,
    /// Footprint radius on the XZ plane.
    pub radius: f32,
    /// Vertical extent — carried for visualization; the planar steering core
    /// ignores it.
    pub height: f32,
    /// `false` marks obstacles the world may move between ticks (the core
    /// still sees a fixed snapshot within any single tick).
    pub is_static: bool,
}

impl ObstacleRecord {
    /// A static obstacle at `position` with the given footprint radius.
    pub fn fixed(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            radius,
            height: 2.0,
            is_static: true,
        }
    }

    /// The distance inside which an agent with `avoidance_radius` starts to
    /// be repelled.
    #[inline]
    pub fn effective_radius(&self, avoidance_radius: f32) -> f32 {
        self.radius + avoidance_radius
    }
}
