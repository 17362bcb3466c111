//! Immutable, shared waypoint sequences.

use std::sync::Arc;

use crowd_core::Vec3;

/// An ordered, immutable sequence of waypoints.
///
/// Path assets are authored once (by scene setup or a loader) and shared by
/// handle: every agent following the same route holds an `Arc` to the same
/// asset, never a copy.  The asset outlives any single agent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathAsset {
    waypoints: Vec<Vec3>,
}

impl PathAsset {
    /// Wrap a waypoint list into a shareable asset.
    ///
    /// An empty list is allowed; agents assigned an empty path simply never
    /// move toward anything.
    pub fn new(waypoints: Vec<Vec3>) -> Arc<Self> {
        Arc::new(Self { waypoints })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoint at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`; the traversal state machine guarantees
    /// in-range indices while non-terminal.
    #[inline]
    pub fn waypoint(&self, index: usize) -> Vec3 {
        self.waypoints[index]
    }

    /// The full waypoint slice (debug visualization, tests).
    #[inline]
    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }
}
