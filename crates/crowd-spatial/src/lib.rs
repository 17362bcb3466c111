//! `crowd-spatial` — uniform-grid spatial index for the `rust_crowd`
//! framework.
//!
//! # Query contract
//!
//! [`SpatialGrid::neighbors_into`] returns the union of agent indices in the
//! 3×3 cell block around the query position.  That set is **complete** (zero
//! false negatives) for any query radius up to `cell_size`, and may contain
//! false positives beyond the radius — callers must re-filter candidates by
//! exact distance.  Positions outside the world bounds clamp to edge cells,
//! so a query never fails.
//!
//! # Cost model
//!
//! `build` is O(agents); each query touches at most 9 cells, O(1) expected
//! for uniform crowd densities.

pub mod grid;


pub use grid::SpatialGrid;
