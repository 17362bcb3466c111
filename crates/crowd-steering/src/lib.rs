//! `crowd-steering` — steering-force computations for the `rust_crowd`
//! framework.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`forces`]      | Pure functions: seek, peer forces, obstacle repulsion, combination |
//! | [`accumulator`] | `SteeringStore` — per-agent force SoA, recomputed each tick |
//!
//! # Force model (summary)
//!
//! Every function here is a pure map from local state + immutable snapshots
//! to a bounded force vector.  The orchestrator calls them from parallel
//! per-agent tasks; nothing in this crate mutates shared state.
//!
//! ```text
//! combined = seek + w_sep·separation + w_ali·alignment + w_coh·cohesion + obstacle
//! |combined| ≤ max_force          (rescaled after summation)
//! combined.y = 0                  (planar movement)
//! ```
//!
//! Degenerate geometry (coincident agents, zero-length directions) always
//! produces a zero contribution, never a NaN — see
//! `crowd_core::Vec3::normalized_or_zero`.

pub mod accumulator;
pub mod forces;


pub use accumulator::SteeringStore;
pub use forces::{combine, obstacle_avoidance, peer_forces, seek, steer_toward, PeerForces};
