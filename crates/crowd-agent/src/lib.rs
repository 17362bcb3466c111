//! `crowd-agent` — Structure-of-Arrays agent storage for the `rust_crowd`
//! framework.
//!
//! The kinematic state of every agent lives here as parallel `Vec`s indexed
//! by `AgentId`.  Sibling crates keep their own SoA stores (steering
//! accumulators, path state, motion bookkeeping) aligned to the same indices;
//! the orchestrator in `crowd-sim` is responsible for applying spawns and
//! despawns to all stores in lockstep.

pub mod seed;
pub mod store;

#[cfg(test)]
mod tests;

pub use seed::AgentSeed;
pub use store::AgentStore;
