//! `crowd-path` — waypoint paths and the per-agent traversal state machine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`asset`]    | `PathAsset` — immutable waypoint sequence, `Arc`-shared |
//! | [`follower`] | `PathStore`, `PathStep`, the waypoint state machine    |
//!
//! # Traversal model (summary)
//!
//! A path-following agent is in one of two states:
//!
//! ```text
//! Traveling ──(reach last waypoint, looping)──▶ Traveling (index wraps to 0)
//! Traveling ──(reach last waypoint, one-shot)─▶ ReachedEnd (sticky, desired = 0)
//! ```
//!
//! While traveling, the desired velocity points at the current waypoint on
//! the XZ plane at the agent's max speed.  One waypoint sequence asset can be
//! referenced by any number of agents; traversal state is per agent.

pub mod asset;
pub mod follower;

#[cfg(test)]
mod tests;

pub use asset::PathAsset;
pub use follower::{PathSeed, PathStep, PathStore};
