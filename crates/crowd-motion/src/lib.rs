//! `crowd-motion` — the integration stage of the steering pipeline.
//!
//! Takes the tick's accumulated steering contributions and turns them into
//! new kinematic state: clamp force, integrate velocity and position, derive
//! orientation, detect stuck agents, and accumulate per-agent statistics.
//!
//! Like the other pipeline stages, integration is split into a pure
//! **produce** function ([`integrate`]) callable from parallel workers, and
//! a sequential **apply** that commits the result to the stores.

pub mod integrate;
pub mod store;

#[cfg(test)]
mod tests;

pub use integrate::{integrate, FrameInput, MotionStep};
pub use store::MotionStore;
