//! `crowd-core` — foundational types for the `rust_crowd` steering framework.
//!
//! This crate is a dependency of every other `crowd-*` crate.  It intentionally
//! has no `crowd-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `AgentId`, `PathId`                                   |
//! | [`vec3`]     | `Vec3` — planar-biased 3D vector math                 |
//! | [`time`]     | `Tick`, `SimClock`                                    |
//! | [`rng`]      | `SimRng` (global, seeded)                             |
//! | [`config`]   | `CrowdConfig` + validation                            |
//! | [`obstacle`] | `ObstacleRecord`                                      |
//! | [`error`]    | `CrowdError`, `CrowdResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod obstacle;
pub mod rng;
pub mod time;
pub mod vec3;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CrowdConfig;
pub use error::{CrowdError, CrowdResult};
pub use ids::{AgentId, PathId};
pub use obstacle::ObstacleRecord;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
pub use vec3::Vec3;
