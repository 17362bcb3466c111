//! `crowd-sim` — tick orchestrator for the `rust_crowd` framework.
//!
//! # Five-stage tick pipeline
//!
//! ```text
//! for each step(dt):
//!   ⓪ Population — apply queued spawn/despawn requests (tick boundary only).
//!   ① Grid       — rebuild the spatial index from current positions.
//!   ② Path       — waypoint state machine → desired velocity per agent.
//!   ③ Peers      — grid-filtered separation/alignment/cohesion per agent.
//!   ④ Obstacles  — repulsion from the obstacle snapshot per agent.
//!   ⑤ Integrate  — clamp forces, update velocity/position/yaw/stats.
//! ```
//!
//! Every stage is a full barrier: stage N+1 sees all of stage N's writes.
//! Stages ②–⑤ each run as a side-effect-free **produce** over immutable
//! store snapshots followed by a sequential ascending-index **apply**; with
//! the `parallel` Cargo feature, the produce half runs on Rayon's thread
//! pool and the `collect` is the barrier.  Results are identical either way.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs each stage's produce phase on Rayon's thread pool.|
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use crowd_core::{CrowdConfig, Vec3};
//! use crowd_path::{PathAsset, PathSeed};
//! use crowd_sim::{CrowdSimBuilder, NoopObserver, SpawnRequest};
//!
//! let path = PathAsset::new(vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]);
//! let mut sim = CrowdSimBuilder::new(CrowdConfig::default())
//!     .spawn_all((0..100).map(|i| SpawnRequest::at(Vec3::new(i as f32, 0.0, 0.0))
//!         .with_path(PathSeed::following(path.clone()))))
//!     .build()?;
//! sim.run_ticks(600, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod spawner;


pub use builder::CrowdSimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{CrowdObserver, NoopObserver};
pub use sim::{CrowdSim, SpawnRequest};
pub use snapshot::{AgentSnapshot, CrowdSnapshot};
pub use spawner::{CrowdSpawner, SpawnPlan};
