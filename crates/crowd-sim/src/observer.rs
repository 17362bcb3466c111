//! Observer hooks for instrumenting a running simulation.
//!
//! All methods have no-op defaults, so an observer implements only the hooks
//! it cares about.  Observers run on the orchestrator thread between ticks;
//! they never see mid-tick (pre-barrier) state.

use crowd_core::Tick;

use crate::CrowdSnapshot;

pub trait CrowdObserver {
    /// Called just before a tick's stages run.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick completes, with the post-tick agent count.
    fn on_tick_end(&mut self, _tick: Tick, _agent_count: usize) {}

    /// Called with a full state capture at the configured snapshot interval.
    fn on_snapshot(&mut self, _snapshot: &CrowdSnapshot) {}

    /// Called once when `run_ticks` finishes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// Observer that does nothing.  Useful for headless benchmark runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl CrowdObserver for NoopObserver {}
