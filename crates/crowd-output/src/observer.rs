//! `CrowdOutputObserver<W>` — bridges `CrowdObserver` to an `OutputWriter`.

use crowd_core::Tick;
use crowd_sim::{CrowdObserver, CrowdSnapshot};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`CrowdObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Both files are driven off the snapshot callback, so row density follows
/// the simulation's `snapshot_interval_ticks`.  Errors from the writer are
/// stored internally because observer methods have no return value; after
/// `run_ticks` returns, check for them with [`take_error`][Self::take_error].
pub struct CrowdOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> CrowdOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `run_ticks` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> CrowdObserver for CrowdOutputObserver<W> {
    fn on_snapshot(&mut self, snapshot: &CrowdSnapshot) {
        let tick = snapshot.tick.0;

        let rows: Vec<AgentSnapshotRow> = snapshot
            .agents
            .iter()
            .map(|agent| AgentSnapshotRow {
                agent_id: agent.id.0,
                tick,
                x: agent.position.x,
                z: agent.position.z,
                speed: agent.velocity.planar().length(),
                yaw: agent.yaw,
                waypoint_index: agent.waypoint_index as u64,
                path_progress: agent.path_progress,
                reached_end: agent.reached_end,
                blocked: agent.blocked,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let summary = TickSummaryRow {
            tick,
            elapsed_secs: snapshot.elapsed_secs,
            agent_count: snapshot.agents.len() as u64,
            blocked_count: snapshot.blocked_count as u64,
            mean_speed: snapshot.mean_speed,
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
