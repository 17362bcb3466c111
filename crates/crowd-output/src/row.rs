//! Plain data row types written by output backends.

/// One agent's state at a captured snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick: u64,
    pub x: f32,
    pub z: f32,
    /// Planar speed in m/s.
    pub speed: f32,
    /// Facing angle in radians.
    pub yaw: f32,
    /// Index of the waypoint currently being sought.
    pub waypoint_index: u64,
    /// Fraction of the path completed, in `[0, 1]`.
    pub path_progress: f32,
    pub reached_end: bool,
    pub blocked: bool,
}

/// Aggregate statistics for one captured snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick: u64,
    pub elapsed_secs: f32,
    pub agent_count: u64,
    pub blocked_count: u64,
    pub mean_speed: f32,
}
