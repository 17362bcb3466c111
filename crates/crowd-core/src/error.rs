//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CrowdError` via `From` impls, or keep them separate and wrap `CrowdError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.
//!
//! Per-agent anomalies on the tick hot path (degenerate vectors, coincident
//! positions, exhausted waypoint indices) are never errors — they are absorbed
//! into zero/no-op behavior locally.  The only user-visible failure class is
//! invalid configuration, rejected at the validation boundary.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `crowd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CrowdError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `crowd-*` crates.
pub type CrowdResult<T> = Result<T, CrowdError>;
