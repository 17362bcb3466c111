use crowd_core::CrowdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Configuration rejected at the validation boundary — the only
    /// user-visible failure class.  Callers hot-swapping configuration keep
    /// the prior valid one when they see this.
    #[error("simulation configuration rejected: {0}")]
    Config(#[from] CrowdError),
}

pub type SimResult<T> = Result<T, SimError>;
