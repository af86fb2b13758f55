//! Unified error types surfaced by the runtime API.
//!
//! Wraps worker coordination failures, request decoding, and axis
//! resolution so clients can bubble them up with consistent context.
use calc_core::{CalcError, CompareError};
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("compare worker command channel closed")]
    CommandChannelClosed,

    #[error("compare worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("compare worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("compare request {generation} was superseded by a newer one")]
    Superseded { generation: u64 },

    #[error("compare request could not be decoded")]
    InvalidRequest(#[source] serde_json::Error),

    #[error(transparent)]
    Compare(#[from] CompareError),
}

impl RuntimeError {
    /// Whether the caller should simply wait for its newer request.
    pub fn is_superseded(&self) -> bool {
        matches!(self, RuntimeError::Superseded { .. })
    }

    /// Stable code of the wrapped configuration error, if any.
    pub fn compare_code(&self) -> Option<&'static str> {
        match self {
            RuntimeError::Compare(err) => Some(err.error_code()),
            _ => None,
        }
    }
}
