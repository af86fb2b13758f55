//! Cloneable façade for issuing compare requests to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and stamps every request with a
//! generation number so stale results can be told apart from fresh ones.
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use calc_core::CompareResult;
use tokio::sync::{mpsc, oneshot};

use super::errors::{Result, RuntimeError};
use super::request::CompareRequest;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    latest_generation: Arc<AtomicU64>,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, latest_generation: Arc<AtomicU64>) -> Self {
        Self {
            command_tx,
            latest_generation,
        }
    }

    /// Run a comparison in the background.
    ///
    /// The request is stamped when this is called, not when the returned
    /// future is first polled. Any request issued afterwards supersedes it.
    pub fn compare(
        &self,
        request: CompareRequest,
    ) -> impl Future<Output = Result<CompareResult>> + Send + use<> {
        let generation = self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let command_tx = self.command_tx.clone();

        async move {
            let (reply_tx, reply_rx) = oneshot::channel();

            command_tx
                .send(Command::Compare {
                    request,
                    generation,
                    reply: reply_tx,
                })
                .await
                .map_err(|_| RuntimeError::CommandChannelClosed)?;

            reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
        }
    }

    /// Decode a JSON request and run it.
    pub async fn compare_json(&self, payload: &str) -> Result<CompareResult> {
        let request = CompareRequest::from_json(payload)?;
        self.compare(request).await
    }

    /// Generation of the most recently issued request.
    pub fn latest_generation(&self) -> u64 {
        self.latest_generation.load(Ordering::SeqCst)
    }
}
