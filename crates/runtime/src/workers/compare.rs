//! Compare worker that runs sweeps off the async executor.
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), runs each
//! comparison on the blocking pool, and drops results that a newer request
//! has already made stale.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use calc_core::{CalcEnv, CombatOracle, CompareConfig, CompareResult, Comparator, MonsterScaling};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::api::{CompareRequest, Result, RuntimeError};

/// Commands that can be sent to the compare worker
pub enum Command {
    /// Run one comparison. `generation` orders it against other requests.
    Compare {
        request: CompareRequest,
        generation: u64,
        reply: oneshot::Sender<Result<CompareResult>>,
    },
}

/// Background task that owns the oracle and the scaling adapter.
///
/// Requests are handled one at a time in arrival order. A request whose
/// generation is no longer the latest is answered with
/// [`RuntimeError::Superseded`], both before it starts and after it finishes.
pub struct CompareWorker<O, S> {
    oracle: Arc<O>,
    scaling: Arc<S>,
    config: CompareConfig,
    command_rx: mpsc::Receiver<Command>,
    latest_generation: Arc<AtomicU64>,
}

impl<O, S> CompareWorker<O, S>
where
    O: CombatOracle + 'static,
    S: MonsterScaling + 'static,
{
    pub fn new(
        oracle: Arc<O>,
        scaling: Arc<S>,
        config: CompareConfig,
        command_rx: mpsc::Receiver<Command>,
        latest_generation: Arc<AtomicU64>,
    ) -> Self {
        info!(run_name = %config.run_name, "CompareWorker initialized");

        Self {
            oracle,
            scaling,
            config,
            command_rx,
            latest_generation,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd).await;
                }
                else => break,
            }
        }
        debug!("CompareWorker stopped");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Compare {
                request,
                generation,
                reply,
            } => {
                let result = self.handle_compare(request, generation).await;
                if reply.send(result).is_err() {
                    debug!(generation, "Compare reply channel closed (caller dropped)");
                }
            }
        }
    }

    async fn handle_compare(
        &self,
        request: CompareRequest,
        generation: u64,
    ) -> Result<CompareResult> {
        self.ensure_current(generation)?;

        debug!(
            generation,
            loadouts = request.loadouts.len(),
            monster = %request.monster.name,
            "running comparison"
        );

        let oracle = Arc::clone(&self.oracle);
        let scaling = Arc::clone(&self.scaling);
        let config = self.config.clone();
        let result = tokio::task::spawn_blocking(move || {
            let env = CalcEnv::new(oracle.as_ref(), scaling.as_ref());
            Comparator::with_config(
                env,
                request.loadouts,
                request.monster,
                request.x_axis,
                request.y_axis,
                &config,
            )
            .compare()
        })
        .await
        .map_err(RuntimeError::WorkerJoin)?;

        self.ensure_current(generation)?;
        Ok(result)
    }

    fn ensure_current(&self, generation: u64) -> Result<()> {
        let latest = self.latest_generation.load(Ordering::SeqCst);
        if generation < latest {
            warn!(generation, latest, "discarding superseded comparison");
            return Err(RuntimeError::Superseded { generation });
        }
        Ok(())
    }
}
