//! High-level runtime orchestrator.
//!
//! The runtime owns the compare worker, wires up its command channel, and
//! hands out [`RuntimeHandle`]s for clients to submit requests through.

use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use calc_core::{CombatOracle, CompareConfig, MonsterScaling};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::workers::{Command, CompareWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub compare: CompareConfig,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_COMMAND_BUFFER: usize = 16;

    /// Defaults overridden by `COMPARE_RUN_NAME` and `COMPARE_COMMAND_BUFFER`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(run_name) = lookup("COMPARE_RUN_NAME").filter(|name| !name.is_empty()) {
            config.compare = CompareConfig::with_run_name(run_name);
        }

        if let Some(capacity) = parse::<usize>(lookup("COMPARE_COMMAND_BUFFER")) {
            config.command_buffer_size = capacity.max(1);
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            compare: CompareConfig::default(),
            command_buffer_size: Self::DEFAULT_COMMAND_BUFFER,
        }
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: FromStr,
{
    value?.trim().parse().ok()
}

/// Main runtime that runs comparisons in the background
///
/// Runtime owns the worker; [`RuntimeHandle`] provides a cloneable façade
/// for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Spawn the compare worker on the current Tokio runtime.
    pub fn start<O, S>(config: RuntimeConfig, oracle: O, scaling: S) -> Self
    where
        O: CombatOracle + 'static,
        S: MonsterScaling + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size);
        let latest_generation = Arc::new(AtomicU64::new(0));

        let handle = RuntimeHandle::new(command_tx, Arc::clone(&latest_generation));
        let worker = CompareWorker::new(
            Arc::new(oracle),
            Arc::new(scaling),
            config.compare,
            command_rx,
            latest_generation,
        );

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Self {
            handle,
            worker_handle,
        }
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker exits once every outstanding handle has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}
