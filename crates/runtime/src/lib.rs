//! Async shell around the loadout comparison engine.
//!
//! A full sweep can call the combat oracle hundreds of times, so this crate
//! moves it off the caller's task. Consumers start a [`Runtime`], hand out
//! [`RuntimeHandle`]s, and await chart data per request.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and its configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`logging`] installs the tracing subscriber used by binaries and tests
//! - `workers` keeps the background compare task internal to the crate
pub mod api;
pub mod logging;
pub mod runtime;

mod workers;

pub use api::{CompareRequest, RawAxes, Result, RuntimeError, RuntimeHandle};
pub use logging::init_tracing;
pub use runtime::{Runtime, RuntimeConfig};
