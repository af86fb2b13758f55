//! Worker tasks that back the runtime orchestration.
mod compare;

pub use compare::{Command, CompareWorker};
