//! Public API surface for runtime consumers.
mod errors;
mod handle;
mod request;

pub use errors::{Result, RuntimeError};
pub use handle::RuntimeHandle;
pub use request::{CompareRequest, RawAxes};
