//! Common error infrastructure for calc-core.
//!
//! Only configuration mismatches surface as errors here. Data-dependent
//! absence (a target that cannot be killed, a metric that does not apply to a
//! loadout) is carried in the series as a missing value and never aborts a
//! sweep.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Caller and engine disagree about the configuration.
    ///
    /// Examples: an axis code the engine does not know.
    /// Fix the request; retrying unchanged fails again.
    Configuration,

    /// Unexpected state inconsistency inside the engine.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all calc-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to act, not on impact
pub trait CalcError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while resolving a comparison request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompareError {
    /// The X axis code is not covered by the sweep range table.
    #[error("unimplemented x axis {0}")]
    UnknownXAxis(u8),

    /// The Y axis code is not covered by the metric dispatch table.
    #[error("unhandled y axis {0}")]
    UnknownYAxis(u8),
}

impl CalcError for CompareError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CompareError::UnknownXAxis(_) | CompareError::UnknownYAxis(_) => {
                ErrorSeverity::Configuration
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CompareError::UnknownXAxis(_) => "COMPARE_UNKNOWN_X_AXIS",
            CompareError::UnknownYAxis(_) => "COMPARE_UNKNOWN_Y_AXIS",
        }
    }
}
