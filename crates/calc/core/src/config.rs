/// Comparison constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareConfig {
    /// Diagnostic name handed to the oracle with every calculation.
    pub run_name: String,
}

impl CompareConfig {
    // ===== output formatting =====
    /// Decimal places for every metric except the defence reduction.
    pub const DPS_PRECISION: usize = 3;
    /// Decimal places for the special-attack defence reduction metric.
    pub const DEF_REDUCTION_PRECISION: usize = 3;

    // ===== sweep ranges =====
    /// Highest level swept on the player skill axes (inclusive, starting at 0).
    pub const PLAYER_LEVEL_MAX: i32 = 125;

    // ===== chart domain =====
    /// Headroom multiplier applied to the largest observed value.
    pub const DOMAIN_PADDING: f64 = 1.05;
    /// Smallest domain ever returned.
    pub const DOMAIN_FLOOR: f64 = 1.0;

    // ===== defence annotations =====
    /// Maximum number of special-attack applications marked on the defence axis.
    pub const MAX_SPEC_ANNOTATIONS: u32 = 5;
    /// Each application removes `def * NUMERATOR / DENOMINATOR`, truncated.
    pub const DEF_REDUCTION_NUMERATOR: i32 = 3;
    pub const DEF_REDUCTION_DENOMINATOR: i32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RUN_NAME: &'static str = "comparator";

    pub fn new() -> Self {
        Self {
            run_name: Self::DEFAULT_RUN_NAME.to_owned(),
        }
    }

    pub fn with_run_name(run_name: impl Into<String>) -> Self {
        Self {
            run_name: run_name.into(),
        }
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::new()
    }
}
