//! Sweep generation and result aggregation.
//!
//! Data flows one way:
//!
//! ```text
//! base entities ──▶ Sweep ──▶ InputSet per point ──▶ OutputReducer ──▶ ChartEntry
//!                                                       │ (scaling + oracle)
//!                                  Comparator folds entries into a CompareResult
//! ```
mod annotations;
mod axis;
mod chart;
mod comparator;
mod reduce;
mod sweep;

#[cfg(test)]
pub(crate) mod test_support;

pub use annotations::defence_reduction_annotations;
pub use axis::{XAxis, YAxis};
pub use chart::{Annotations, ChartAnnotation, ChartEntry, CompareResult, NO_DATA, SeriesValues};
pub use comparator::Comparator;
pub use reduce::{
    Metric, MonsterMetric, OutputReducer, PlayerMetric, SPECIAL_DEFENCE_REDUCTION_WEAPONS,
    has_defence_reducing_special,
};
pub use sweep::{InputSet, Sweep};
