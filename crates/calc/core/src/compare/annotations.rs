//! Fixed reference markers overlaid on the chart.

use crate::config::CompareConfig;

use super::chart::ChartAnnotation;

/// Defence after each successive defence-reducing special attack.
///
/// Starts with the baseline, then removes `def * 3 / 10` (truncated) per
/// application, for at most [`CompareConfig::MAX_SPEC_ANNOTATIONS`]
/// applications or until an application would remove nothing.
pub fn defence_reduction_annotations(base_def: i32) -> Vec<ChartAnnotation> {
    let mut annotations = vec![ChartAnnotation::new(format!("Base Def ({base_def})"), base_def)];

    let mut current = base_def;
    for application in 1..=CompareConfig::MAX_SPEC_ANNOTATIONS {
        let reduction =
            current * CompareConfig::DEF_REDUCTION_NUMERATOR / CompareConfig::DEF_REDUCTION_DENOMINATOR;
        if reduction == 0 {
            break;
        }
        current -= reduction;
        annotations.push(ChartAnnotation::new(format!("DWH x{application}"), current));
    }

    annotations
}
