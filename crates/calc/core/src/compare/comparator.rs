//! Comparison orchestrator.

use tracing::debug;

use crate::config::CompareConfig;
use crate::env::{CalcEnv, CalcOpts, CombatOracle, MonsterScaling};
use crate::state::{Loadout, Monster};

use super::annotations::defence_reduction_annotations;
use super::axis::{XAxis, YAxis};
use super::chart::{Annotations, ChartAnnotation, ChartEntry, CompareResult};
use super::reduce::OutputReducer;
use super::sweep::Sweep;

/// Sweeps one X axis for a fixed set of loadouts against one monster.
///
/// Built once per (loadouts, monster, X axis, Y axis) selection; rebuild it
/// when any of them changes. Holds no mutable state, so repeated calls
/// return identical results.
pub struct Comparator<'a, O, S>
where
    O: CombatOracle + ?Sized,
    S: MonsterScaling + ?Sized,
{
    env: CalcEnv<'a, O, S>,
    base_loadouts: Vec<Loadout>,
    original_monster: Monster,
    scaled_base_monster: Monster,
    x_axis: XAxis,
    y_axis: YAxis,
    common_opts: CalcOpts,
}

impl<'a, O, S> Comparator<'a, O, S>
where
    O: CombatOracle + ?Sized,
    S: MonsterScaling + ?Sized,
{
    pub fn new(
        env: CalcEnv<'a, O, S>,
        loadouts: Vec<Loadout>,
        monster: Monster,
        x_axis: XAxis,
        y_axis: YAxis,
    ) -> Self {
        Self::with_config(env, loadouts, monster, x_axis, y_axis, &CompareConfig::default())
    }

    pub fn with_config(
        env: CalcEnv<'a, O, S>,
        loadouts: Vec<Loadout>,
        monster: Monster,
        x_axis: XAxis,
        y_axis: YAxis,
        config: &CompareConfig,
    ) -> Self {
        let scaled_base_monster = env.scaling().scale_full(&monster);
        let common_opts = CalcOpts::new(config.run_name.as_str()).with_monster_scaling_disabled();

        Self {
            env,
            base_loadouts: loadouts,
            original_monster: monster,
            scaled_base_monster,
            x_axis,
            y_axis,
            common_opts,
        }
    }

    pub fn x_axis(&self) -> XAxis {
        self.x_axis
    }

    pub fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    /// Fresh sweep over the configured X axis.
    pub fn sweep(&self) -> Sweep<'_, S> {
        Sweep::new(
            self.x_axis,
            &self.base_loadouts,
            &self.original_monster,
            &self.scaled_base_monster,
            self.env.scaling(),
        )
    }

    fn reducer(&self) -> OutputReducer<'_, O, S> {
        OutputReducer::new(self.env, self.x_axis, self.y_axis, &self.common_opts)
    }

    /// Chart rows in sweep order, plus the padded Y domain maximum.
    ///
    /// The domain is `max(1, ceil(peak * 1.05))`, where values that do not
    /// parse as numbers are left out of the peak.
    pub fn entries(&self) -> (Vec<ChartEntry>, f64) {
        let sweep = self.sweep();
        debug!(
            x_axis = <&'static str>::from(self.x_axis),
            y_axis = <&'static str>::from(self.y_axis),
            points = sweep.len(),
            "starting comparison sweep"
        );

        let reducer = self.reducer();
        let mut peak = 0.0_f64;
        let mut entries = Vec::with_capacity(sweep.len());
        for input in sweep {
            let values = reducer.reduce(&input);
            peak = values.iter().fold(peak, |peak, (_, value)| {
                let parsed = value
                    .as_deref()
                    .map_or(0.0, |v| v.parse::<f64>().unwrap_or(f64::NAN));
                if !parsed.is_nan() && parsed > peak {
                    parsed
                } else {
                    peak
                }
            });
            entries.push(ChartEntry::new(input.x_value, values));
        }

        let domain_max = padded_domain(peak);
        debug!(entries = entries.len(), domain_max, "comparison sweep finished");
        (entries, domain_max)
    }

    /// Reference lines for the X axis.
    pub fn annotations_x(&self) -> Vec<ChartAnnotation> {
        match self.x_axis {
            XAxis::MonsterDefence => {
                defence_reduction_annotations(self.scaled_base_monster.skills.def)
            }
            _ => Vec::new(),
        }
    }

    /// Reference lines for the Y axis. None are defined yet.
    pub fn annotations_y(&self) -> Vec<ChartAnnotation> {
        Vec::new()
    }

    /// Runs the sweep and gathers everything the chart needs.
    pub fn compare(&self) -> CompareResult {
        let (entries, domain_max) = self.entries();
        CompareResult {
            entries,
            annotations: Annotations {
                x: self.annotations_x(),
                y: self.annotations_y(),
            },
            domain_max,
        }
    }
}

fn padded_domain(peak: f64) -> f64 {
    (peak * CompareConfig::DOMAIN_PADDING)
        .ceil()
        .max(CompareConfig::DOMAIN_FLOOR)
}
