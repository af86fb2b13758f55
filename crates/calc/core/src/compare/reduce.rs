//! Output reduction: one input set in, one formatted value per loadout out.
//!
//! Metric selection is a table lookup ([`Metric::for_axis`]) rather than a
//! chain of conditionals, so every Y axis is checked at compile time to map
//! onto exactly one oracle kind and accessor.

use std::borrow::Cow;

use crate::config::CompareConfig;
use crate::env::{
    CalcEnv, CalcOpts, CombatOracle, HitDistribution, MonsterScaling, MonsterVsPlayerCalc,
    PlayerVsMonsterCalc,
};
use crate::state::{Loadout, Monster};

use super::axis::{XAxis, YAxis};
use super::chart::SeriesValues;
use super::sweep::InputSet;

/// Weapons whose special attack lowers the target's defence.
pub const SPECIAL_DEFENCE_REDUCTION_WEAPONS: &[&str] = &[
    "Dragon warhammer",
    "Bandos godsword",
    "Tonalztics of ralos",
    "Elder maul",
];

/// Whether the loadout's weapon has a defence-reducing special attack.
pub fn has_defence_reducing_special(loadout: &Loadout) -> bool {
    loadout
        .equipment
        .weapon_name()
        .is_some_and(|name| SPECIAL_DEFENCE_REDUCTION_WEAPONS.contains(&name))
}

/// Accessors on the player-attacking calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerMetric {
    Dps,
    ExpectedHit,
    TimeToKill,
    MaxHit,
}

impl PlayerMetric {
    pub fn read<C: PlayerVsMonsterCalc>(self, calc: &C) -> Option<f64> {
        match self {
            PlayerMetric::Dps => Some(calc.dps()),
            PlayerMetric::ExpectedHit => Some(calc.expected_hit_distribution().expected_damage()),
            PlayerMetric::TimeToKill => calc.time_to_kill(),
            PlayerMetric::MaxHit => Some(calc.max_hit()),
        }
    }
}

/// Accessors on the monster-attacking calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonsterMetric {
    Dps,
    AverageDamageTaken,
}

impl MonsterMetric {
    pub fn read<C: MonsterVsPlayerCalc>(self, calc: &C) -> Option<f64> {
        match self {
            MonsterMetric::Dps => Some(calc.dps()),
            MonsterMetric::AverageDamageTaken => calc.average_damage_taken(),
        }
    }
}

/// Oracle kind and accessor for one Y axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Player(PlayerMetric),
    Monster(MonsterMetric),
    /// Gear-dependent: only loadouts with a qualifying weapon report a value.
    SpecDefenceReduction,
}

impl Metric {
    pub const fn for_axis(axis: YAxis) -> Self {
        match axis {
            YAxis::PlayerDps => Metric::Player(PlayerMetric::Dps),
            YAxis::PlayerExpectedHit => Metric::Player(PlayerMetric::ExpectedHit),
            YAxis::PlayerTtk => Metric::Player(PlayerMetric::TimeToKill),
            YAxis::PlayerMaxHit => Metric::Player(PlayerMetric::MaxHit),
            YAxis::MonsterDps => Metric::Monster(MonsterMetric::Dps),
            YAxis::DamageTaken => Metric::Monster(MonsterMetric::AverageDamageTaken),
            YAxis::MonsterDefenceAfterSpec => Metric::SpecDefenceReduction,
        }
    }

    /// Decimal places used when formatting this metric.
    pub const fn precision(self) -> usize {
        match self {
            Metric::SpecDefenceReduction => CompareConfig::DEF_REDUCTION_PRECISION,
            Metric::Player(_) | Metric::Monster(_) => CompareConfig::DPS_PRECISION,
        }
    }
}

pub(crate) fn format_value(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Later loadouts sharing a key overwrite earlier ones in place.
fn insert_or_replace(
    mut values: SeriesValues,
    (key, value): (String, Option<String>),
) -> SeriesValues {
    match values.iter_mut().find(|(existing, _)| *existing == key) {
        Some(slot) => slot.1 = value,
        None => values.push((key, value)),
    }
    values
}

/// Turns input sets into per-loadout formatted values.
pub struct OutputReducer<'a, O, S>
where
    O: CombatOracle + ?Sized,
    S: MonsterScaling + ?Sized,
{
    env: CalcEnv<'a, O, S>,
    x_axis: XAxis,
    y_axis: YAxis,
    opts: &'a CalcOpts,
    spec_opts: CalcOpts,
}

impl<'a, O, S> OutputReducer<'a, O, S>
where
    O: CombatOracle + ?Sized,
    S: MonsterScaling + ?Sized,
{
    pub fn new(env: CalcEnv<'a, O, S>, x_axis: XAxis, y_axis: YAxis, opts: &'a CalcOpts) -> Self {
        Self {
            env,
            x_axis,
            y_axis,
            opts,
            spec_opts: opts.clone().with_special_attack(),
        }
    }

    /// Monster state handed to the oracle for `input`.
    ///
    /// The defence reduction metric and the HP axis already carry the state
    /// they need; everything else gets full scaling here.
    pub fn monster_for_calcs<'m>(&self, input: &'m InputSet<'_>) -> Cow<'m, Monster> {
        if self.y_axis == YAxis::MonsterDefenceAfterSpec || self.x_axis == XAxis::MonsterHp {
            Cow::Borrowed(input.monster.as_ref())
        } else {
            Cow::Owned(self.env.scaling().scale_full(&input.monster))
        }
    }

    /// Formatted value per loadout key for one sweep point.
    ///
    /// Keys are unique. A loadout whose display key repeats an earlier one
    /// replaces that value and keeps its column position.
    pub fn reduce(&self, input: &InputSet<'_>) -> SeriesValues {
        let monster = self.monster_for_calcs(input);
        let metric = Metric::for_axis(self.y_axis);
        let precision = metric.precision();

        input
            .loadouts
            .iter()
            .enumerate()
            .filter_map(|(index, loadout)| {
                let value = self.evaluate(metric, loadout, &monster)?;
                let key = loadout.display_key(index);
                Some((key, value.map(|v| format_value(v, precision))))
            })
            .fold(SeriesValues::new(), insert_or_replace)
    }

    /// `None` drops the loadout from the row; `Some(None)` keeps it undefined.
    fn evaluate(&self, metric: Metric, loadout: &Loadout, monster: &Monster) -> Option<Option<f64>> {
        let oracle = self.env.oracle();
        match metric {
            Metric::Player(accessor) => {
                let calc = oracle.player_vs_monster(loadout, monster, self.opts);
                Some(accessor.read(&calc))
            }
            Metric::Monster(accessor) => {
                let calc = oracle.monster_vs_player(loadout, monster, self.opts);
                Some(accessor.read(&calc))
            }
            Metric::SpecDefenceReduction => {
                if !has_defence_reducing_special(loadout) {
                    return None;
                }
                let calc = oracle.player_vs_monster(loadout, monster, &self.spec_opts);
                Some(Some(calc.expected_defence_reduction_from_special()))
            }
        }
    }
}
