//! Combat oracle: the external calculator the comparator defers every
//! combat formula to.
//!
//! Building a calculation performs it; the returned value only exposes
//! accessors. Implementations must be pure with respect to their inputs.

use crate::state::{Loadout, Monster};

/// Options passed with every calculation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalcOpts {
    /// Diagnostic name of the run requesting the calculation.
    pub loadout_name: String,
    /// Use the monster exactly as given; the caller already scaled it.
    pub disable_monster_scaling: bool,
    /// Calculate the loadout's special attack instead of its regular attack.
    pub using_special_attack: bool,
}

impl CalcOpts {
    pub fn new(loadout_name: impl Into<String>) -> Self {
        Self {
            loadout_name: loadout_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_monster_scaling_disabled(mut self) -> Self {
        self.disable_monster_scaling = true;
        self
    }

    #[must_use]
    pub fn with_special_attack(mut self) -> Self {
        self.using_special_attack = true;
        self
    }
}

/// Damage distribution of a single attack.
pub trait HitDistribution {
    fn expected_damage(&self) -> f64;
}

/// Player attacking the monster.
pub trait PlayerVsMonsterCalc {
    type Distribution: HitDistribution;

    fn dps(&self) -> f64;

    fn expected_hit_distribution(&self) -> Self::Distribution;

    /// Seconds to kill, or `None` when the target cannot die under these inputs.
    fn time_to_kill(&self) -> Option<f64>;

    fn max_hit(&self) -> f64;

    /// Expected defence levels removed by one special attack.
    fn expected_defence_reduction_from_special(&self) -> f64;
}

/// Monster attacking the player.
pub trait MonsterVsPlayerCalc {
    fn dps(&self) -> f64;

    /// Damage taken over one kill, or `None` when the kill never completes.
    fn average_damage_taken(&self) -> Option<f64>;
}

/// Factory for both calculation directions.
pub trait CombatOracle: Send + Sync {
    type PlayerCalc: PlayerVsMonsterCalc;
    type MonsterCalc: MonsterVsPlayerCalc;

    fn player_vs_monster(
        &self,
        loadout: &Loadout,
        monster: &Monster,
        opts: &CalcOpts,
    ) -> Self::PlayerCalc;

    fn monster_vs_player(
        &self,
        loadout: &Loadout,
        monster: &Monster,
        opts: &CalcOpts,
    ) -> Self::MonsterCalc;
}
