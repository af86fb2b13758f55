//! Traits describing the external collaborators.
//!
//! The [`CombatOracle`] owns every combat formula and [`MonsterScaling`] owns
//! encounter scaling. [`CalcEnv`] bundles them so the comparator can reach
//! both without coupling to concrete implementations.
mod oracle;
mod scaling;

pub use oracle::{
    CalcOpts, CombatOracle, HitDistribution, MonsterVsPlayerCalc, PlayerVsMonsterCalc,
};
pub use scaling::MonsterScaling;

/// Read-only collaborators required by the sweep and the reducer.
#[derive(Debug)]
pub struct CalcEnv<'a, O, S>
where
    O: CombatOracle + ?Sized,
    S: MonsterScaling + ?Sized,
{
    oracle: &'a O,
    scaling: &'a S,
}

impl<O, S> Clone for CalcEnv<'_, O, S>
where
    O: CombatOracle + ?Sized,
    S: MonsterScaling + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, S> Copy for CalcEnv<'_, O, S>
where
    O: CombatOracle + ?Sized,
    S: MonsterScaling + ?Sized,
{
}

impl<'a, O, S> CalcEnv<'a, O, S>
where
    O: CombatOracle + ?Sized,
    S: MonsterScaling + ?Sized,
{
    pub fn new(oracle: &'a O, scaling: &'a S) -> Self {
        Self { oracle, scaling }
    }

    pub fn oracle(&self) -> &'a O {
        self.oracle
    }

    pub fn scaling(&self) -> &'a S {
        self.scaling
    }
}
