//! Deterministic loadout comparison engine.
//!
//! `calc-core` sweeps one controllable parameter across its range, derives the
//! player and monster state for every point, and asks an external combat
//! oracle for the selected metric per loadout. The results are folded into
//! chart-ready series with a shared domain. All entry points are pure: the
//! [`compare::Comparator`] never writes through the entities it was given.
pub mod compare;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use compare::{
    Annotations, ChartAnnotation, ChartEntry, CompareResult, Comparator, InputSet, Metric,
    MonsterMetric, NO_DATA, OutputReducer, PlayerMetric, SPECIAL_DEFENCE_REDUCTION_WEAPONS,
    SeriesValues, Sweep, XAxis, YAxis, has_defence_reducing_special,
};
pub use config::CompareConfig;
pub use env::{
    CalcEnv, CalcOpts, CombatOracle, HitDistribution, MonsterScaling, MonsterVsPlayerCalc,
    PlayerVsMonsterCalc,
};
pub use error::{CalcError, CompareError, ErrorSeverity};
pub use state::{
    Equipment, EquipmentPiece, Loadout, LoadoutPatch, Monster, MonsterInputs,
    MonsterInputsPatch, MonsterPatch, MonsterSkill, MonsterSkills, MonsterSkillsPatch,
    PlayerSkills, Skill, SkillsPatch,
};
