//! Monster scaling adapter.

use crate::state::Monster;

/// Derives encounter-scaled monster stats from a raw definition.
///
/// Both operations are pure and total over a well-formed monster.
pub trait MonsterScaling: Send + Sync {
    /// Full stat scaling for the current encounter configuration.
    fn scale_full(&self, monster: &Monster) -> Monster;

    /// Rescales only hitpoint-derived values, keeping every other chosen stat.
    fn scale_hp_only(&self, monster: &Monster) -> Monster;
}
