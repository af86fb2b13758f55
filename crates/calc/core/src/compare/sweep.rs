//! Sweep enumeration: one input set per point along the X axis.
//!
//! A [`Sweep`] is a pull-based, single-pass iterator. Every point is derived
//! from the *original* entities by merging a patch into a fresh copy; entities
//! a point does not alter are borrowed, never copied.

use std::borrow::Cow;
use std::iter::FusedIterator;

use crate::config::CompareConfig;
use crate::env::MonsterScaling;
use crate::state::{Loadout, LoadoutPatch, Monster, MonsterPatch, MonsterSkill, Skill, SkillsPatch};

use super::axis::XAxis;

/// Complete oracle input for one sweep point.
#[derive(Clone, Debug, PartialEq)]
pub struct InputSet<'a> {
    pub x_value: i32,
    pub loadouts: Vec<Cow<'a, Loadout>>,
    pub monster: Cow<'a, Monster>,
}

/// State each axis alters per point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SweepKind {
    /// Lower a monster skill to X.
    MonsterSkill(MonsterSkill),
    /// Set the monster's current HP to X and rescale HP-derived values.
    MonsterHp,
    /// Set a player skill to X and clear its boost, for every loadout.
    PlayerSkill(Skill),
    /// Decay every active boost X levels toward zero.
    StatDecay,
}

/// Inclusive integer range walked one step at a time.
#[derive(Clone, Copy, Debug)]
struct Cursor {
    next: i32,
    last: i32,
    step: i32,
    done: bool,
}

impl Cursor {
    fn descending(from: i32) -> Self {
        Self {
            next: from,
            last: 0,
            step: -1,
            done: from < 0,
        }
    }

    fn ascending(to: i32) -> Self {
        Self {
            next: 0,
            last: to,
            step: 1,
            done: to < 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            ((self.last - self.next) * self.step) as usize + 1
        }
    }

    fn advance(&mut self) -> Option<i32> {
        if self.done {
            return None;
        }
        let current = self.next;
        if current == self.last {
            self.done = true;
        } else {
            self.next += self.step;
        }
        Some(current)
    }
}

/// Lazy sequence of [`InputSet`]s ordered by the axis's natural direction.
///
/// | Axis | Range |
/// |---|---|
/// | monster defence / magic / HP | scaled baseline down to 0 |
/// | player attack / strength / defence / ranged / magic | 0 to 125 |
/// | stat decay | 0 to the largest boost magnitude |
pub struct Sweep<'a, S>
where
    S: MonsterScaling + ?Sized,
{
    kind: SweepKind,
    cursor: Cursor,
    loadouts: &'a [Loadout],
    monster: &'a Monster,
    scaling: &'a S,
}

impl<'a, S> Sweep<'a, S>
where
    S: MonsterScaling + ?Sized,
{
    /// Plans the sweep for `axis`.
    ///
    /// `scaled_base` is only read for range starts; every point is derived
    /// from `original`.
    pub fn new(
        axis: XAxis,
        loadouts: &'a [Loadout],
        original: &'a Monster,
        scaled_base: &Monster,
        scaling: &'a S,
    ) -> Self {
        let (kind, cursor) = match axis {
            XAxis::MonsterDefence | XAxis::MonsterDefenceInitial => (
                SweepKind::MonsterSkill(MonsterSkill::Defence),
                Cursor::descending(scaled_base.skills.def),
            ),
            XAxis::MonsterMagic => (
                SweepKind::MonsterSkill(MonsterSkill::Magic),
                Cursor::descending(scaled_base.skills.magic),
            ),
            XAxis::MonsterHp => (
                SweepKind::MonsterHp,
                Cursor::descending(scaled_base.skills.hp),
            ),
            XAxis::PlayerAttackLevel => player_level(Skill::Attack),
            XAxis::PlayerStrengthLevel => player_level(Skill::Strength),
            XAxis::PlayerDefenceLevel => player_level(Skill::Defence),
            XAxis::PlayerRangedLevel => player_level(Skill::Ranged),
            XAxis::PlayerMagicLevel => player_level(Skill::Magic),
            XAxis::StatDecayRestore => (
                SweepKind::StatDecay,
                Cursor::ascending(largest_boost(loadouts)),
            ),
        };

        Self {
            kind,
            cursor,
            loadouts,
            monster: original,
            scaling,
        }
    }

    fn point(&self, x: i32) -> InputSet<'a> {
        match self.kind {
            SweepKind::MonsterSkill(skill) => InputSet {
                x_value: x,
                loadouts: self.borrowed_loadouts(),
                monster: Cow::Owned(MonsterPatch::skill(skill, x).apply_to(self.monster)),
            },
            SweepKind::MonsterHp => {
                // HP-only scaling has to see the overridden HP.
                let hurt = MonsterPatch::current_hp(x).apply_to(self.monster);
                InputSet {
                    x_value: x,
                    loadouts: self.borrowed_loadouts(),
                    monster: Cow::Owned(self.scaling.scale_hp_only(&hurt)),
                }
            }
            SweepKind::PlayerSkill(skill) => {
                let patch = LoadoutPatch::skill_level(skill, x);
                InputSet {
                    x_value: x,
                    loadouts: self
                        .loadouts
                        .iter()
                        .map(|loadout| Cow::Owned(patch.apply_to(loadout)))
                        .collect(),
                    monster: Cow::Borrowed(self.monster),
                }
            }
            SweepKind::StatDecay => InputSet {
                x_value: x,
                loadouts: self
                    .loadouts
                    .iter()
                    .map(|loadout| decay_boosts(loadout, x))
                    .collect(),
                monster: Cow::Borrowed(self.monster),
            },
        }
    }

    fn borrowed_loadouts(&self) -> Vec<Cow<'a, Loadout>> {
        self.loadouts.iter().map(Cow::Borrowed).collect()
    }
}

impl<'a, S> Iterator for Sweep<'a, S>
where
    S: MonsterScaling + ?Sized,
{
    type Item = InputSet<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.cursor.advance()?;
        Some(self.point(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<S> ExactSizeIterator for Sweep<'_, S> where S: MonsterScaling + ?Sized {}

impl<S> FusedIterator for Sweep<'_, S> where S: MonsterScaling + ?Sized {}

fn player_level(skill: Skill) -> (SweepKind, Cursor) {
    (
        SweepKind::PlayerSkill(skill),
        Cursor::ascending(CompareConfig::PLAYER_LEVEL_MAX),
    )
}

fn largest_boost(loadouts: &[Loadout]) -> i32 {
    loadouts
        .iter()
        .map(|loadout| loadout.boosts.max_magnitude())
        .max()
        .unwrap_or(0)
}

/// Shrinks every non-zero boost `restore` levels toward zero, keeping its sign.
///
/// Loadouts without active boosts are passed through borrowed.
fn decay_boosts(loadout: &Loadout, restore: i32) -> Cow<'_, Loadout> {
    let decayed = loadout
        .boosts
        .iter()
        .filter(|(_, boost)| *boost != 0)
        .fold(SkillsPatch::new(), |patch, (skill, boost)| {
            let distance = boost.abs();
            let remaining = if restore >= distance {
                0
            } else {
                boost.signum() * (distance - restore)
            };
            patch.set(skill, remaining)
        });
    let patch = LoadoutPatch::boosts(decayed);

    if patch.is_empty() {
        Cow::Borrowed(loadout)
    } else {
        Cow::Owned(patch.apply_to(loadout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::test_support::{StubScaling, boosted_loadout, plain_loadout, vorkath};
    use crate::state::PlayerSkills;

    fn xs<S: MonsterScaling + ?Sized>(sweep: Sweep<'_, S>) -> Vec<i32> {
        sweep.map(|input| input.x_value).collect()
    }

    #[test]
    fn player_level_axes_cover_zero_to_125() {
        let loadouts = vec![plain_loadout("A"), boosted_loadout("B")];
        let monster = vorkath();
        let scaling = StubScaling::default();

        for axis in [
            XAxis::PlayerAttackLevel,
            XAxis::PlayerStrengthLevel,
            XAxis::PlayerDefenceLevel,
            XAxis::PlayerRangedLevel,
            XAxis::PlayerMagicLevel,
        ] {
            let sweep = Sweep::new(axis, &loadouts, &monster, &monster, &scaling);
            assert_eq!(sweep.len(), 126);
            assert_eq!(xs(sweep), (0..=125).collect::<Vec<_>>());
        }
    }

    #[test]
    fn player_level_points_set_skill_and_clear_boost() {
        let loadouts = vec![boosted_loadout("B")];
        let monster = vorkath();
        let scaling = StubScaling::default();

        let point = Sweep::new(
            XAxis::PlayerStrengthLevel,
            &loadouts,
            &monster,
            &monster,
            &scaling,
        )
        .nth(70)
        .expect("point 70 exists");

        assert_eq!(point.x_value, 70);
        assert_eq!(point.loadouts[0].skills.str, 70);
        assert_eq!(point.loadouts[0].boosts.str, 0);
        assert_eq!(point.loadouts[0].boosts.atk, loadouts[0].boosts.atk);
        assert!(matches!(point.monster, Cow::Borrowed(_)));
        // base untouched
        assert_eq!(loadouts[0].skills.str, 99);
    }

    #[test]
    fn monster_axes_descend_from_scaled_baseline() {
        let loadouts = vec![plain_loadout("A")];
        let monster = vorkath();
        let scaling = StubScaling::with_bonus(6);
        let scaled = scaling.scale_full(&monster);

        let defence: Vec<_> = Sweep::new(
            XAxis::MonsterDefence,
            &loadouts,
            &monster,
            &scaled,
            &scaling,
        )
        .collect();
        assert_eq!(defence.len() as i32, scaled.skills.def + 1);
        assert_eq!(defence[0].x_value, scaled.skills.def);
        assert_eq!(defence.last().map(|p| p.x_value), Some(0));
        // points start from the unscaled original
        assert_eq!(defence[5].monster.skills.def, scaled.skills.def - 5);
        assert_eq!(defence[5].monster.skills.magic, monster.skills.magic);
        assert!(
            defence
                .windows(2)
                .all(|pair| pair[0].x_value == pair[1].x_value + 1)
        );

        let magic = xs(Sweep::new(
            XAxis::MonsterMagic,
            &loadouts,
            &monster,
            &scaled,
            &scaling,
        ));
        assert_eq!(magic.first(), Some(&scaled.skills.magic));
        assert_eq!(magic.len() as i32, scaled.skills.magic + 1);
    }

    #[test]
    fn hp_axis_rescales_each_point() {
        let loadouts = vec![plain_loadout("A")];
        let monster = vorkath();
        let scaling = StubScaling::default();

        let points: Vec<_> =
            Sweep::new(XAxis::MonsterHp, &loadouts, &monster, &monster, &scaling).collect();

        assert_eq!(points.len() as i32, monster.skills.hp + 1);
        let point = &points[100];
        assert_eq!(point.x_value, monster.skills.hp - 100);
        assert_eq!(point.monster.inputs.monster_current_hp, point.x_value);
        assert_eq!(point.monster.skills.hp, point.x_value);
    }

    #[test]
    fn stat_decay_shrinks_boosts_toward_zero() {
        let boosted = Loadout::new("Potted", PlayerSkills::uniform(99)).with_boosts(
            PlayerSkills::default()
                .with(Skill::Strength, 19)
                .with(Skill::Defence, -8),
        );
        let loadouts = vec![boosted, plain_loadout("Unboosted")];
        let monster = vorkath();
        let scaling = StubScaling::default();

        let points: Vec<_> = Sweep::new(
            XAxis::StatDecayRestore,
            &loadouts,
            &monster,
            &monster,
            &scaling,
        )
        .collect();

        assert_eq!(points.len(), 20);
        assert_eq!(points[0].loadouts[0].boosts, loadouts[0].boosts);

        let five = &points[5].loadouts[0].boosts;
        assert_eq!(five.str, 14);
        assert_eq!(five.def, -3);

        let ten = &points[10].loadouts[0].boosts;
        assert_eq!(ten.str, 9);
        assert_eq!(ten.def, 0);

        let last = points.last().expect("non-empty");
        assert_eq!(last.x_value, 19);
        assert!(!last.loadouts[0].boosts.any_nonzero());

        // unboosted loadouts are never copied
        assert!(
            points
                .iter()
                .all(|p| matches!(p.loadouts[1], Cow::Borrowed(_)))
        );
    }

    #[test]
    fn stat_decay_without_boosts_is_a_single_point() {
        let loadouts = vec![plain_loadout("A")];
        let monster = vorkath();
        let scaling = StubScaling::default();

        let sweep = Sweep::new(
            XAxis::StatDecayRestore,
            &loadouts,
            &monster,
            &monster,
            &scaling,
        );
        assert_eq!(xs(sweep), vec![0]);
    }

    #[test]
    fn exhausted_sweep_stays_exhausted() {
        let loadouts = vec![plain_loadout("A")];
        let monster = vorkath();
        let scaling = StubScaling::default();

        let mut sweep = Sweep::new(
            XAxis::StatDecayRestore,
            &loadouts,
            &monster,
            &monster,
            &scaling,
        );
        assert!(sweep.next().is_some());
        assert!(sweep.next().is_none());
        assert!(sweep.next().is_none());
        assert_eq!(sweep.len(), 0);
    }
}
