//! Partial overrides merged onto copies of base entities.
//!
//! A patch only names the fields it changes. Applying one clones the base
//! entity and writes the named fields into the clone; the base is untouched.

use strum::{EnumCount, IntoEnumIterator};

use super::loadout::{Loadout, PlayerSkills, Skill};
use super::monster::{Monster, MonsterSkill, MonsterSkills};

/// Optional per-skill overrides for [`PlayerSkills`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillsPatch {
    values: [Option<i32>; Skill::COUNT],
}

impl SkillsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides one skill (builder pattern).
    #[must_use]
    pub fn set(mut self, skill: Skill, value: i32) -> Self {
        self.values[skill as usize] = Some(value);
        self
    }

    pub fn get(&self, skill: Skill) -> Option<i32> {
        self.values[skill as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    pub fn apply(&self, skills: &mut PlayerSkills) {
        for skill in Skill::iter() {
            if let Some(value) = self.get(skill) {
                *skills.get_mut(skill) = value;
            }
        }
    }
}

/// Overrides for a [`Loadout`]'s skills and boosts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadoutPatch {
    pub skills: SkillsPatch,
    pub boosts: SkillsPatch,
}

impl LoadoutPatch {
    /// Sets `skill` to `level` and clears its boost.
    pub fn skill_level(skill: Skill, level: i32) -> Self {
        Self {
            skills: SkillsPatch::new().set(skill, level),
            boosts: SkillsPatch::new().set(skill, 0),
        }
    }

    pub fn boosts(boosts: SkillsPatch) -> Self {
        Self {
            skills: SkillsPatch::new(),
            boosts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.boosts.is_empty()
    }

    /// Returns a copy of `base` with this patch merged in.
    pub fn apply_to(&self, base: &Loadout) -> Loadout {
        let mut loadout = base.clone();
        self.skills.apply(&mut loadout.skills);
        self.boosts.apply(&mut loadout.boosts);
        loadout
    }
}

/// Optional per-skill overrides for [`MonsterSkills`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonsterSkillsPatch {
    values: [Option<i32>; MonsterSkill::COUNT],
}

impl MonsterSkillsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, skill: MonsterSkill, value: i32) -> Self {
        self.values[skill as usize] = Some(value);
        self
    }

    pub fn get(&self, skill: MonsterSkill) -> Option<i32> {
        self.values[skill as usize]
    }

    pub fn apply(&self, skills: &mut MonsterSkills) {
        for skill in MonsterSkill::iter() {
            if let Some(value) = self.get(skill) {
                *skills.get_mut(skill) = value;
            }
        }
    }
}

/// Overrides for a [`Monster`]'s encounter inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonsterInputsPatch {
    pub monster_current_hp: Option<i32>,
}

/// Overrides for a [`Monster`]'s skills and inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonsterPatch {
    pub skills: MonsterSkillsPatch,
    pub inputs: MonsterInputsPatch,
}

impl MonsterPatch {
    pub fn skill(skill: MonsterSkill, value: i32) -> Self {
        Self {
            skills: MonsterSkillsPatch::new().set(skill, value),
            inputs: MonsterInputsPatch::default(),
        }
    }

    pub fn current_hp(hp: i32) -> Self {
        Self {
            skills: MonsterSkillsPatch::new(),
            inputs: MonsterInputsPatch {
                monster_current_hp: Some(hp),
            },
        }
    }

    /// Returns a copy of `base` with this patch merged in.
    pub fn apply_to(&self, base: &Monster) -> Monster {
        let mut monster = base.clone();
        self.skills.apply(&mut monster.skills);
        if let Some(hp) = self.inputs.monster_current_hp {
            monster.inputs.monster_current_hp = hp;
        }
        monster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EquipmentPiece;

    fn base_loadout() -> Loadout {
        Loadout::new("Melee", PlayerSkills::uniform(99))
            .with_boosts(PlayerSkills::default().with(Skill::Strength, 19))
            .with_weapon(EquipmentPiece::new(13576, "Dragon warhammer"))
    }

    #[test]
    fn skill_level_patch_sets_level_and_clears_boost() {
        let base = base_loadout();
        let patched = LoadoutPatch::skill_level(Skill::Strength, 50).apply_to(&base);

        assert_eq!(patched.skills.str, 50);
        assert_eq!(patched.boosts.str, 0);
        assert_eq!(patched.skills.atk, 99);
        assert_eq!(patched.equipment, base.equipment);
        // base untouched
        assert_eq!(base.skills.str, 99);
        assert_eq!(base.boosts.str, 19);
    }

    #[test]
    fn empty_patch_is_a_plain_copy() {
        let base = base_loadout();
        assert!(LoadoutPatch::default().is_empty());
        assert_eq!(LoadoutPatch::default().apply_to(&base), base);
    }

    #[test]
    fn monster_patch_touches_only_named_fields() {
        let base = Monster::new(
            1,
            "Vorkath",
            MonsterSkills {
                atk: 560,
                str: 308,
                def: 214,
                magic: 150,
                ranged: 308,
                hp: 750,
            },
        );

        let lowered = MonsterPatch::skill(MonsterSkill::Defence, 100).apply_to(&base);
        assert_eq!(lowered.skills.def, 100);
        assert_eq!(lowered.skills.magic, 150);
        assert_eq!(lowered.inputs, base.inputs);

        let hurt = MonsterPatch::current_hp(10).apply_to(&base);
        assert_eq!(hurt.inputs.monster_current_hp, 10);
        assert_eq!(hurt.skills, base.skills);
        assert_eq!(base.inputs.monster_current_hp, 750);
    }
}
