//! Monster definitions and encounter inputs.

use strum::{EnumCount, EnumIter, IntoStaticStr};

/// Monster skills addressable by sweeps and patches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum MonsterSkill {
    #[strum(serialize = "atk")]
    Attack,
    #[strum(serialize = "str")]
    Strength,
    #[strum(serialize = "def")]
    Defence,
    Magic,
    Ranged,
    #[strum(serialize = "hp")]
    Hitpoints,
}

/// Base skill levels of a monster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonsterSkills {
    pub atk: i32,
    pub str: i32,
    pub def: i32,
    pub magic: i32,
    pub ranged: i32,
    pub hp: i32,
}

impl MonsterSkills {
    pub fn get(&self, skill: MonsterSkill) -> i32 {
        match skill {
            MonsterSkill::Attack => self.atk,
            MonsterSkill::Strength => self.str,
            MonsterSkill::Defence => self.def,
            MonsterSkill::Magic => self.magic,
            MonsterSkill::Ranged => self.ranged,
            MonsterSkill::Hitpoints => self.hp,
        }
    }

    pub fn get_mut(&mut self, skill: MonsterSkill) -> &mut i32 {
        match skill {
            MonsterSkill::Attack => &mut self.atk,
            MonsterSkill::Strength => &mut self.str,
            MonsterSkill::Defence => &mut self.def,
            MonsterSkill::Magic => &mut self.magic,
            MonsterSkill::Ranged => &mut self.ranged,
            MonsterSkill::Hitpoints => &mut self.hp,
        }
    }
}

/// Encounter parameters that feed monster scaling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MonsterInputs {
    /// Hitpoints the monster currently has.
    pub monster_current_hp: i32,
}

/// A monster as configured by the user, or after scaling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Monster {
    pub id: u32,
    pub name: String,
    pub skills: MonsterSkills,
    pub inputs: MonsterInputs,
}

impl Monster {
    pub fn new(id: u32, name: impl Into<String>, skills: MonsterSkills) -> Self {
        let monster_current_hp = skills.hp;
        Self {
            id,
            name: name.into(),
            skills,
            inputs: MonsterInputs { monster_current_hp },
        }
    }
}
