//! Player loadouts: skill levels, temporary boosts, and equipped items.

use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Player skills that loadouts track levels and boosts for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Skill {
    #[cfg_attr(feature = "serde", serde(rename = "atk"))]
    #[strum(serialize = "atk")]
    Attack,
    #[cfg_attr(feature = "serde", serde(rename = "str"))]
    #[strum(serialize = "str")]
    Strength,
    #[cfg_attr(feature = "serde", serde(rename = "def"))]
    #[strum(serialize = "def")]
    Defence,
    Ranged,
    Magic,
    #[cfg_attr(feature = "serde", serde(rename = "hp"))]
    #[strum(serialize = "hp")]
    Hitpoints,
    Prayer,
    Mining,
    Herblore,
}

impl Skill {
    /// Short key used in payloads and diagnostics (`"atk"`, `"str"`, ...).
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// One value per [`Skill`].
///
/// The same shape holds both base levels and boosts; a boost may be negative
/// (drained stats).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerSkills {
    pub atk: i32,
    pub str: i32,
    pub def: i32,
    pub ranged: i32,
    pub magic: i32,
    pub hp: i32,
    pub prayer: i32,
    pub mining: i32,
    pub herblore: i32,
}

impl PlayerSkills {
    /// Every skill at the same value.
    pub fn uniform(value: i32) -> Self {
        Self {
            atk: value,
            str: value,
            def: value,
            ranged: value,
            magic: value,
            hp: value,
            prayer: value,
            mining: value,
            herblore: value,
        }
    }

    pub fn get(&self, skill: Skill) -> i32 {
        match skill {
            Skill::Attack => self.atk,
            Skill::Strength => self.str,
            Skill::Defence => self.def,
            Skill::Ranged => self.ranged,
            Skill::Magic => self.magic,
            Skill::Hitpoints => self.hp,
            Skill::Prayer => self.prayer,
            Skill::Mining => self.mining,
            Skill::Herblore => self.herblore,
        }
    }

    pub fn get_mut(&mut self, skill: Skill) -> &mut i32 {
        match skill {
            Skill::Attack => &mut self.atk,
            Skill::Strength => &mut self.str,
            Skill::Defence => &mut self.def,
            Skill::Ranged => &mut self.ranged,
            Skill::Magic => &mut self.magic,
            Skill::Hitpoints => &mut self.hp,
            Skill::Prayer => &mut self.prayer,
            Skill::Mining => &mut self.mining,
            Skill::Herblore => &mut self.herblore,
        }
    }

    /// Sets one skill (builder pattern).
    #[must_use]
    pub fn with(mut self, skill: Skill, value: i32) -> Self {
        *self.get_mut(skill) = value;
        self
    }

    /// Iterates `(skill, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, i32)> + '_ {
        Skill::iter().map(move |skill| (skill, self.get(skill)))
    }

    /// Largest absolute value across all skills, or 0.
    pub fn max_magnitude(&self) -> i32 {
        self.iter().map(|(_, v)| v.abs()).max().unwrap_or(0)
    }

    /// Returns true if any skill is non-zero.
    pub fn any_nonzero(&self) -> bool {
        self.iter().any(|(_, v)| v != 0)
    }
}

/// A single equipped item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentPiece {
    pub id: u32,
    pub name: String,
}

impl EquipmentPiece {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Items equipped per slot. Empty slots are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Equipment {
    pub head: Option<EquipmentPiece>,
    pub cape: Option<EquipmentPiece>,
    pub neck: Option<EquipmentPiece>,
    pub ammo: Option<EquipmentPiece>,
    pub weapon: Option<EquipmentPiece>,
    pub body: Option<EquipmentPiece>,
    pub shield: Option<EquipmentPiece>,
    pub legs: Option<EquipmentPiece>,
    pub hands: Option<EquipmentPiece>,
    pub feet: Option<EquipmentPiece>,
    pub ring: Option<EquipmentPiece>,
}

impl Equipment {
    /// Name of the equipped weapon, if any.
    pub fn weapon_name(&self) -> Option<&str> {
        self.weapon.as_ref().map(|w| w.name.as_str())
    }
}

/// A named player configuration.
///
/// Loadouts handed to the comparator are never written through; every
/// per-point alteration is a fresh copy built by
/// [`LoadoutPatch::apply_to`](super::LoadoutPatch::apply_to).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Loadout {
    /// Display name; may be empty.
    pub name: String,
    pub skills: PlayerSkills,
    pub boosts: PlayerSkills,
    pub equipment: Equipment,
}

impl Loadout {
    pub fn new(name: impl Into<String>, skills: PlayerSkills) -> Self {
        Self {
            name: name.into(),
            skills,
            boosts: PlayerSkills::default(),
            equipment: Equipment::default(),
        }
    }

    #[must_use]
    pub fn with_boosts(mut self, boosts: PlayerSkills) -> Self {
        self.boosts = boosts;
        self
    }

    #[must_use]
    pub fn with_weapon(mut self, weapon: EquipmentPiece) -> Self {
        self.equipment.weapon = Some(weapon);
        self
    }

    /// Series key for this loadout: its name, or `"Set {index + 1}"` when unnamed.
    pub fn display_key(&self, index: usize) -> String {
        if self.name.is_empty() {
            format!("Set {}", index + 1)
        } else {
            self.name.clone()
        }
    }
}
