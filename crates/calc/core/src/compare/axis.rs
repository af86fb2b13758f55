//! Selectable independent (X) and dependent (Y) variables.
//!
//! Discriminants are the wire codes used by request payloads. Converting an
//! unknown code is a configuration error and fails loudly.

use strum::{EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

use crate::error::CompareError;

/// Independent variable swept along the chart's X axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, FromRepr, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum XAxis {
    /// Monster defence, annotated with special-attack reductions.
    MonsterDefence = 0,
    MonsterMagic = 1,
    MonsterHp = 2,
    PlayerAttackLevel = 3,
    PlayerStrengthLevel = 4,
    PlayerRangedLevel = 5,
    PlayerMagicLevel = 6,
    /// Minutes elapsed since boosting; every boost decays one level per minute.
    StatDecayRestore = 7,
    PlayerDefenceLevel = 8,
    /// Monster defence as a plain level axis, without annotations.
    MonsterDefenceInitial = 9,
}

impl XAxis {
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Title shown in axis pickers.
    pub const fn label(self) -> &'static str {
        match self {
            XAxis::MonsterDefence | XAxis::MonsterDefenceInitial => "Monster defence level",
            XAxis::MonsterMagic => "Monster magic level",
            XAxis::MonsterHp => "Monster HP",
            XAxis::PlayerAttackLevel => "Player attack level",
            XAxis::PlayerStrengthLevel => "Player strength level",
            XAxis::PlayerRangedLevel => "Player ranged level",
            XAxis::PlayerMagicLevel => "Player magic level",
            XAxis::StatDecayRestore => "Player stat decay",
            XAxis::PlayerDefenceLevel => "Player defence level",
        }
    }

    /// Short caption printed along the axis.
    pub const fn axis_label(self) -> &'static str {
        match self {
            XAxis::MonsterHp => "Hitpoints",
            XAxis::StatDecayRestore => "Minutes after boost",
            _ => "Level",
        }
    }

    /// Whether the chart should draw this axis right-to-left.
    pub const fn is_reversed(self) -> bool {
        matches!(self, XAxis::MonsterDefenceInitial)
    }

    /// Axes offered by pickers, in display order.
    ///
    /// The annotated defence axis is reachable by code only.
    pub const PICKER_ORDER: [XAxis; 9] = [
        XAxis::MonsterDefenceInitial,
        XAxis::MonsterMagic,
        XAxis::MonsterHp,
        XAxis::PlayerAttackLevel,
        XAxis::PlayerStrengthLevel,
        XAxis::PlayerDefenceLevel,
        XAxis::PlayerRangedLevel,
        XAxis::PlayerMagicLevel,
        XAxis::StatDecayRestore,
    ];
}

impl TryFrom<u8> for XAxis {
    type Error = CompareError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        XAxis::from_repr(code).ok_or(CompareError::UnknownXAxis(code))
    }
}

/// Dependent metric plotted on the chart's Y axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, FromRepr, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum YAxis {
    PlayerDps = 0,
    PlayerExpectedHit = 1,
    MonsterDps = 2,
    DamageTaken = 3,
    PlayerTtk = 4,
    PlayerMaxHit = 5,
    /// Expected defence removed by a defence-reducing special attack.
    MonsterDefenceAfterSpec = 6,
}

impl YAxis {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            YAxis::PlayerDps => "Player damage-per-second",
            YAxis::PlayerExpectedHit => "Player expected hit",
            YAxis::MonsterDps => "Player damage taken per sec",
            YAxis::DamageTaken => "Player damage taken per kill",
            YAxis::PlayerTtk => "Time-to-kill",
            YAxis::PlayerMaxHit => "Player max hit",
            YAxis::MonsterDefenceAfterSpec => "Expected Defence Reduction",
        }
    }

    pub const fn axis_label(self) -> &'static str {
        match self {
            YAxis::PlayerDps | YAxis::MonsterDps => "DPS",
            YAxis::PlayerExpectedHit => "Hit",
            YAxis::DamageTaken => "Damage",
            YAxis::PlayerTtk => "Seconds",
            YAxis::PlayerMaxHit => "Max hit",
            YAxis::MonsterDefenceAfterSpec => "Def Reduction",
        }
    }

    /// Metrics computed from the monster's attacks on the player.
    ///
    /// These are only meaningful against standard monsters.
    pub const fn is_monster_facing(self) -> bool {
        matches!(self, YAxis::MonsterDps | YAxis::DamageTaken)
    }

    /// Selectable metrics for a monster; monster-facing ones need a standard monster.
    pub fn available(standard_monster: bool) -> impl Iterator<Item = YAxis> {
        YAxis::iter().filter(move |axis| standard_monster || !axis.is_monster_facing())
    }
}

impl TryFrom<u8> for YAxis {
    type Error = CompareError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        YAxis::from_repr(code).ok_or(CompareError::UnknownYAxis(code))
    }
}
