//! Entities the comparator reads: player loadouts and monsters, plus the
//! partial overrides used to derive per-point copies of them.
mod loadout;
mod monster;
mod patch;

pub use loadout::{Equipment, EquipmentPiece, Loadout, PlayerSkills, Skill};
pub use monster::{Monster, MonsterInputs, MonsterSkill, MonsterSkills};
pub use patch::{LoadoutPatch, MonsterInputsPatch, MonsterPatch, MonsterSkillsPatch, SkillsPatch};
