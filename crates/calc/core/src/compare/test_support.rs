//! Deterministic stand-ins for the oracle and scaling adapter.

use crate::env::{
    CalcOpts, CombatOracle, HitDistribution, MonsterScaling, MonsterVsPlayerCalc,
    PlayerVsMonsterCalc,
};
use crate::state::{EquipmentPiece, Loadout, Monster, MonsterSkills, PlayerSkills, Skill};

/// Adds a flat bonus to defence and magic; HP-only scaling mirrors current HP.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubScaling {
    pub bonus: i32,
}

impl StubScaling {
    pub fn with_bonus(bonus: i32) -> Self {
        Self { bonus }
    }
}

impl MonsterScaling for StubScaling {
    fn scale_full(&self, monster: &Monster) -> Monster {
        let mut scaled = monster.clone();
        scaled.skills.def += self.bonus;
        scaled.skills.magic += self.bonus;
        scaled
    }

    fn scale_hp_only(&self, monster: &Monster) -> Monster {
        let mut scaled = monster.clone();
        scaled.skills.hp = monster.inputs.monster_current_hp;
        scaled
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StubOracle;

#[derive(Clone, Copy, Debug)]
pub struct StubDistribution(f64);

impl HitDistribution for StubDistribution {
    fn expected_damage(&self) -> f64 {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct StubPlayerCalc {
    max_hit: f64,
    expected_hit: f64,
    dps: f64,
    ttk: Option<f64>,
    def_reduction: f64,
}

impl PlayerVsMonsterCalc for StubPlayerCalc {
    type Distribution = StubDistribution;

    fn dps(&self) -> f64 {
        self.dps
    }

    fn expected_hit_distribution(&self) -> StubDistribution {
        StubDistribution(self.expected_hit)
    }

    fn time_to_kill(&self) -> Option<f64> {
        self.ttk
    }

    fn max_hit(&self) -> f64 {
        self.max_hit
    }

    fn expected_defence_reduction_from_special(&self) -> f64 {
        self.def_reduction
    }
}

#[derive(Clone, Debug)]
pub struct StubMonsterCalc {
    dps: f64,
    damage_taken: Option<f64>,
}

impl MonsterVsPlayerCalc for StubMonsterCalc {
    fn dps(&self) -> f64 {
        self.dps
    }

    fn average_damage_taken(&self) -> Option<f64> {
        self.damage_taken
    }
}

impl CombatOracle for StubOracle {
    type PlayerCalc = StubPlayerCalc;
    type MonsterCalc = StubMonsterCalc;

    fn player_vs_monster(
        &self,
        loadout: &Loadout,
        monster: &Monster,
        opts: &CalcOpts,
    ) -> StubPlayerCalc {
        let attack = loadout.skills.atk + loadout.boosts.atk;
        let strength = loadout.skills.str + loadout.boosts.str;
        let defence = monster.skills.def.max(0);

        let max_hit = f64::from(strength.max(0) / 2);
        let accuracy = f64::from(attack.max(0) + 1) / f64::from(attack.max(0) + defence + 2);
        let expected_hit = max_hit / 2.0 * accuracy;
        let dps = expected_hit / 2.4;
        let ttk = (dps > 0.0).then(|| f64::from(monster.inputs.monster_current_hp) / dps);
        let def_reduction = if opts.using_special_attack {
            f64::from(defence * 3 / 10)
        } else {
            0.0
        };

        StubPlayerCalc {
            max_hit,
            expected_hit,
            dps,
            ttk,
            def_reduction,
        }
    }

    fn monster_vs_player(
        &self,
        loadout: &Loadout,
        monster: &Monster,
        _opts: &CalcOpts,
    ) -> StubMonsterCalc {
        let defence = (loadout.skills.def + loadout.boosts.def).max(0);
        let dps = f64::from(monster.skills.atk.max(0)) / f64::from(defence + 10);
        let damage_taken = (monster.inputs.monster_current_hp > 0)
            .then(|| dps * f64::from(monster.inputs.monster_current_hp) / 10.0);

        StubMonsterCalc { dps, damage_taken }
    }
}

pub fn vorkath() -> Monster {
    Monster::new(
        8061,
        "Vorkath",
        MonsterSkills {
            atk: 560,
            str: 308,
            def: 214,
            magic: 150,
            ranged: 308,
            hp: 750,
        },
    )
}

pub fn plain_loadout(name: &str) -> Loadout {
    Loadout::new(name, PlayerSkills::uniform(99))
        .with_weapon(EquipmentPiece::new(4151, "Abyssal whip"))
}

pub fn boosted_loadout(name: &str) -> Loadout {
    Loadout::new(name, PlayerSkills::uniform(99))
        .with_boosts(
            PlayerSkills::default()
                .with(Skill::Attack, 19)
                .with(Skill::Strength, 19),
        )
        .with_weapon(EquipmentPiece::new(13576, "Dragon warhammer"))
}
