use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use calc_core::{
    CalcEnv, CalcOpts, CombatOracle, Comparator, CompareError, EquipmentPiece, HitDistribution,
    Loadout, Monster, MonsterScaling, MonsterSkills, MonsterVsPlayerCalc, PlayerSkills,
    PlayerVsMonsterCalc, XAxis, YAxis,
};
use compare_runtime::{CompareRequest, Runtime, RuntimeConfig, RuntimeError, init_tracing};

// ============================================================================
// Test collaborators
// ============================================================================

/// Lowers defence by a flat amount; counts every oracle construction.
#[derive(Clone, Default)]
struct CountingOracle {
    calls: Arc<AtomicUsize>,
}

struct Flat {
    strength: f64,
    defence: f64,
    special: bool,
}

impl HitDistribution for Flat {
    fn expected_damage(&self) -> f64 {
        self.strength / 3.0
    }
}

impl PlayerVsMonsterCalc for Flat {
    type Distribution = Flat;

    fn dps(&self) -> f64 {
        self.strength / (self.defence + 10.0)
    }

    fn expected_hit_distribution(&self) -> Flat {
        Flat { ..*self }
    }

    fn time_to_kill(&self) -> Option<f64> {
        None
    }

    fn max_hit(&self) -> f64 {
        self.strength
    }

    fn expected_defence_reduction_from_special(&self) -> f64 {
        if self.special { (self.defence * 0.3).floor() } else { 0.0 }
    }
}

impl MonsterVsPlayerCalc for Flat {
    fn dps(&self) -> f64 {
        1.0
    }

    fn average_damage_taken(&self) -> Option<f64> {
        Some(self.defence)
    }
}

impl CombatOracle for CountingOracle {
    type PlayerCalc = Flat;
    type MonsterCalc = Flat;

    fn player_vs_monster(&self, loadout: &Loadout, monster: &Monster, opts: &CalcOpts) -> Flat {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Flat {
            strength: f64::from(loadout.skills.str + loadout.boosts.str),
            defence: f64::from(monster.skills.def),
            special: opts.using_special_attack,
        }
    }

    fn monster_vs_player(&self, loadout: &Loadout, monster: &Monster, opts: &CalcOpts) -> Flat {
        self.player_vs_monster(loadout, monster, opts)
    }
}

#[derive(Clone, Copy, Default)]
struct NoScaling;

impl MonsterScaling for NoScaling {
    fn scale_full(&self, monster: &Monster) -> Monster {
        monster.clone()
    }

    fn scale_hp_only(&self, monster: &Monster) -> Monster {
        monster.clone()
    }
}

fn request(x_axis: XAxis, y_axis: YAxis) -> CompareRequest {
    let loadout = Loadout::new("A", PlayerSkills::uniform(99))
        .with_weapon(EquipmentPiece::new(13576, "Dragon warhammer"));
    let monster = Monster::new(
        8061,
        "Vorkath",
        MonsterSkills {
            atk: 560,
            str: 308,
            def: 100,
            magic: 150,
            ranged: 308,
            hp: 750,
        },
    );
    CompareRequest::new(vec![loadout], monster, x_axis, y_axis)
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn background_result_matches_direct_comparison() {
    init_tracing();

    let config = RuntimeConfig::from_env();
    assert!(config.command_buffer_size >= 1);

    let oracle = CountingOracle::default();
    let runtime = Runtime::start(config, oracle.clone(), NoScaling);
    let handle = runtime.handle();

    let req = request(XAxis::MonsterDefence, YAxis::MonsterDefenceAfterSpec);
    let expected = Comparator::new(
        CalcEnv::new(&oracle, &NoScaling),
        req.loadouts.clone(),
        req.monster.clone(),
        req.x_axis,
        req.y_axis,
    )
    .compare();

    let result = handle.compare(req).await.expect("comparison succeeds");
    assert_eq!(result, expected);
    assert_eq!(result.entries.len(), 101);
    assert_eq!(result.entries[0].get("A"), Some("30.000"));
    assert_eq!(result.annotations.x[0].label, "Base Def (100)");

    drop(handle);
    runtime.shutdown().await.expect("worker joins");
}

#[tokio::test]
async fn newer_request_supersedes_older_one() {
    init_tracing();

    let oracle = CountingOracle::default();
    let calls = Arc::clone(&oracle.calls);
    let runtime = Runtime::start(RuntimeConfig::default(), oracle, NoScaling);
    let handle = runtime.handle();

    let stale = handle.compare(request(XAxis::PlayerStrengthLevel, YAxis::PlayerMaxHit));
    let fresh = handle.compare(request(XAxis::PlayerAttackLevel, YAxis::PlayerDps));
    assert_eq!(handle.latest_generation(), 2);

    let err = stale.await.expect_err("older request is discarded");
    assert!(err.is_superseded());
    assert!(matches!(err, RuntimeError::Superseded { generation: 1 }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let result = fresh.await.expect("latest request runs");
    assert_eq!(result.entries.len(), 126);
    assert_eq!(calls.load(Ordering::SeqCst), 126);

    drop(handle);
    runtime.shutdown().await.expect("worker joins");
}

#[tokio::test]
async fn json_requests_resolve_axis_codes() {
    init_tracing();

    let runtime = Runtime::start(RuntimeConfig::default(), CountingOracle::default(), NoScaling);
    let handle = runtime.handle();

    let result = handle
        .compare_json(
            r#"{
                "loadouts": [{ "name": "", "skills": { "str": 40 } }],
                "monster": { "name": "Goblin", "skills": { "def": 3, "hp": 5 } },
                "axes": { "x": 9, "y": 3 }
            }"#,
        )
        .await
        .expect("comparison succeeds");

    let names: Vec<i32> = result.entries.iter().map(|e| e.name).collect();
    assert_eq!(names, [3, 2, 1, 0]);
    assert_eq!(result.entries[0].get("Set 1"), Some("3.000"));
    assert!(result.annotations.x.is_empty());
    assert_eq!(result.domain_max, 4.0);

    drop(handle);
    runtime.shutdown().await.expect("worker joins");
}

#[tokio::test]
async fn unknown_axis_codes_fail_loudly() {
    init_tracing();

    let runtime = Runtime::start(RuntimeConfig::default(), CountingOracle::default(), NoScaling);
    let handle = runtime.handle();

    let err = handle
        .compare_json(r#"{ "loadouts": [], "monster": {}, "axes": { "x": 42, "y": 0 } }"#)
        .await
        .expect_err("axis 42 does not exist");
    assert!(matches!(
        err,
        RuntimeError::Compare(CompareError::UnknownXAxis(42))
    ));
    assert_eq!(err.compare_code(), Some("COMPARE_UNKNOWN_X_AXIS"));

    let err = handle
        .compare_json("not json")
        .await
        .expect_err("payload is malformed");
    assert!(matches!(err, RuntimeError::InvalidRequest(_)));
    assert_eq!(handle.latest_generation(), 0);

    drop(handle);
    runtime.shutdown().await.expect("worker joins");
}
