use game_content::{builtin, builtin_config};
use game_core::{
    BaseStats, ClassKind, CombatAction, CombatConfig, CombatSession, Combatant, EnemyId,
    EventKind, ItemId, LogEntry, Side, SkillId, SkillKind,
};
use strum::IntoEnumIterator;

#[test]
fn builtin_is_parsed_once() {
    let first = builtin().unwrap();
    let second = builtin().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn every_class_is_defined_with_its_base_stats() {
    let catalog = builtin().unwrap();
    for class in ClassKind::iter() {
        assert!(catalog.class(class).is_some(), "{class} missing");
    }

    let stats = |class| catalog.class(class).unwrap().base;
    assert_eq!(stats(ClassKind::Warrior), BaseStats::new(120, 30, 18, 8));
    assert_eq!(stats(ClassKind::Wizard), BaseStats::new(80, 60, 12, 10));
    assert_eq!(stats(ClassKind::Ranger), BaseStats::new(100, 40, 15, 12));
    assert_eq!(stats(ClassKind::Thief), BaseStats::new(90, 35, 14, 15));
}

#[test]
fn skills_carry_percent_power() {
    let catalog = builtin().unwrap();
    let strike = catalog.skill(&SkillId::new("power_strike")).unwrap();
    assert_eq!(strike.kind, SkillKind::Damage);
    assert_eq!(strike.power_percent, 150);
    assert_eq!(strike.mp_cost, 10);

    let stun = catalog.skill(&SkillId::new("stunning_strike")).unwrap();
    assert_eq!(stun.kind, SkillKind::Stun);
    assert_eq!(stun.duration, 1);
}

#[test]
fn new_characters_start_with_potions() {
    let catalog = builtin().unwrap();
    for class in ClassKind::iter() {
        let player = catalog.create_player("Hero", class).unwrap();
        assert_eq!(player.inventory().quantity(&ItemId::new("health_potion")), 2);
        assert_eq!(player.inventory().quantity(&ItemId::new("mana_potion")), 1);
        assert_eq!(player.stats().level(), 1);
    }
}

#[test]
fn enemies_spawn_with_rewards() {
    let catalog = builtin().unwrap();
    let orc = catalog.spawn_enemy(&EnemyId::new("orc_warrior")).unwrap();
    assert_eq!(orc.stats().hp(), 80);
    assert_eq!(orc.stats().level(), 3);
    assert_eq!(orc.reward().exp, 75);
    assert_eq!(orc.reward().gold, 35);
    assert_eq!(catalog.enemies().count(), 4);
}

#[test]
fn builtin_config_matches_defaults() {
    assert_eq!(builtin_config().unwrap(), CombatConfig::default());
}

#[test]
fn builtin_content_runs_a_session() {
    let catalog = builtin().unwrap();
    let config = builtin_config().unwrap();
    let mut hero = catalog.create_player("Hero", ClassKind::Warrior).unwrap();
    let mut orc = catalog.spawn_enemy(&EnemyId::new("orc_warrior")).unwrap();

    let mut session = CombatSession::start(catalog, &config, &mut hero, &mut orc, 2024).unwrap();
    let result = session.submit_action(CombatAction::skill("power_strike")).unwrap();
    assert_eq!(
        result.entries[0],
        LogEntry::new(Side::Player, EventKind::SkillDamage(SkillId::new("power_strike")), 27)
    );
}
