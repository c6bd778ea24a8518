use std::fs;
use std::path::Path;

use game_content::ContentFactory;
use game_core::{ClassKind, CombatConfig, SkillId};
use tempfile::TempDir;

const SKILLS: &str = r#"(
    skills: [
        (id: "jab", name: "Jab", mp_cost: 2, kind: Damage, power_percent: 110),
    ],
)"#;

const ITEMS: &str = r#"(
    items: [
        (id: "bandage", name: "Bandage", effect: RestoreHp(15)),
    ],
)"#;

const CLASSES: &str = r#"(
    classes: [
        (
            class: Warrior,
            base: (max_hp: 50, max_mp: 10, attack: 9, speed: 5),
            growth: (max_hp: 5, max_mp: 1, attack: 1, speed: 0),
            skills: ["jab"],
            starting_items: [(item: "bandage", quantity: 3)],
        ),
    ],
)"#;

const ENEMIES: &str = r#"(
    enemies: [
        (
            id: "rat",
            name: "Rat",
            base: (max_hp: 10, max_mp: 0, attack: 3, speed: 9),
            exp_reward: 5,
            gold_reward: 1,
        ),
    ],
)"#;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn content_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "skills.ron", SKILLS);
    write(dir.path(), "items.ron", ITEMS);
    write(dir.path(), "classes.ron", CLASSES);
    write(dir.path(), "enemies.ron", ENEMIES);
    dir
}

#[test]
fn loads_catalog_from_directory() {
    let dir = content_dir();
    let factory = ContentFactory::new(dir.path());

    let catalog = factory.load_catalog().unwrap();
    assert!(catalog.skill(&SkillId::new("jab")).is_some());

    let player = catalog.create_player("Tester", ClassKind::Warrior).unwrap();
    assert_eq!(player.inventory().slots().len(), 1);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = content_dir();
    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.load_config().unwrap(), CombatConfig::default());

    write(dir.path(), "config.toml", "[progression]\nmax_level = 10\n");
    assert_eq!(factory.load_config().unwrap().progression.max_level, 10);
}

#[test]
fn dangling_skill_reference_names_the_skill() {
    let dir = content_dir();
    write(
        dir.path(),
        "classes.ron",
        &CLASSES.replace(r#"["jab"]"#, r#"["jab", "uppercut"]"#),
    );

    let error = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
    let message = error.to_string();
    assert!(message.contains("Invalid content"), "{message}");
    assert!(message.contains("undefined skill 'uppercut'"), "{message}");
}

#[test]
fn missing_file_reports_path() {
    let dir = content_dir();
    fs::remove_file(dir.path().join("enemies.ron")).unwrap();

    let error = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
    let message = error.to_string();
    assert!(message.contains("Failed to read file"), "{message}");
    assert!(message.contains("enemies.ron"), "{message}");
}

#[test]
fn malformed_ron_reports_file() {
    let dir = content_dir();
    write(dir.path(), "items.ron", r#"(items: [(id: ")]"#);

    let error = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
    let message = error.to_string();
    assert!(message.contains("Failed to parse item catalog RON"), "{message}");
    assert!(message.contains("items.ron"), "{message}");
}
