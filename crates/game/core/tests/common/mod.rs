#![allow(dead_code)]

use game_core::{
    BaseStats, Catalog, ClassDefinition, ClassKind, DotKind, EnemyPolicy, EnemyTemplate,
    ItemDefinition, ItemEffect, SkillDefinition, SkillKind, StatGrowth, StatKind,
};

/// Mutable definition lists, so tests can tweak content before building.
pub struct Definitions {
    pub skills: Vec<SkillDefinition>,
    pub items: Vec<ItemDefinition>,
    pub classes: Vec<ClassDefinition>,
    pub enemies: Vec<EnemyTemplate>,
}

impl Definitions {
    pub fn build(self) -> Catalog {
        Catalog::new(self.skills, self.items, self.classes, self.enemies)
            .expect("test content is consistent")
    }

    pub fn skill_mut(&mut self, id: &str) -> &mut SkillDefinition {
        self.skills
            .iter_mut()
            .find(|skill| skill.id.as_str() == id)
            .expect("skill exists")
    }

    pub fn enemy_mut(&mut self, id: &str) -> &mut EnemyTemplate {
        self.enemies
            .iter_mut()
            .find(|enemy| enemy.id.as_str() == id)
            .expect("enemy exists")
    }
}

fn skill(
    id: &str,
    name: &str,
    mp: u32,
    kind: SkillKind,
    power: u32,
    duration: u32,
) -> SkillDefinition {
    SkillDefinition::new(id, name, mp, kind, power, duration)
}

pub fn definitions() -> Definitions {
    let skills = vec![
        skill("power_strike", "Power Strike", 10, SkillKind::Damage, 150, 0),
        skill("whirlwind", "Whirlwind", 20, SkillKind::Damage, 200, 0),
        skill("battle_cry", "Battle Cry", 15, SkillKind::Buff(StatKind::Attack), 30, 3),
        skill("fireball", "Fireball", 12, SkillKind::Damage, 160, 0),
        skill("poison_cloud", "Poison Cloud", 15, SkillKind::Dot(DotKind::Poison), 50, 3),
        skill("flame_curse", "Flame Curse", 18, SkillKind::Dot(DotKind::Burn), 40, 4),
        skill("heal", "Heal", 15, SkillKind::Heal, 80, 0),
        skill("rapid_shot", "Rapid Shot", 8, SkillKind::Damage, 130, 0),
        skill("piercing_arrow", "Piercing Arrow", 15, SkillKind::Damage, 180, 0),
        skill("backstab", "Backstab", 10, SkillKind::Damage, 170, 0),
        skill("poison_blade", "Poison Blade", 12, SkillKind::Dot(DotKind::Poison), 60, 3),
        skill("stunning_strike", "Stunning Strike", 15, SkillKind::Stun, 0, 1),
        skill("quick_stab", "Quick Stab", 5, SkillKind::Damage, 130, 0),
        skill("cleave", "Cleave", 8, SkillKind::Damage, 150, 0),
        skill("bone_arrow", "Bone Arrow", 6, SkillKind::Damage, 140, 0),
        skill("hobble", "Hobble", 5, SkillKind::Debuff(StatKind::Speed), 30, 2),
        skill("acid_spit", "Acid Spit", 5, SkillKind::Dot(DotKind::Poison), 50, 2),
    ];

    let items = vec![
        ItemDefinition::new("health_potion", "Health Potion", ItemEffect::RestoreHp(40)),
        ItemDefinition::new("mana_potion", "Mana Potion", ItemEffect::RestoreMp(30)),
        ItemDefinition::new("antidote", "Antidote", ItemEffect::Cleanse),
    ];

    let class = |kind, base, growth, skills: &[&str]| {
        ClassDefinition::new(kind, base, growth)
            .with_skills(skills.iter().copied())
            .with_starting_item("health_potion", 2)
            .with_starting_item("mana_potion", 1)
    };

    let classes = vec![
        class(
            ClassKind::Warrior,
            BaseStats::new(120, 30, 18, 8),
            StatGrowth::new(12, 3, 2, 1),
            &["power_strike", "whirlwind", "battle_cry"],
        ),
        class(
            ClassKind::Wizard,
            BaseStats::new(80, 60, 12, 10),
            StatGrowth::new(8, 6, 1, 1),
            &["fireball", "poison_cloud", "flame_curse", "heal"],
        ),
        class(
            ClassKind::Ranger,
            BaseStats::new(100, 40, 15, 12),
            StatGrowth::new(10, 4, 2, 1),
            &["rapid_shot", "piercing_arrow"],
        ),
        class(
            ClassKind::Thief,
            BaseStats::new(90, 35, 14, 15),
            StatGrowth::new(9, 4, 1, 1),
            &["backstab", "poison_blade", "stunning_strike"],
        ),
    ];

    let enemies = vec![
        EnemyTemplate::new("goblin_scout", "Goblin Scout", BaseStats::new(40, 10, 10, 8), 30, 15)
            .with_skills(["quick_stab"]),
        EnemyTemplate::new(
            "orc_warrior",
            "Orc Warrior",
            BaseStats::new(80, 20, 18, 6).with_level(3),
            75,
            35,
        )
        .with_skills(["cleave"]),
        EnemyTemplate::new(
            "skeleton_archer",
            "Skeleton Archer",
            BaseStats::new(60, 15, 14, 10).with_level(2),
            50,
            25,
        )
        .with_skills(["bone_arrow", "hobble"]),
        EnemyTemplate::new("slime", "Slime", BaseStats::new(30, 5, 6, 4), 20, 10)
            .with_skills(["acid_spit"])
            .with_policy(EnemyPolicy::new(30, 1, 1)),
    ];

    Definitions {
        skills,
        items,
        classes,
        enemies,
    }
}

pub fn catalog() -> Catalog {
    definitions().build()
}
