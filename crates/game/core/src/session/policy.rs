//! Enemy action selection.

use crate::env::{Catalog, EnemyPolicy, RngOracle, RollContext, SkillDefinition, compute_seed};
use crate::state::{Combatant, Enemy};

use super::action::PlannedAction;

/// Picks the enemy's action for `round` according to its [`EnemyPolicy`].
///
/// Only skills the enemy can currently afford are considered. With none
/// affordable, or when the d100 gate fails, the enemy attacks normally.
pub(crate) fn choose_enemy_action<'c, R>(
    enemy: &Enemy,
    catalog: &'c Catalog,
    rng: &R,
    session_seed: u64,
    round: u64,
) -> PlannedAction<'c>
where
    R: RngOracle + ?Sized,
{
    let policy = enemy.policy();
    let mp = enemy.stats().mp();
    let affordable: Vec<&SkillDefinition> = enemy
        .skills()
        .iter()
        .filter_map(|id| catalog.skill(id))
        .filter(|skill| skill.mp_cost <= mp)
        .collect();

    if affordable.is_empty() {
        return PlannedAction::BasicAttack;
    }

    let actor = enemy.side().index();
    let gate = compute_seed(session_seed, round, actor, RollContext::PolicyGate);
    if !rng.chance(gate, policy.skill_chance_percent) {
        return PlannedAction::BasicAttack;
    }

    let weights: Vec<u32> = affordable
        .iter()
        .map(|skill| weight(policy, skill))
        .collect();
    let pick = compute_seed(session_seed, round, actor, RollContext::PolicyPick);

    match rng.pick_weighted(pick, &weights) {
        Some(index) => PlannedAction::Skill(affordable[index]),
        None => PlannedAction::BasicAttack,
    }
}

fn weight(policy: &EnemyPolicy, skill: &SkillDefinition) -> u32 {
    if skill.kind.is_offensive() {
        policy.damage_weight
    } else {
        policy.support_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EnemyTemplate, PcgRng, SkillKind};
    use crate::stats::{BaseStats, StatKind};

    fn catalog() -> Catalog {
        let cleave = SkillDefinition::new("cleave", "Cleave", 8, SkillKind::Damage, 150, 0);
        let roar =
            SkillDefinition::new("roar", "Roar", 5, SkillKind::Buff(StatKind::Attack), 20, 2);
        let orc = EnemyTemplate::new("orc", "Orc", BaseStats::new(80, 20, 18, 6), 75, 35)
            .with_skills(["cleave", "roar"]);
        Catalog::new([cleave, roar], [], [], [orc]).unwrap()
    }

    fn is_skill(action: PlannedAction<'_>, id: &str) -> bool {
        matches!(action, PlannedAction::Skill(skill) if skill.id.as_str() == id)
    }

    #[test]
    fn basic_only_policy_never_uses_skills() {
        let catalog = catalog();
        let template = catalog.enemy(&"orc".into()).unwrap().clone();
        let enemy = Enemy::spawn(&template.with_policy(EnemyPolicy::basic_only()));
        for round in 1..200 {
            let action = choose_enemy_action(&enemy, &catalog, &PcgRng, 9, round);
            assert_eq!(action, PlannedAction::BasicAttack);
        }
    }

    #[test]
    fn always_gate_with_zero_support_weight_picks_damage() {
        let catalog = catalog();
        let template = catalog.enemy(&"orc".into()).unwrap().clone();
        let enemy = Enemy::spawn(&template.with_policy(EnemyPolicy::new(100, 1, 0)));
        for round in 1..200 {
            let action = choose_enemy_action(&enemy, &catalog, &PcgRng, 9, round);
            assert!(is_skill(action, "cleave"));
        }
    }

    #[test]
    fn unaffordable_skills_are_skipped() {
        let catalog = catalog();
        let template = catalog.enemy(&"orc".into()).unwrap().clone();
        let mut enemy = Enemy::spawn(&template.with_policy(EnemyPolicy::new(100, 1, 1)));
        enemy.stats_mut().spend_mp(14);

        for round in 1..200 {
            let action = choose_enemy_action(&enemy, &catalog, &PcgRng, 9, round);
            assert!(is_skill(action, "roar"));
        }

        enemy.stats_mut().spend_mp(6);
        let action = choose_enemy_action(&enemy, &catalog, &PcgRng, 9, 1);
        assert_eq!(action, PlannedAction::BasicAttack);
    }

    #[test]
    fn default_policy_mixes_actions() {
        let catalog = catalog();
        let enemy = catalog.spawn_enemy(&"orc".into()).unwrap();
        let skills = (1..500)
            .filter(|round| !matches!(
                choose_enemy_action(&enemy, &catalog, &PcgRng, 3, *round),
                PlannedAction::BasicAttack
            ))
            .count();
        assert!(skills > 100 && skills < 300, "skill uses: {skills}");
    }
}
