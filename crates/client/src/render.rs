//! Plain-text rendering of round results.

use std::fmt::Write as _;

use game_core::{
    Catalog, CombatantSnapshot, EventKind, ItemId, LogEntry, SessionState, Side, SkillId,
    StatusEffectKind, TurnResult,
};

fn skill_name<'c>(catalog: &'c Catalog, id: &'c SkillId) -> &'c str {
    catalog.skill(id).map_or(id.as_str(), |skill| skill.name.as_str())
}

fn item_name<'c>(catalog: &'c Catalog, id: &'c ItemId) -> &'c str {
    catalog.item(id).map_or(id.as_str(), |item| item.name.as_str())
}

/// Who a freshly applied status lands on, relative to the caster.
fn status_holder(status: StatusEffectKind, caster: Side) -> Side {
    match status {
        StatusEffectKind::Buff(_) => caster,
        _ => caster.opponent(),
    }
}

/// Describes one log entry as a sentence.
pub fn describe(entry: &LogEntry, result: &TurnResult, catalog: &Catalog) -> String {
    let name_of = |side: Side| match side {
        Side::Player => result.player.name.as_str(),
        Side::Enemy => result.enemy.name.as_str(),
    };
    let actor = name_of(entry.actor);
    let n = entry.magnitude;

    match &entry.event {
        EventKind::BasicAttack => format!("{actor} attacks for {n} damage."),
        EventKind::SkillDamage(skill) => {
            format!("{actor} uses {} for {n} damage.", skill_name(catalog, skill))
        }
        EventKind::SkillHeal(skill) => {
            format!("{actor} uses {} and recovers {n} HP.", skill_name(catalog, skill))
        }
        EventKind::StatusApplied { skill, status } => format!(
            "{actor} uses {}: {} gains {status} for {n} rounds.",
            skill_name(catalog, skill),
            name_of(status_holder(*status, entry.actor)),
        ),
        EventKind::StatusRefreshed { skill, status } => format!(
            "{actor} uses {}: {}'s {status} is refreshed to {n} rounds.",
            skill_name(catalog, skill),
            name_of(status_holder(*status, entry.actor)),
        ),
        EventKind::ItemRestoredHp(item) => {
            format!("{actor} uses {} and recovers {n} HP.", item_name(catalog, item))
        }
        EventKind::ItemRestoredMp(item) => {
            format!("{actor} uses {} and recovers {n} MP.", item_name(catalog, item))
        }
        EventKind::ItemCleansed(item) => format!(
            "{actor} uses {} and shakes off {n} effect(s).",
            item_name(catalog, item)
        ),
        EventKind::Stunned => format!("{actor} is stunned and cannot act!"),
        EventKind::StatusDamage(status) => format!("{actor} takes {n} {status} damage."),
        EventKind::StatusExpired(status) => format!("{actor}'s {status} wore off."),
        EventKind::FleeSucceeded => format!("{actor} escaped! ({n}% chance)"),
        EventKind::FleeFailed => format!("{actor} failed to escape! ({n}% chance)"),
        EventKind::Defeated => format!("{actor} is defeated!"),
        EventKind::ExperienceGained => format!("{actor} gains {n} experience."),
        EventKind::GoldGained => format!("{actor} finds {n} gold."),
        EventKind::LevelUp => format!("{actor} reached level {n}!"),
    }
}

/// One status line for a combatant.
pub fn status_line(snapshot: &CombatantSnapshot) -> String {
    let mut line = format!(
        "{} Lv{}  HP {}/{}  MP {}/{}  ATK {}  SPD {}",
        snapshot.name,
        snapshot.level,
        snapshot.hp,
        snapshot.max_hp,
        snapshot.mp,
        snapshot.max_mp,
        snapshot.effective_attack,
        snapshot.effective_speed,
    );
    for effect in &snapshot.effects {
        let _ = write!(line, "  [{} {}]", effect.kind, effect.remaining);
    }
    line
}

/// Closing line for a finished session, if it has one.
pub fn outcome_line(state: SessionState) -> Option<&'static str> {
    match state {
        SessionState::Victory => Some("Victory!"),
        SessionState::Defeat => Some("You have been defeated."),
        SessionState::Fled => Some("You got away."),
        SessionState::AwaitingPlayerAction | SessionState::ResolvingTurn => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{StatKind, StatusEffect};

    fn snapshot(name: &str, side: Side) -> CombatantSnapshot {
        CombatantSnapshot {
            name: name.to_owned(),
            side,
            hp: 50,
            max_hp: 120,
            mp: 15,
            max_mp: 30,
            attack: 18,
            speed: 8,
            effective_attack: 23,
            effective_speed: 8,
            level: 2,
            exp: 10,
            effects: vec![StatusEffect::new(StatusEffectKind::Buff(StatKind::Attack), 30, 2)],
        }
    }

    fn result(entries: Vec<LogEntry>) -> TurnResult {
        TurnResult {
            round: 1,
            entries,
            player: snapshot("Ayla", Side::Player),
            enemy: snapshot("Goblin Scout", Side::Enemy),
            state: SessionState::AwaitingPlayerAction,
        }
    }

    fn empty_catalog() -> Catalog {
        Catalog::new(Vec::new(), Vec::new(), Vec::new(), Vec::new())
            .expect("empty catalog is valid")
    }

    #[test]
    fn names_the_actor_and_falls_back_to_ids() {
        let catalog = empty_catalog();
        let entry =
            LogEntry::new(Side::Enemy, EventKind::SkillDamage(SkillId::new("quick_stab")), 9);
        let turn = result(vec![entry.clone()]);
        assert_eq!(
            describe(&entry, &turn, &catalog),
            "Goblin Scout uses quick_stab for 9 damage."
        );
    }

    #[test]
    fn debuffs_land_on_the_opponent() {
        let catalog = empty_catalog();
        let entry = LogEntry::new(
            Side::Player,
            EventKind::StatusApplied {
                skill: SkillId::new("stunning_strike"),
                status: StatusEffectKind::Stun,
            },
            1,
        );
        let turn = result(vec![entry.clone()]);
        assert_eq!(
            describe(&entry, &turn, &catalog),
            "Ayla uses stunning_strike: Goblin Scout gains stun for 1 rounds."
        );
    }

    #[test]
    fn status_line_lists_effects() {
        let line = status_line(&snapshot("Ayla", Side::Player));
        assert!(line.starts_with("Ayla Lv2  HP 50/120  MP 15/30  ATK 23  SPD 8"));
        assert!(line.ends_with("[attack up 2]"), "{line}");
    }
}
