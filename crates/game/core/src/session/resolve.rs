//! Resolution of a single validated action.
//!
//! Callers guarantee the action is legal for the actor (skill known, item
//! held) and that the actor is alive and not stunned. MP is spent here; an
//! actor that can no longer afford its skill falls back to a basic attack.

use tracing::trace;

use crate::combat::scale_percent;
use crate::env::{ItemDefinition, ItemEffect, SkillDefinition, SkillKind};
use crate::state::{AddOutcome, Combatant, Side, StatusEffect, StatusEffectKind, StatusTick};

use super::action::PlannedAction;
use super::result::{EventKind, LogEntry};

pub(crate) fn execute<A, D>(
    actor: &mut A,
    opponent: &mut D,
    action: PlannedAction<'_>,
    log: &mut Vec<LogEntry>,
) where
    A: Combatant,
    D: Combatant + ?Sized,
{
    let opponent_was_alive = opponent.is_alive();

    match action {
        PlannedAction::BasicAttack => basic_attack(actor, opponent, log),
        PlannedAction::Skill(skill) => {
            if actor.stats_mut().spend_mp(skill.mp_cost) {
                use_skill(actor, opponent, skill, log);
            } else {
                trace!(
                    actor = actor.name(),
                    skill = %skill.id,
                    "cannot afford skill, attacking instead"
                );
                basic_attack(actor, opponent, log);
            }
        }
        PlannedAction::Item(item) => use_item(actor, item, log),
    }

    if opponent_was_alive && !opponent.is_alive() {
        push(log, LogEntry::new(opponent.side(), EventKind::Defeated, 0));
    }
}

fn basic_attack<A, D>(actor: &A, opponent: &mut D, log: &mut Vec<LogEntry>)
where
    A: Combatant,
    D: Combatant + ?Sized,
{
    let dealt = actor.basic_attack(opponent);
    push(log, LogEntry::new(actor.side(), EventKind::BasicAttack, dealt));
}

fn use_skill<A, D>(
    actor: &mut A,
    opponent: &mut D,
    skill: &SkillDefinition,
    log: &mut Vec<LogEntry>,
) where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let amount = scale_percent(
        actor.stats().attack(),
        skill.power_percent,
        actor.attack_modifier(),
    );
    let power = i32::try_from(skill.power_percent).unwrap_or(i32::MAX);

    match skill.kind {
        SkillKind::Damage => {
            let dealt = opponent.stats_mut().apply_damage(amount);
            push(
                log,
                LogEntry::new(actor.side(), EventKind::SkillDamage(skill.id.clone()), dealt),
            );
        }
        SkillKind::Heal => {
            let healed = actor.stats_mut().apply_heal(amount);
            push(
                log,
                LogEntry::new(actor.side(), EventKind::SkillHeal(skill.id.clone()), healed),
            );
        }
        SkillKind::Buff(stat) => {
            let effect = StatusEffect::new(StatusEffectKind::Buff(stat), power, skill.duration);
            let outcome = actor.effects_mut().add(effect);
            log_status(log, actor.side(), skill, effect, outcome);
        }
        SkillKind::Debuff(stat) => {
            let effect = StatusEffect::new(StatusEffectKind::Debuff(stat), -power, skill.duration);
            let outcome = opponent.effects_mut().add(effect);
            log_status(log, actor.side(), skill, effect, outcome);
        }
        SkillKind::Dot(dot) => {
            let magnitude = i32::try_from(amount).unwrap_or(i32::MAX);
            let effect = StatusEffect::new(dot.status(), magnitude, skill.duration);
            let outcome = opponent.effects_mut().add(effect);
            log_status(log, actor.side(), skill, effect, outcome);
        }
        SkillKind::Stun => {
            let effect = StatusEffect::stun(skill.duration);
            let outcome = opponent.effects_mut().add(effect);
            log_status(log, actor.side(), skill, effect, outcome);
        }
    }
}

fn log_status(
    log: &mut Vec<LogEntry>,
    actor: Side,
    skill: &SkillDefinition,
    effect: StatusEffect,
    outcome: AddOutcome,
) {
    let event = match outcome {
        AddOutcome::Added => EventKind::StatusApplied {
            skill: skill.id.clone(),
            status: effect.kind,
        },
        AddOutcome::Refreshed => EventKind::StatusRefreshed {
            skill: skill.id.clone(),
            status: effect.kind,
        },
        AddOutcome::Ignored => return,
    };
    push(log, LogEntry::new(actor, event, effect.remaining));
}

fn use_item<A>(actor: &mut A, item: &ItemDefinition, log: &mut Vec<LogEntry>)
where
    A: Combatant + ?Sized,
{
    if !actor.consume_item(&item.id) {
        trace!(actor = actor.name(), item = %item.id, "item no longer held");
        return;
    }

    let entry = match item.effect {
        ItemEffect::RestoreHp(amount) => {
            let healed = actor.stats_mut().apply_heal(amount);
            LogEntry::new(actor.side(), EventKind::ItemRestoredHp(item.id.clone()), healed)
        }
        ItemEffect::RestoreMp(amount) => {
            let restored = actor.stats_mut().restore_mp(amount);
            LogEntry::new(actor.side(), EventKind::ItemRestoredMp(item.id.clone()), restored)
        }
        ItemEffect::Cleanse => {
            let removed = actor.effects_mut().cleanse();
            let removed = u32::try_from(removed).unwrap_or(u32::MAX);
            LogEntry::new(actor.side(), EventKind::ItemCleansed(item.id.clone()), removed)
        }
    };
    push(log, entry);
}

/// Round-end tick for one combatant.
pub(crate) fn tick<C>(combatant: &mut C, log: &mut Vec<LogEntry>)
where
    C: Combatant + ?Sized,
{
    let was_alive = combatant.is_alive();
    let side = combatant.side();

    for StatusTick {
        kind,
        applied,
        expired,
    } in combatant.tick_effects()
    {
        if kind.is_damage_over_time() {
            push(log, LogEntry::new(side, EventKind::StatusDamage(kind), applied));
        }
        if expired {
            push(log, LogEntry::new(side, EventKind::StatusExpired(kind), 0));
        }
    }

    if was_alive && !combatant.is_alive() {
        push(log, LogEntry::new(side, EventKind::Defeated, 0));
    }
}

fn push(log: &mut Vec<LogEntry>, entry: LogEntry) {
    trace!(actor = %entry.actor, event = ?entry.event, magnitude = entry.magnitude, "combat event");
    log.push(entry);
}
