//! Structured outcome of a round.

use crate::env::{ItemId, SkillId};
use crate::state::{Side, StatusEffect, StatusEffectKind};

use super::SessionState;

/// Everything that happened in one round, plus the state afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnResult {
    pub round: u64,
    /// Events in the order they happened.
    pub entries: Vec<LogEntry>,
    pub player: CombatantSnapshot,
    pub enemy: CombatantSnapshot,
    pub state: SessionState,
}

impl TurnResult {
    pub fn events_by(&self, side: Side) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |entry| entry.actor == side)
    }
}

/// One logged event: who it happened to or who did it, what, and how much.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub actor: Side,
    pub event: EventKind,
    /// HP/MP changed, rounds applied, effects removed, experience, gold, or the
    /// new level, depending on `event`. Zero when not meaningful.
    pub magnitude: u32,
}

impl LogEntry {
    pub fn new(actor: Side, event: EventKind, magnitude: u32) -> Self {
        Self {
            actor,
            event,
            magnitude,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Damage dealt by a basic attack.
    BasicAttack,
    /// Damage dealt by a skill.
    SkillDamage(SkillId),
    /// HP restored by a skill.
    SkillHeal(SkillId),
    /// New status effect; magnitude is its duration.
    StatusApplied {
        skill: SkillId,
        status: StatusEffectKind,
    },
    /// Existing status effect had its duration reset; magnitude is the duration.
    StatusRefreshed {
        skill: SkillId,
        status: StatusEffectKind,
    },
    ItemRestoredHp(ItemId),
    ItemRestoredMp(ItemId),
    /// Magnitude is the number of effects removed.
    ItemCleansed(ItemId),
    /// The actor is stunned and cannot act.
    Stunned,
    /// HP lost to a damage-over-time effect at round end.
    StatusDamage(StatusEffectKind),
    StatusExpired(StatusEffectKind),
    FleeSucceeded,
    /// Magnitude is the chance that was rolled against, in percent.
    FleeFailed,
    /// The actor's HP reached zero.
    Defeated,
    ExperienceGained,
    GoldGained,
    /// Magnitude is the level reached.
    LevelUp,
}

/// Read-only view of a combatant after a round, for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSnapshot {
    pub name: String,
    pub side: Side,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub speed: u32,
    pub effective_attack: u32,
    pub effective_speed: u32,
    pub level: u32,
    pub exp: u32,
    pub effects: Vec<StatusEffect>,
}
