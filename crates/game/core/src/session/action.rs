//! Actions a combatant can take in a round.

use crate::env::{ItemDefinition, ItemId, SkillDefinition, SkillId};

/// Which side of the fight an action is aimed at, relative to the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    Caster,
    Opponent,
}

impl core::fmt::Display for Target {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Caster => f.write_str("self"),
            Self::Opponent => f.write_str("opponent"),
        }
    }
}

/// The player's choice for one round, as submitted by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatAction {
    BasicAttack,
    /// `target` may be omitted; each skill kind has exactly one valid target.
    UseSkill {
        skill: SkillId,
        target: Option<Target>,
    },
    UseItem {
        item: ItemId,
    },
    Flee,
}

impl CombatAction {
    pub fn skill(skill: impl Into<SkillId>) -> Self {
        Self::UseSkill {
            skill: skill.into(),
            target: None,
        }
    }

    pub fn skill_at(skill: impl Into<SkillId>, target: Target) -> Self {
        Self::UseSkill {
            skill: skill.into(),
            target: Some(target),
        }
    }

    pub fn item(item: impl Into<ItemId>) -> Self {
        Self::UseItem { item: item.into() }
    }
}

/// An action that passed validation, with its definitions looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlannedAction<'c> {
    BasicAttack,
    Skill(&'c SkillDefinition),
    Item(&'c ItemDefinition),
}
