//! Skill definitions.

use super::SkillId;
use crate::session::Target;
use crate::state::StatusEffectKind;
use crate::stats::StatKind;

/// Damage-over-time flavours. Each maps to its own status effect kind, so a
/// combatant can be poisoned and burning at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DotKind {
    Poison,
    Burn,
}

impl DotKind {
    pub const fn status(self) -> StatusEffectKind {
        match self {
            Self::Poison => StatusEffectKind::Poison,
            Self::Burn => StatusEffectKind::Burn,
        }
    }
}

/// What a skill does when it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    /// Immediate damage to the opponent.
    Damage,
    /// Immediate healing of the caster.
    Heal,
    /// Raises one of the caster's stats for `duration` rounds.
    Buff(StatKind),
    /// Lowers one of the opponent's stats for `duration` rounds.
    Debuff(StatKind),
    /// Damages the opponent at every round end for `duration` rounds.
    Dot(DotKind),
    /// Opponent skips its next `duration` turns.
    Stun,
}

impl SkillKind {
    /// Which side of the fight the skill must be aimed at.
    pub const fn target(self) -> Target {
        match self {
            Self::Heal | Self::Buff(_) => Target::Caster,
            Self::Damage | Self::Debuff(_) | Self::Dot(_) | Self::Stun => Target::Opponent,
        }
    }

    /// True for skills that hurt or hinder the opponent.
    pub const fn is_offensive(self) -> bool {
        matches!(self.target(), Target::Opponent)
    }

    /// True when the skill attaches a timed status effect.
    pub const fn applies_status(self) -> bool {
        matches!(
            self,
            Self::Buff(_) | Self::Debuff(_) | Self::Dot(_) | Self::Stun
        )
    }
}

/// Static definition of a usable skill.
///
/// `power_percent` is the skill multiplier in percent (Power Strike's ×1.5 is
/// `150`). `duration` is in rounds and is zero for instantaneous skills.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub mp_cost: u32,
    pub kind: SkillKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power_percent: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: u32,
}

impl SkillDefinition {
    pub fn new(
        id: impl Into<SkillId>,
        name: impl Into<String>,
        mp_cost: u32,
        kind: SkillKind,
        power_percent: u32,
        duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            mp_cost,
            kind,
            power_percent,
            duration,
        }
    }

    /// Checks internal consistency: status skills need a positive duration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.kind.applies_status() && self.duration == 0 {
            return Err("status skills need a duration of at least one round");
        }
        if !self.kind.applies_status() && self.duration != 0 {
            return Err("instant skills cannot have a duration");
        }
        if matches!(self.kind, SkillKind::Damage | SkillKind::Heal) && self.power_percent == 0 {
            return Err("damage and heal skills need a positive power");
        }
        Ok(())
    }
}
