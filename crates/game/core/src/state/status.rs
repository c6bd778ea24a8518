//! Status effect system for combatants.
//!
//! Effects are timed modifiers measured in rounds. They are created by skills
//! with a positive duration, counted down once at every round end, and removed
//! when the countdown reaches zero.
//!
//! # Same-kind policy
//!
//! Adding an effect whose kind is already present refreshes the remaining
//! duration to the new effect's duration and keeps the existing magnitude.
//! Magnitudes never stack, so the set holds at most one effect per kind.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::stats::{StatBlock, StatKind};

/// Kinds of status effects. Buffs and debuffs carry the stat they modify;
/// `Buff(Attack)` and `Buff(Speed)` are different kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusEffectKind {
    /// Raises a stat by `magnitude` percent.
    Buff(StatKind),
    /// Lowers a stat; `magnitude` is a negative percentage.
    Debuff(StatKind),
    /// Loses `magnitude` HP at every round end.
    Poison,
    /// Loses `magnitude` HP at every round end.
    Burn,
    /// Cannot act.
    Stun,
}

impl StatusEffectKind {
    pub const fn is_damage_over_time(self) -> bool {
        matches!(self, Self::Poison | Self::Burn)
    }

    /// Effects removed by cleansing items.
    pub const fn is_harmful(self) -> bool {
        !matches!(self, Self::Buff(_))
    }

    /// The stat this effect modifies, if any.
    pub const fn modified_stat(self) -> Option<StatKind> {
        match self {
            Self::Buff(stat) | Self::Debuff(stat) => Some(stat),
            Self::Poison | Self::Burn | Self::Stun => None,
        }
    }
}

impl core::fmt::Display for StatusEffectKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Buff(stat) => write!(f, "{stat} up"),
            Self::Debuff(stat) => write!(f, "{stat} down"),
            Self::Poison => f.write_str("poison"),
            Self::Burn => f.write_str("burn"),
            Self::Stun => f.write_str("stun"),
        }
    }
}

/// A single active status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    /// Signed percentage for buffs/debuffs, flat HP per round for DoTs,
    /// unused for stun.
    pub magnitude: i32,
    /// Round ends left before the effect expires.
    pub remaining: u32,
}

impl StatusEffect {
    pub const fn new(kind: StatusEffectKind, magnitude: i32, remaining: u32) -> Self {
        Self {
            kind,
            magnitude,
            remaining,
        }
    }

    pub const fn stun(rounds: u32) -> Self {
        Self::new(StatusEffectKind::Stun, 0, rounds)
    }
}

/// Result of [`StatusEffects::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// An effect of the same kind existed; its duration was reset.
    Refreshed,
    /// Zero-duration effects are never stored.
    Ignored,
}

/// What happened to one effect during [`StatusEffects::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTick {
    pub kind: StatusEffectKind,
    /// HP actually lost to a damage-over-time effect; zero otherwise.
    pub applied: u32,
    /// The effect ran out and was removed.
    pub expired: bool,
}

/// Active status effects on a combatant, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Adds an effect, or refreshes the duration of an existing one of the
    /// same kind.
    pub fn add(&mut self, effect: StatusEffect) -> AddOutcome {
        if effect.remaining == 0 {
            return AddOutcome::Ignored;
        }

        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            existing.remaining = effect.remaining;
            return AddOutcome::Refreshed;
        }

        match self.effects.try_push(effect) {
            Ok(()) => AddOutcome::Added,
            Err(_) => AddOutcome::Ignored,
        }
    }

    /// Runs one round end: DoTs damage `stats`, every duration counts down by
    /// one, and effects reaching zero are removed. Reports one entry per
    /// effect in insertion order.
    pub fn tick(&mut self, stats: &mut StatBlock) -> Vec<StatusTick> {
        let mut report = Vec::with_capacity(self.effects.len());

        for effect in self.effects.iter_mut() {
            let applied = if effect.kind.is_damage_over_time() {
                stats.apply_damage(effect.magnitude.max(0).unsigned_abs())
            } else {
                0
            };

            effect.remaining = effect.remaining.saturating_sub(1);

            report.push(StatusTick {
                kind: effect.kind,
                applied,
                expired: effect.remaining == 0,
            });
        }

        self.effects.retain(|e| e.remaining > 0);
        report
    }

    /// True while a stun with rounds remaining is present.
    pub fn is_stunned(&self) -> bool {
        self.effects
            .iter()
            .any(|e| e.kind == StatusEffectKind::Stun && e.remaining > 0)
    }

    /// Net multiplier on `stat` in percent (100 = unchanged).
    ///
    /// Buff and debuff magnitudes are summed, then floored at
    /// [`CombatConfig::MIN_MODIFIER_PERCENT`].
    pub fn aggregate_modifier(&self, stat: StatKind) -> u32 {
        let total: i64 = self
            .effects
            .iter()
            .filter(|e| e.kind.modified_stat() == Some(stat))
            .map(|e| i64::from(e.magnitude))
            .sum();

        let percent = (100 + total).max(i64::from(CombatConfig::MIN_MODIFIER_PERCENT));
        u32::try_from(percent).unwrap_or(u32::MAX)
    }

    /// Returns the active effect of `kind`, if any.
    pub fn get(&self, kind: StatusEffectKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Removes every harmful effect, returning how many were removed.
    pub fn cleanse(&mut self) -> usize {
        let before = self.effects.len();
        self.effects.retain(|e| !e.kind.is_harmful());
        before - self.effects.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
