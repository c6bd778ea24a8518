//! Capability interface shared by players and enemies.

use crate::combat::{BASIC_ATTACK_POWER, apply_modifier, calculate_damage};
use crate::env::{ItemId, SkillId};
use crate::session::{CombatantSnapshot, LogEntry, PlannedAction, resolve};
use crate::stats::{StatBlock, StatKind};

use super::inventory::InventorySlot;
use super::status::{StatusEffects, StatusTick};

/// Which side of an encounter a combatant fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    #[strum(serialize = "player")]
    Player,
    #[strum(serialize = "enemy")]
    Enemy,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    /// Actor index mixed into roll seeds.
    pub const fn index(self) -> u32 {
        match self {
            Self::Player => 0,
            Self::Enemy => 1,
        }
    }
}

/// A participant in combat.
///
/// Implementors only expose their parts; everything derived from stats and
/// status effects is provided here so both variants compute it identically.
pub trait Combatant {
    fn name(&self) -> &str;

    fn side(&self) -> Side;

    fn stats(&self) -> &StatBlock;

    fn effects(&self) -> &StatusEffects;

    fn skills(&self) -> &[SkillId];

    /// Split borrow used when status effects act on stats.
    fn parts_mut(&mut self) -> (&mut StatBlock, &mut StatusEffects);

    /// Inventory contents. Combatants without an inventory hold nothing.
    fn held_items(&self) -> &[InventorySlot] {
        &[]
    }

    /// Removes one `item` from the inventory. Returns false if none is held.
    fn consume_item(&mut self, _item: &ItemId) -> bool {
        false
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        self.parts_mut().0
    }

    fn effects_mut(&mut self) -> &mut StatusEffects {
        self.parts_mut().1
    }

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }

    fn is_stunned(&self) -> bool {
        self.effects().is_stunned()
    }

    fn knows_skill(&self, skill: &SkillId) -> bool {
        self.skills().contains(skill)
    }

    fn holds_item(&self, item: &ItemId) -> bool {
        self.held_items()
            .iter()
            .any(|slot| &slot.item == item && slot.quantity > 0)
    }

    /// Aggregate Attack modifier in percent.
    fn attack_modifier(&self) -> u32 {
        self.effects().aggregate_modifier(StatKind::Attack)
    }

    fn effective_attack(&self) -> u32 {
        apply_modifier(self.stats().attack(), self.attack_modifier())
    }

    /// Speed after buffs and debuffs, never below one.
    fn effective_speed(&self) -> u32 {
        let modifier = self.effects().aggregate_modifier(StatKind::Speed);
        apply_modifier(self.stats().speed(), modifier).max(1)
    }

    /// Strikes `target` at ×1.0 power. Returns the HP actually removed.
    fn basic_attack<T>(&self, target: &mut T) -> u32
    where
        Self: Sized,
        T: Combatant + ?Sized,
    {
        let damage = calculate_damage(
            self.stats().attack(),
            BASIC_ATTACK_POWER,
            self.attack_modifier(),
        );
        target.stats_mut().apply_damage(damage)
    }

    /// Resolves one already-validated action against `opponent`, appending
    /// what happened to `log`.
    fn take_turn<T>(&mut self, opponent: &mut T, action: PlannedAction<'_>, log: &mut Vec<LogEntry>)
    where
        Self: Sized,
        T: Combatant + ?Sized,
    {
        resolve::execute(self, opponent, action, log);
    }

    /// Runs the round-end status tick on this combatant.
    fn tick_effects(&mut self) -> Vec<StatusTick> {
        let (stats, effects) = self.parts_mut();
        effects.tick(stats)
    }

    fn snapshot(&self) -> CombatantSnapshot {
        let stats = self.stats();
        CombatantSnapshot {
            name: self.name().to_owned(),
            side: self.side(),
            hp: stats.hp(),
            max_hp: stats.max_hp(),
            mp: stats.mp(),
            max_mp: stats.max_mp(),
            attack: stats.attack(),
            speed: stats.speed(),
            effective_attack: self.effective_attack(),
            effective_speed: self.effective_speed(),
            level: stats.level(),
            exp: stats.exp(),
            effects: self.effects().iter().copied().collect(),
        }
    }
}
