//! The stat block carried by every combatant.

use super::progression::StatGrowth;
use super::resources::ResourceMeter;

/// Stats that status effects can modify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    #[strum(serialize = "attack")]
    Attack,
    #[strum(serialize = "speed")]
    Speed,
}

/// Starting attributes used to build a [`StatBlock`].
///
/// This is the shape class and enemy definitions use in content files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub speed: u32,
    #[cfg_attr(feature = "serde", serde(default = "BaseStats::default_level"))]
    pub level: u32,
}

impl BaseStats {
    pub const fn new(max_hp: u32, max_mp: u32, attack: u32, speed: u32) -> Self {
        Self {
            max_hp,
            max_mp,
            attack,
            speed,
            level: 1,
        }
    }

    pub const fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    #[cfg(feature = "serde")]
    const fn default_level() -> u32 {
        1
    }
}

/// Numeric attributes and resource pools of a combatant.
///
/// HP and MP only change through the clamped operations below. `exp` is the
/// experience accumulated towards the next level (players only; enemies keep
/// it at zero).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    hp: ResourceMeter,
    mp: ResourceMeter,
    attack: u32,
    speed: u32,
    level: u32,
    exp: u32,
}

impl StatBlock {
    /// Creates a stat block at full HP and MP.
    pub fn from_base(base: &BaseStats) -> Self {
        Self {
            hp: ResourceMeter::full(base.max_hp),
            mp: ResourceMeter::full(base.max_mp),
            attack: base.attack,
            speed: base.speed,
            level: base.level.max(1),
            exp: 0,
        }
    }

    /// Overrides current HP (clamped). Used when resuming an injured combatant.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = ResourceMeter::new(hp, self.hp.maximum());
        self
    }

    /// Overrides current MP (clamped).
    pub fn with_mp(mut self, mp: u32) -> Self {
        self.mp = ResourceMeter::new(mp, self.mp.maximum());
        self
    }

    pub fn hp(&self) -> u32 {
        self.hp.current()
    }

    pub fn max_hp(&self) -> u32 {
        self.hp.maximum()
    }

    pub fn mp(&self) -> u32 {
        self.mp.current()
    }

    pub fn max_mp(&self) -> u32 {
        self.mp.maximum()
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn is_alive(&self) -> bool {
        !self.hp.is_empty()
    }

    /// Reduces HP by `amount`, never below zero. Returns the HP actually lost.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        self.hp.drain(amount)
    }

    /// Restores HP by `amount`, never above max. Returns the HP actually gained.
    pub fn apply_heal(&mut self, amount: u32) -> u32 {
        self.hp.fill(amount)
    }

    /// Spends MP if enough is available; otherwise nothing changes.
    pub fn spend_mp(&mut self, amount: u32) -> bool {
        self.mp.try_spend(amount)
    }

    /// Restores MP by `amount`, never above max. Returns the MP actually gained.
    pub fn restore_mp(&mut self, amount: u32) -> u32 {
        self.mp.fill(amount)
    }

    pub(crate) fn add_exp(&mut self, amount: u32) {
        self.exp = self.exp.saturating_add(amount);
    }

    pub(crate) fn consume_exp(&mut self, amount: u32) {
        self.exp = self.exp.saturating_sub(amount);
    }

    /// Raises the level by one, applies `growth`, and refills both pools.
    pub(crate) fn level_up(&mut self, growth: &StatGrowth) {
        self.level += 1;
        self.hp.grow(growth.max_hp);
        self.mp.grow(growth.max_mp);
        self.attack = self.attack.saturating_add(growth.attack);
        self.speed = self.speed.saturating_add(growth.speed);
        self.hp.refill();
        self.mp.refill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn warrior() -> StatBlock {
        StatBlock::from_base(&BaseStats::new(120, 30, 18, 8))
    }

    #[test]
    fn damage_reports_clamped_amount() {
        let mut stats = warrior().with_hp(20);
        assert_eq!(stats.apply_damage(27), 20);
        assert_eq!(stats.hp(), 0);
        assert!(!stats.is_alive());
    }

    #[test]
    fn heal_stops_at_max() {
        let mut stats = warrior().with_hp(100);
        assert_eq!(stats.apply_heal(40), 20);
        assert_eq!(stats.hp(), 120);
    }

    #[test]
    fn spend_mp_fails_without_mutation() {
        let mut stats = warrior().with_mp(5);
        assert!(!stats.spend_mp(10));
        assert_eq!(stats.mp(), 5);
        assert!(stats.spend_mp(5));
        assert_eq!(stats.mp(), 0);
        assert_eq!(stats.restore_mp(100), 30);
    }

    #[test]
    fn level_up_applies_growth_and_refills() {
        let mut stats = warrior().with_hp(10).with_mp(0);
        stats.level_up(&StatGrowth::new(12, 3, 2, 1));
        assert_eq!(stats.level(), 2);
        assert_eq!(stats.max_hp(), 132);
        assert_eq!(stats.hp(), 132);
        assert_eq!(stats.mp(), 33);
        assert_eq!(stats.attack(), 20);
        assert_eq!(stats.speed(), 9);
    }

    proptest! {
        #[test]
        fn damage_keeps_hp_in_bounds(
            max_hp in 1u32..10_000,
            hp in 0u32..10_000,
            dmg in 0u32..20_000
        ) {
            let mut stats = StatBlock::from_base(&BaseStats::new(max_hp, 0, 1, 1)).with_hp(hp);
            let prior = stats.hp();
            let dealt = stats.apply_damage(dmg);
            prop_assert_eq!(dealt, dmg.min(prior));
            prop_assert!(stats.hp() <= stats.max_hp());
            prop_assert_eq!(stats.hp(), prior - dealt);
        }

        #[test]
        fn heal_keeps_hp_in_bounds(
            max_hp in 1u32..10_000,
            hp in 0u32..10_000,
            heal in 0u32..20_000
        ) {
            let mut stats = StatBlock::from_base(&BaseStats::new(max_hp, 0, 1, 1)).with_hp(hp);
            let prior = stats.hp();
            let healed = stats.apply_heal(heal);
            prop_assert_eq!(healed, heal.min(max_hp - prior));
            prop_assert!(stats.hp() <= stats.max_hp());
        }
    }
}
