//! The player-controlled combatant.

use crate::config::ProgressionConfig;
use crate::env::{ClassKind, ItemId, SkillId};
use crate::stats::{BaseStats, StatBlock, StatGrowth, experience_threshold};

use super::combatant::{Combatant, Side};
use super::enemy::Reward;
use super::inventory::{Inventory, InventorySlot};
use super::status::StatusEffects;

/// A player character. Owns its stats, skills, inventory, gold, and level
/// progression. Classes differ only in the data they were created from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    class: ClassKind,
    stats: StatBlock,
    effects: StatusEffects,
    skills: Vec<SkillId>,
    inventory: Inventory,
    gold: u32,
    growth: StatGrowth,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        class: ClassKind,
        base: &BaseStats,
        growth: StatGrowth,
    ) -> Self {
        Self {
            name: name.into(),
            class,
            stats: StatBlock::from_base(base),
            effects: StatusEffects::empty(),
            skills: Vec::new(),
            inventory: Inventory::empty(),
            gold: 0,
            growth,
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SkillId>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    pub fn class(&self) -> ClassKind {
        self.class
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn growth(&self) -> &StatGrowth {
        &self.growth
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Adds experience and levels up as many times as it pays for.
    ///
    /// Each level consumes `threshold(level)` experience, applies the class
    /// growth, and fully restores HP and MP. Stops at `max_level`. Returns the
    /// levels reached, in order.
    pub fn gain_experience(&mut self, amount: u32, progression: &ProgressionConfig) -> Vec<u32> {
        self.stats.add_exp(amount);

        let mut reached = Vec::new();
        while self.stats.level() < progression.max_level {
            let threshold = experience_threshold(progression.exp_base, self.stats.level());
            if self.stats.exp() < threshold {
                break;
            }
            self.stats.consume_exp(threshold);
            self.stats.level_up(&self.growth);
            reached.push(self.stats.level());
        }
        reached
    }

    /// Collects a victory reward. Returns the levels reached.
    pub fn grant_reward(&mut self, reward: Reward, progression: &ProgressionConfig) -> Vec<u32> {
        self.gold = self.gold.saturating_add(reward.gold);
        self.gain_experience(reward.exp, progression)
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        Side::Player
    }

    fn stats(&self) -> &StatBlock {
        &self.stats
    }

    fn effects(&self) -> &StatusEffects {
        &self.effects
    }

    fn skills(&self) -> &[SkillId] {
        &self.skills
    }

    fn parts_mut(&mut self) -> (&mut StatBlock, &mut StatusEffects) {
        (&mut self.stats, &mut self.effects)
    }

    fn held_items(&self) -> &[InventorySlot] {
        self.inventory.slots()
    }

    fn consume_item(&mut self, item: &ItemId) -> bool {
        self.inventory.consume(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warrior() -> Player {
        Player::new(
            "Aria",
            ClassKind::Warrior,
            &BaseStats::new(120, 30, 18, 8),
            StatGrowth::new(12, 3, 2, 1),
        )
        .with_skills(["power_strike"])
    }

    #[test]
    fn below_threshold_keeps_level() {
        let mut player = warrior();
        assert!(player.gain_experience(99, &ProgressionConfig::default()).is_empty());
        assert_eq!(player.stats().level(), 1);
        assert_eq!(player.stats().exp(), 99);
    }

    #[test]
    fn large_reward_levels_up_repeatedly() {
        let mut player = warrior();
        player.stats_mut().apply_damage(100);

        // 100 (lv1) + 282 (lv2) + 519 (lv3) = 901
        let levels = player.gain_experience(950, &ProgressionConfig::default());
        assert_eq!(levels, vec![2, 3, 4]);
        assert_eq!(player.stats().exp(), 49);
        assert_eq!(player.stats().max_hp(), 156);
        assert_eq!(player.stats().hp(), 156);
        assert_eq!(player.stats().attack(), 24);
        assert_eq!(player.stats().speed(), 11);
    }

    #[test]
    fn max_level_caps_progression() {
        let mut player = warrior();
        let progression = ProgressionConfig {
            max_level: 2,
            ..ProgressionConfig::default()
        };
        assert_eq!(player.gain_experience(u32::MAX, &progression), vec![2]);
        assert_eq!(player.stats().level(), 2);
    }

    #[test]
    fn reward_adds_gold() {
        let mut player = warrior();
        player.grant_reward(Reward { exp: 30, gold: 15 }, &ProgressionConfig::default());
        assert_eq!(player.gold(), 15);
        assert_eq!(player.stats().exp(), 30);
    }

    #[test]
    fn inventory_backs_item_capability() {
        let mut player = warrior();
        let potion = ItemId::new("health_potion");
        player.inventory_mut().add(&potion, 1, 99);
        assert!(player.holds_item(&potion));
        assert!(player.consume_item(&potion));
        assert!(!player.holds_item(&potion));
    }
}
