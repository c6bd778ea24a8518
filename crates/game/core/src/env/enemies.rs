//! Enemy templates and their action policy.

use super::{EnemyId, SkillId};
use crate::stats::BaseStats;

/// Data-driven enemy decision policy.
///
/// Each round the enemy first rolls d100 against `skill_chance_percent`. On a
/// success it picks one affordable skill, weighting offensive skills by
/// `damage_weight` and healing/buffing skills by `support_weight`. Otherwise,
/// or when nothing is affordable, it uses a basic attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnemyPolicy {
    pub skill_chance_percent: u32,
    pub damage_weight: u32,
    pub support_weight: u32,
}

impl EnemyPolicy {
    pub const DEFAULT_SKILL_CHANCE: u32 = 40;
    pub const DEFAULT_DAMAGE_WEIGHT: u32 = 3;
    pub const DEFAULT_SUPPORT_WEIGHT: u32 = 1;

    pub const fn new(skill_chance_percent: u32, damage_weight: u32, support_weight: u32) -> Self {
        Self {
            skill_chance_percent,
            damage_weight,
            support_weight,
        }
    }

    /// Never uses skills.
    pub const fn basic_only() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Default for EnemyPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SKILL_CHANCE,
            Self::DEFAULT_DAMAGE_WEIGHT,
            Self::DEFAULT_SUPPORT_WEIGHT,
        )
    }
}

/// Static definition of an enemy type. Spawning copies the stats into a fresh
/// [`crate::state::Enemy`] at full HP/MP.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: String,
    pub base: BaseStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<SkillId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: EnemyPolicy,
    pub exp_reward: u32,
    pub gold_reward: u32,
}

impl EnemyTemplate {
    pub fn new(
        id: impl Into<EnemyId>,
        name: impl Into<String>,
        base: BaseStats,
        exp_reward: u32,
        gold_reward: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base,
            skills: Vec::new(),
            policy: EnemyPolicy::default(),
            exp_reward,
            gold_reward,
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

    pub fn with_policy(mut self, policy: EnemyPolicy) -> Self {
        self.policy = policy;
        self
    }
}
