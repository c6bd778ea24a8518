//! Enemy combatants.

use crate::env::{EnemyId, EnemyPolicy, EnemyTemplate, SkillId};
use crate::stats::StatBlock;

use super::combatant::{Combatant, Side};
use super::status::StatusEffects;

/// Experience and gold granted for defeating an enemy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub exp: u32,
    pub gold: u32,
}

/// A spawned enemy. Enemies never level and never carry items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    id: EnemyId,
    name: String,
    stats: StatBlock,
    effects: StatusEffects,
    skills: Vec<SkillId>,
    policy: EnemyPolicy,
    reward: Reward,
}

impl Enemy {
    /// Creates a fresh enemy at full HP/MP from its template.
    pub fn spawn(template: &EnemyTemplate) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            stats: StatBlock::from_base(&template.base),
            effects: StatusEffects::empty(),
            skills: template.skills.clone(),
            policy: template.policy,
            reward: Reward {
                exp: template.exp_reward,
                gold: template.gold_reward,
            },
        }
    }

    pub fn id(&self) -> &EnemyId {
        &self.id
    }

    pub fn policy(&self) -> &EnemyPolicy {
        &self.policy
    }

    pub fn reward(&self) -> Reward {
        self.reward
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn side(&self) -> Side {
        Side::Enemy
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
}
