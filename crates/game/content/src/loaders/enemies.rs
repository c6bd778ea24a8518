//! Enemy template loader.

use std::path::Path;

use game_core::EnemyTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load enemy templates from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse enemy templates from RON source.
    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        Ok(catalog.enemies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::EnemyPolicy;

    #[test]
    fn omitted_policy_fields_use_defaults() {
        let enemies = EnemyLoader::parse(
            r#"(
                enemies: [
                    (
                        id: "rat",
                        name: "Rat",
                        base: (max_hp: 10, max_mp: 0, attack: 3, speed: 9),
                        policy: (skill_chance_percent: 10),
                        exp_reward: 5,
                        gold_reward: 1,
                    ),
                ],
            )"#,
        )
        .unwrap();

        let rat = &enemies[0];
        assert!(rat.skills.is_empty());
        assert_eq!(rat.base.level, 1);
        assert_eq!(
            rat.policy,
            EnemyPolicy {
                skill_chance_percent: 10,
                ..EnemyPolicy::default()
            }
        );
    }
}
