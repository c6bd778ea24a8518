//! Driver configuration read from the environment.
use std::env;
use std::path::PathBuf;

use game_core::{ClassKind, EnemyId};

/// Settings for a single encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory with `skills.ron`, `items.ron`, `classes.ron`, `enemies.ron`
    /// and optionally `config.toml`. Built-in content is used when unset.
    pub data_dir: Option<PathBuf>,
    pub class: ClassKind,
    pub player_name: String,
    pub enemy: EnemyId,
    /// Session seed. Derived from the clock when unset.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            class: ClassKind::Warrior,
            player_name: "Hero".to_owned(),
            enemy: EnemyId::new("goblin_scout"),
            seed: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_DATA_DIR` - content directory (default: built-in content)
    /// - `DUNGEON_CLASS` - player class, case-insensitive (default: warrior)
    /// - `DUNGEON_PLAYER_NAME` - player name (default: Hero)
    /// - `DUNGEON_ENEMY` - enemy template id (default: goblin_scout)
    /// - `DUNGEON_SEED` - session seed (default: current time)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("DUNGEON_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(class) = read_env::<ClassKind>("DUNGEON_CLASS") {
            config.class = class;
        }
        if let Some(name) =
            read_env::<String>("DUNGEON_PLAYER_NAME").filter(|n| !n.trim().is_empty())
        {
            config.player_name = name;
        }
        if let Some(enemy) = read_env::<String>("DUNGEON_ENEMY") {
            config.enemy = EnemyId::from(enemy);
        }
        config.seed = read_env::<u64>("DUNGEON_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
