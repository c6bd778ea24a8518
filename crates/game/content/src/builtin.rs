//! Content compiled into the binary.
//!
//! The files under `data/` are embedded with `include_str!` and parsed the
//! first time [`builtin`] is called. The resulting catalog lives for the rest
//! of the process and is shared by reference.

use std::sync::OnceLock;

use game_core::{Catalog, CombatConfig};
use tracing::info;

use crate::loaders::{ClassLoader, ConfigLoader, EnemyLoader, ItemLoader, LoadResult, SkillLoader};

const SKILLS: &str = include_str!("../data/skills.ron");
const ITEMS: &str = include_str!("../data/items.ron");
const CLASSES: &str = include_str!("../data/classes.ron");
const ENEMIES: &str = include_str!("../data/enemies.ron");
const CONFIG: &str = include_str!("../data/config.toml");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Returns the process-wide built-in catalog, parsing it on first use.
pub fn builtin() -> LoadResult<&'static Catalog> {
    if let Some(catalog) = BUILTIN.get() {
        return Ok(catalog);
    }

    let catalog = Catalog::new(
        SkillLoader::parse(SKILLS)?,
        ItemLoader::parse(ITEMS)?,
        ClassLoader::parse(CLASSES)?,
        EnemyLoader::parse(ENEMIES)?,
    )
    .map_err(|e| anyhow::anyhow!("Invalid built-in content: {}", e))?;

    info!("built-in content loaded");
    Ok(BUILTIN.get_or_init(|| catalog))
}

/// Returns the built-in combat configuration.
pub fn builtin_config() -> LoadResult<CombatConfig> {
    ConfigLoader::parse(CONFIG)
}
