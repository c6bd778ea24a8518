//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use game_core::{
    Catalog, ClassDefinition, CombatConfig, EnemyTemplate, ItemDefinition, SkillDefinition,
};
use tracing::info;

use crate::loaders::{ClassLoader, ConfigLoader, EnemyLoader, ItemLoader, LoadResult, SkillLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── skills.ron
/// ├── items.ron
/// ├── classes.ron
/// └── enemies.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `config.toml`, or defaults when the file
    /// does not exist.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load skill definitions from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillDefinition>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load item definitions from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load class definitions from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<Vec<ClassDefinition>> {
        ClassLoader::load(&self.data_dir.join("classes.ron"))
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load every definition file and build a validated [`Catalog`].
    ///
    /// Dangling references between files surface as errors naming the
    /// missing skill or item.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let catalog = Catalog::new(
            self.load_skills()?,
            self.load_items()?,
            self.load_classes()?,
            self.load_enemies()?,
        )
        .map_err(|e| anyhow::anyhow!("Invalid content in {}: {}", self.data_dir.display(), e))?;

        info!(
            data_dir = %self.data_dir.display(),
            skills = catalog.skills().count(),
            items = catalog.items().count(),
            classes = catalog.classes().count(),
            enemies = catalog.enemies().count(),
            "content loaded"
        );
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
