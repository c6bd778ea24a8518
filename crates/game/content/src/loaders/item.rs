//! Item catalog loader.

use std::path::Path;

use game_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    ///
    /// # Returns
    ///
    /// Returns a Vec of ItemDefinitions.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse an item catalog from RON source.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ItemEffect;

    #[test]
    fn max_stack_defaults_when_omitted() {
        let items = ItemLoader::parse(
            r#"(items: [(id: "elixir", name: "Elixir", effect: RestoreMp(99))])"#,
        )
        .unwrap();
        assert_eq!(items[0].effect, ItemEffect::RestoreMp(99));
        assert_eq!(items[0].max_stack, ItemDefinition::DEFAULT_MAX_STACK);
        assert!(items[0].description.is_empty());
    }
}
