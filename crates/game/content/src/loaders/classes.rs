//! Class definition loader.

use std::path::Path;

use game_core::ClassDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Class catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<ClassDefinition>,
}

/// Loader for playable class definitions from RON files.
pub struct ClassLoader;

impl ClassLoader {
    /// Load class definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ClassDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse class definitions from RON source.
    pub fn parse(content: &str) -> LoadResult<Vec<ClassDefinition>> {
        let catalog: ClassCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))?;

        Ok(catalog.classes)
    }
}
