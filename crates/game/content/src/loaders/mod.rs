//! Content loaders for reading game data from files.
//!
//! Each loader parses one file kind into game-core definitions. Loaders accept
//! either a path or the file contents, so embedded data goes through the same
//! code as files on disk.

pub mod classes;
pub mod config;
pub mod enemies;
pub mod factory;
pub mod item;
pub mod skills;

pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use skills::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
