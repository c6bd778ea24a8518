//! Data-driven content definitions and loaders.
//!
//! This crate houses the static combat content and provides loaders for
//! RON/TOML data files:
//! - Skill definitions (`skills.ron`)
//! - Consumable items (`items.ron`)
//! - Playable classes (`classes.ron`)
//! - Enemy templates (`enemies.ron`)
//! - Combat balance (`config.toml`)
//!
//! A copy of the default data is compiled into the crate and exposed through
//! [`builtin`], parsed once per process.
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use builtin::{builtin, builtin_config};
#[cfg(feature = "loaders")]
pub use loaders::{
    ClassLoader, ConfigLoader, ContentFactory, EnemyLoader, ItemLoader, LoadResult, SkillLoader,
};
