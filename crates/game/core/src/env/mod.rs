//! Read-only content and randomness.
//!
//! Definitions (skills, items, classes, enemies) are loaded once and collected
//! into a validated [`Catalog`]. Combatants refer to definitions by id and
//! never copy them. [`RngOracle`] is the single injectable source of
//! randomness for a session.
mod catalog;
mod classes;
mod enemies;
mod ids;
mod items;
mod rng;
mod skills;

pub use catalog::Catalog;
pub use classes::{ClassDefinition, ClassKind, StartingItem};
pub use enemies::{EnemyPolicy, EnemyTemplate};
pub use ids::{EnemyId, ItemId, SkillId};
pub use items::{ItemDefinition, ItemEffect};
pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};
pub use skills::{DotKind, SkillDefinition, SkillKind};
