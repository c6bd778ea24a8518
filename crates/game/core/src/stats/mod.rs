//! Stat system.
//!
//! ```text
//! [ BaseStats ]  (content: class / enemy definitions)
//!      ↓
//! [ StatBlock ]  (runtime: HP/MP meters, attack, speed, level, exp)
//!      ↓
//! [ StatusEffects::aggregate_modifier ]  (effective attack / speed)
//! ```
//!
//! Resource pools never leave `[0, max]`; every mutation reports the clamped
//! delta so combat logs show exact numbers.

pub mod block;
pub mod progression;
pub mod resources;

pub use block::{BaseStats, StatBlock, StatKind};
pub use progression::{StatGrowth, experience_threshold};
pub use resources::{ResourceKind, ResourceMeter};
