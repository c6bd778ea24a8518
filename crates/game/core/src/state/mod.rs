//! Runtime combat state.
//!
//! - [`StatusEffects`]: timed modifiers attached to a combatant
//! - [`Inventory`]: stacked consumables held by the player
//! - [`Combatant`]: capability interface implemented by [`Player`] and [`Enemy`]

pub mod combatant;
pub mod enemy;
pub mod inventory;
pub mod player;
pub mod status;

pub use combatant::{Combatant, Side};
pub use enemy::{Enemy, Reward};
pub use inventory::{Inventory, InventorySlot};
pub use player::Player;
pub use status::{AddOutcome, StatusEffect, StatusEffectKind, StatusEffects, StatusTick};
