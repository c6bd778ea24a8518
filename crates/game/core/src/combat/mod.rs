//! Combat math.
//!
//! Pure functions with no access to session state:
//!
//! - `calculate_damage` / `scale_percent`: skill and basic attack amounts
//! - `flee_chance`: escape probability from effective speeds
//! - `initiative`: which side acts first in a round

pub mod damage;
pub mod flee;
pub mod order;

pub use damage::{BASIC_ATTACK_POWER, apply_modifier, calculate_damage, scale_percent};
pub use flee::flee_chance;
pub use order::initiative;
