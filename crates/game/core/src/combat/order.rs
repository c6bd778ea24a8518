//! Turn order within a round.

use crate::state::Side;

/// Which side acts first. Strictly higher effective speed goes first; ties go
/// to the player.
pub fn initiative(player_speed: u32, enemy_speed: u32) -> [Side; 2] {
    if enemy_speed > player_speed {
        [Side::Enemy, Side::Player]
    } else {
        [Side::Player, Side::Enemy]
    }
}
