//! Flee chance.

use crate::config::FleeConfig;

/// Percent chance that a player with `player_speed` escapes from an enemy with
/// `enemy_speed` (both effective speeds).
///
/// ```text
/// chance = clamp(base + scale × (ps − es) / (ps + es), min, max)
/// ```
///
/// Equal speeds give `base`; a faster player gets a higher chance.
pub fn flee_chance(player_speed: u32, enemy_speed: u32, config: &FleeConfig) -> u32 {
    let ps = i64::from(player_speed);
    let es = i64::from(enemy_speed);
    let total = ps + es;

    let bonus = if total == 0 {
        0
    } else {
        i64::from(config.scale_percent) * (ps - es) / total
    };

    let chance = i64::from(config.base_percent) + bonus;
    let min = i64::from(config.min_percent);
    let max = i64::from(config.max_percent).max(min);
    u32::try_from(chance.clamp(min, max)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_speed_is_a_coin_flip() {
        assert_eq!(flee_chance(10, 10, &FleeConfig::default()), 50);
    }

    #[test]
    fn double_speed_favours_the_player() {
        assert_eq!(flee_chance(16, 8, &FleeConfig::default()), 66);
        assert_eq!(flee_chance(8, 16, &FleeConfig::default()), 34);
    }

    #[test]
    fn clamped_to_bounds() {
        let config = FleeConfig::default();
        assert_eq!(flee_chance(1000, 1, &config), 95);
        assert_eq!(flee_chance(1, 1000, &config), 10);

        let harsh = FleeConfig {
            min_percent: 40,
            ..FleeConfig::default()
        };
        assert_eq!(flee_chance(1, 1000, &harsh), 40);
    }
}
