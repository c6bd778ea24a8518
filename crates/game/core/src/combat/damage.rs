//! Damage and healing calculation.

/// Basic attacks hit at ×1.0.
pub const BASIC_ATTACK_POWER: u32 = 100;

/// Scales `attack` by a skill power and a stat modifier, both in percent.
///
/// # Formula
///
/// ```text
/// raw    = attack × power_percent × modifier_percent
/// amount = (raw + 5_000) / 10_000        (round half up)
/// amount = max(amount, 1)  if raw > 0
/// ```
///
/// Used for skill damage, healing, and damage-over-time amounts. The result
/// saturates at `u32::MAX`.
pub fn scale_percent(attack: u32, power_percent: u32, modifier_percent: u32) -> u32 {
    let raw = u128::from(attack) * u128::from(power_percent) * u128::from(modifier_percent);
    if raw == 0 {
        return 0;
    }
    let rounded = (raw + 5_000) / 10_000;
    u32::try_from(rounded.max(1)).unwrap_or(u32::MAX)
}

/// Damage dealt by an attacker with `attack` using a skill of `power_percent`.
///
/// `attack_modifier` is the attacker's aggregate Attack modifier; it is never
/// below the crate-wide floor, so a positive attack with positive power always
/// deals at least one point.
pub fn calculate_damage(attack: u32, power_percent: u32, attack_modifier: u32) -> u32 {
    scale_percent(attack, power_percent, attack_modifier)
}

/// Applies a percentage modifier to a stat, rounding half up.
pub fn apply_modifier(value: u32, modifier_percent: u32) -> u32 {
    let scaled = (u64::from(value) * u64::from(modifier_percent) + 50) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConfig;
    use proptest::prelude::*;

    #[test]
    fn power_strike_on_unmodified_warrior() {
        assert_eq!(calculate_damage(18, 150, 100), 27);
    }

    #[test]
    fn rounds_half_up() {
        // 15 × 1.3 = 19.5
        assert_eq!(calculate_damage(15, 130, 100), 20);
        // 14 × 1.7 = 23.8
        assert_eq!(calculate_damage(14, 170, 100), 24);
        // 12 × 1.6 × 1.3 = 24.96
        assert_eq!(calculate_damage(12, 160, 130), 25);
    }

    #[test]
    fn tiny_results_floor_at_one() {
        assert_eq!(calculate_damage(1, 10, CombatConfig::MIN_MODIFIER_PERCENT), 1);
        assert_eq!(calculate_damage(0, 150, 100), 0);
        assert_eq!(calculate_damage(18, 0, 100), 0);
    }

    #[test]
    fn modifier_rounding() {
        assert_eq!(apply_modifier(15, 100), 15);
        assert_eq!(apply_modifier(15, 70), 11);
        assert_eq!(apply_modifier(8, 130), 10);
    }

    proptest! {
        #[test]
        fn positive_inputs_always_deal_damage(
            attack in 1u32..10_000,
            power in 1u32..1_000,
            modifier in CombatConfig::MIN_MODIFIER_PERCENT..500,
        ) {
            prop_assert!(calculate_damage(attack, power, modifier) >= 1);
        }
    }
}
