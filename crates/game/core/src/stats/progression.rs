//! Experience thresholds and per-level stat growth.
//!
//! Formula: `threshold(level) = floor(base × level^1.5)`, evaluated exactly
//! as `isqrt(base² × level³)` so no floating point is involved.

/// Fixed stat increase applied on every level up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatGrowth {
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub speed: u32,
}

impl StatGrowth {
    pub const fn new(max_hp: u32, max_mp: u32, attack: u32, speed: u32) -> Self {
        Self {
            max_hp,
            max_mp,
            attack,
            speed,
        }
    }
}

/// Experience required to advance from `level` to `level + 1`.
pub fn experience_threshold(base: u32, level: u32) -> u32 {
    let base = u128::from(base);
    let level = u128::from(level.max(1));
    let Some(square) = (base * base)
        .checked_mul(level)
        .and_then(|v| v.checked_mul(level))
        .and_then(|v| v.checked_mul(level))
    else {
        return u32::MAX;
    };
    u32::try_from(integer_sqrt(square)).unwrap_or(u32::MAX)
}

/// Integer square root (largest `x` with `x * x <= n`).
fn integer_sqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_follow_level_to_the_one_and_a_half() {
        assert_eq!(experience_threshold(100, 1), 100);
        // 100 × 2^1.5 = 282.84
        assert_eq!(experience_threshold(100, 2), 282);
        // 100 × 3^1.5 = 519.61
        assert_eq!(experience_threshold(100, 3), 519);
        // 100 × 4^1.5 = 800
        assert_eq!(experience_threshold(100, 4), 800);
    }

    #[test]
    fn thresholds_are_monotonic() {
        let mut previous = 0;
        for level in 1..100 {
            let threshold = experience_threshold(100, level);
            assert!(threshold > previous);
            previous = threshold;
        }
    }

    #[test]
    fn integer_sqrt_exact_squares() {
        for n in 0u128..1_000 {
            let root = integer_sqrt(n * n);
            assert_eq!(root, n);
        }
        assert_eq!(integer_sqrt(80), 8);
    }
}
