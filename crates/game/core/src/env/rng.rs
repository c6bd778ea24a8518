//! RNG oracle for reproducible combat rolls.
//!
//! The oracle is stateless: every roll is a pure function of a 64-bit seed.
//! Sessions derive a fresh seed per roll with [`compute_seed`] from the
//! session seed, the round number, the rolling combatant, and a context tag,
//! so two sessions with the same seed and the same inputs roll identically.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Percentage check: true with probability `percent / 100`.
    fn chance(&self, seed: u64, percent: u32) -> bool {
        self.roll_d100(seed) <= percent
    }

    /// Picks an index with probability proportional to its weight.
    ///
    /// Returns `None` when all weights are zero.
    fn pick_weighted(&self, seed: u64, weights: &[u32]) -> Option<usize> {
        let total: u32 = weights.iter().copied().fold(0u32, u32::saturating_add);
        if total == 0 {
            return None;
        }
        let mut roll = self.next_u32(seed) % total;
        for (index, &weight) in weights.iter().enumerate() {
            if roll < weight {
                return Some(index);
            }
            roll -= weight;
        }
        None
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state. One LCG step from the
/// seed followed by the xorshift/rotate output permutation.
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Roll purposes within one round. Distinct tags keep rolls independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum RollContext {
    /// Enemy decides between a skill and a basic attack.
    PolicyGate = 0,
    /// Enemy picks which skill to use.
    PolicyPick = 1,
    /// Player flee attempt.
    Flee = 2,
}

/// Compute the seed for one roll.
///
/// * `session_seed` - Seed supplied when the session started
/// * `round` - Round number (starts at 1)
/// * `actor` - Index of the rolling combatant (player 0, enemy 1)
/// * `context` - Purpose of the roll
pub fn compute_seed(session_seed: u64, round: u64, actor: u32, context: RollContext) -> u64 {
    // SplitMix64 / FxHash style multipliers
    let mut hash = session_seed;
    hash ^= round.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(actor).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context as u32).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
