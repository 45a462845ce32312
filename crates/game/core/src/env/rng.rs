//! Deterministic random numbers for upgrade offers.
//!
//! Offers draw from a stateless generator keyed by a seed derived from the run
//! seed and an offer nonce. Replaying a run with the same seed reproduces the
//! same offers in the same order.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random u64 from two outputs of the same seed stream.
    fn next_u64(&self, seed: u64) -> u64 {
        let high = self.next_u32(seed) as u64;
        let low = self.next_u32(seed ^ 0x9e37_79b9_7f4a_7c15) as u64;
        (high << 32) | low
    }

    /// Value in `0..bound` by widening multiply. `bound` must be non-zero.
    ///
    /// Every value is reachable and the bias is below `bound / 2^64`.
    fn below(&self, seed: u64, bound: u64) -> u64 {
        ((self.next_u64(seed) as u128 * bound as u128) >> 64) as u64
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&self, seed: u64, len: usize) -> usize {
        self.below(seed, len as u64) as usize
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = (max - min) as u64 + 1;
        min + self.below(seed, span) as u32
    }
}

/// PCG-XSH-RR generator: 64-bit LCG state, 32-bit permuted output.
///
/// See <https://www.pcg-random.org/>.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = state * multiplier + increment (mod 2^64)`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
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

/// Derives the seed for one random draw.
///
/// * `run_seed` - fixed for the whole run
/// * `nonce` - offer sequence number, advanced once per offer
/// * `context` - draw index within one offer
pub fn compute_seed(run_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64-style mixing.
    let mut hash = run_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_value() {
        let rng = PcgRng;
        let seed = compute_seed(42, 3, 1);
        assert_eq!(rng.next_u32(seed), rng.next_u32(seed));
    }

    #[test]
    fn context_changes_seed() {
        assert_ne!(compute_seed(42, 3, 0), compute_seed(42, 3, 1));
        assert_ne!(compute_seed(42, 3, 0), compute_seed(42, 4, 0));
    }

    #[test]
    fn index_in_bounds() {
        let rng = PcgRng;
        for context in 0..64 {
            assert!(rng.index(compute_seed(7, 0, context), 5) < 5);
        }
        assert_eq!(rng.range(1, 4, 4), 4);
        assert!((10..=20).contains(&rng.range(3, 10, 20)));
    }

    #[test]
    fn below_reaches_past_u32() {
        let rng = PcgRng;
        let bound = 1u64 << 40;
        let high = (0..64)
            .map(|context| rng.below(compute_seed(11, 0, context), bound))
            .inspect(|value| assert!(*value < bound))
            .filter(|value| *value > u32::MAX as u64)
            .count();
        assert!(high > 0, "no draw landed above 2^32");
    }

    #[test]
    fn small_bounds_are_roughly_uniform() {
        let rng = PcgRng;
        let mut counts = [0u32; 3];
        for context in 0..3000 {
            counts[rng.index(compute_seed(5, 1, context), 3)] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "skewed counts {counts:?}");
        }
    }
}
