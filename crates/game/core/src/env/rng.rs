//! Deterministic randomness for autonomous actors.
//!
//! Random walks draw from an [`RngOracle`] seeded by the session seed, the
//! turn nonce, the walking actor and the step index, so replaying a session
//! with the same seed reproduces every creature path.

/// Source of deterministic pseudo-random values.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform index into a collection of `len` elements.
    ///
    /// Returns `None` for an empty collection.
    fn pick_index(&self, seed: u64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_u32(seed) as usize % len)
    }
}

/// PCG-XSH-RR generator: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Mixes the session seed with per-decision context into a single seed.
///
/// * `session_seed` - seed configured for the whole session
/// * `nonce` - random-walk counter of the session
/// * `actor_id` - actor making the decision
/// * `step` - index of the decision within one walk
pub fn compute_seed(session_seed: u64, nonce: u64, actor_id: u32, step: u32) -> u64 {
    let mut hash = session_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (step as u64).wrapping_mul(0x85ebca6b);

    // SplitMix-style avalanche
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
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        let rng = PcgRng;
        for nonce in 0..200 {
            let seed = compute_seed(7, nonce, 3, 0);
            let index = rng.pick_index(seed, 3).unwrap();
            assert!(index < 3);
        }
        assert_eq!(rng.pick_index(1, 0), None);
    }

    #[test]
    fn seeds_differ_per_step() {
        assert_ne!(compute_seed(1, 0, 1, 0), compute_seed(1, 0, 1, 1));
        assert_ne!(compute_seed(1, 0, 1, 0), compute_seed(1, 0, 2, 0));
    }
}
