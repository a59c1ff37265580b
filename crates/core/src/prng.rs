//! Deterministic PRNG based on the Xorshift32 algorithm.
//!
//! The shape pipeline keys everything off 32-bit seeds (name hashes and
//! per-vertex sub-seeds), so the generator state is 32 bits as well. Same
//! seed always produces the same sequence across all platforms — pure
//! integer arithmetic in the core algorithm.

use serde::{Deserialize, Serialize};

/// Xorshift32 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift triple (13, 17, 5). Seed of 0 is automatically
/// replaced with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Fallback seed used when the caller provides 0, which is a fixed point
    /// of the xorshift algorithm.
    const FALLBACK_SEED: u32 = 0x5EED_CAFE;

    /// Creates a new PRNG with the given seed.
    ///
    /// If `seed` is 0, uses `0x5EED_CAFE` as a fallback to avoid the
    /// xorshift all-zeros fixed point.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 32-bit value.
    ///
    /// Implements xorshift32 with shifts (13, 17, 5).
    pub fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Returns a uniformly distributed f32 in [0, 1).
    ///
    /// Uses the upper 24 bits of `next_u32()` divided by 2^24 so every
    /// value is exactly representable in an f32 mantissa.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Returns a uniformly distributed f32 in [-1, 1).
    ///
    /// The displacement pipeline draws exactly one of these per vertex.
    pub fn next_signed_unit(&mut self) -> f32 {
        self.next_f32() * 2.0 - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Test 1: Golden value --

    #[test]
    fn next_u32_produces_known_golden_value_for_seed_42() {
        // Golden value for xorshift32(seed=42, shifts=13,17,5).
        // If this test breaks, the PRNG algorithm changed and every body
        // shape derived from a stored seed is invalidated.
        let mut rng = Xorshift32::new(42);
        assert_eq!(rng.next_u32(), 11_355_432);
    }

    // -- Test 2: Seed=0 guard --

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift32::new(0);
        // If seed=0 were used directly, xorshift would return 0 forever.
        let first = rng.next_u32();
        assert_ne!(first, 0, "seed=0 guard failed: first value is 0");
        assert_ne!(rng.next_u32(), 0);
        assert_ne!(rng.next_u32(), 0);
    }

    // -- Test 3: Determinism --

    #[test]
    fn two_instances_with_same_seed_produce_identical_sequences() {
        let mut rng_a = Xorshift32::new(0xDEAD_BEEF);
        let mut rng_b = Xorshift32::new(0xDEAD_BEEF);
        for i in 0..1000 {
            assert_eq!(
                rng_a.next_u32(),
                rng_b.next_u32(),
                "sequences diverged at index {i}"
            );
        }
    }

    // -- Test 4: next_f32 range --

    #[test]
    fn next_f32_always_in_unit_interval() {
        let mut rng = Xorshift32::new(12345);
        for i in 0..10_000 {
            let v = rng.next_f32();
            assert!(
                (0.0..1.0).contains(&v),
                "next_f32() = {v} out of [0, 1) at iteration {i}"
            );
        }
    }

    // -- Test 5: next_signed_unit range --

    #[test]
    fn next_signed_unit_stays_within_closed_unit_interval() {
        let mut rng = Xorshift32::new(9999);
        for i in 0..10_000 {
            let v = rng.next_signed_unit();
            assert!(
                (-1.0..=1.0).contains(&v),
                "next_signed_unit() = {v} out of [-1, 1] at iteration {i}"
            );
        }
    }

    // -- Serialization roundtrip --

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = Xorshift32::new(42);
        for _ in 0..50 {
            rng.next_u32();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift32 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(
                rng.next_u32(),
                restored.next_u32(),
                "sequences diverged after deserialization at index {i}"
            );
        }
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // -- Test 6: next_f32 in range for any seed --

            #[test]
            fn next_f32_in_unit_interval_for_any_seed(seed: u32) {
                let mut rng = Xorshift32::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f32();
                    prop_assert!(
                        (0.0..1.0).contains(&v),
                        "next_f32() = {v} out of [0, 1) for seed {seed}"
                    );
                }
            }

            // -- Test 7: next_signed_unit in range for any seed --

            #[test]
            fn next_signed_unit_in_range_for_any_seed(seed: u32) {
                let mut rng = Xorshift32::new(seed);
                for _ in 0..100 {
                    let v = rng.next_signed_unit();
                    prop_assert!(
                        (-1.0..=1.0).contains(&v),
                        "next_signed_unit() = {v} out of [-1, 1] for seed {seed}"
                    );
                }
            }

            // -- Test 8: Approximate uniformity bucket test --

            #[test]
            fn next_f32_approximate_uniformity(seed: u32) {
                let mut rng = Xorshift32::new(seed);
                let mut buckets = [0u32; 10];
                for _ in 0..10_000 {
                    let v = rng.next_f32();
                    let idx = ((v * 10.0).min(9.0)) as usize;
                    buckets[idx] += 1;
                }
                // Very loose bound (expected ~1000 each) to avoid flakes.
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(
                        count >= 500,
                        "bucket {i} has only {count} values (expected ~1000) for seed {seed}"
                    );
                }
            }
        }
    }
}
