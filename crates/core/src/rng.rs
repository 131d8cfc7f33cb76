//! RNG module - injectable randomness for the shuffle walk
//!
//! The shuffle only ever needs a uniform pick among up to four candidate
//! moves. [`RandomSource`] abstracts that choice so tests and reproducible
//! sessions can drive the walk with a seeded generator while production
//! callers use OS-backed entropy via the `rand` crate.
//!
//! Also provides a simple LCG for deterministic testing.

use rand::RngCore;

/// Uniform source of bounded random indices
pub trait RandomSource {
    /// Generate a random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Get the current generator state (for reproducing a session)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct EntropyRng<R: RngCore>(pub R);

impl EntropyRng<rand::rngs::ThreadRng> {
    /// Entropy source backed by the thread-local generator
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl<R: RngCore> RandomSource for EntropyRng<R> {
    fn next_range(&mut self, max: u32) -> u32 {
        self.0.next_u32() % max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        // Different seeds should eventually diverge
        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in [2u32, 3, 4] {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_entropy_adapter_stays_in_bounds() {
        let mut rng = EntropyRng(StdRng::seed_from_u64(99));
        for _ in 0..200 {
            assert!(rng.next_range(4) < 4);
        }
    }

    #[test]
    fn test_entropy_adapter_is_seed_deterministic() {
        let mut a = EntropyRng(StdRng::seed_from_u64(5));
        let mut b = EntropyRng(StdRng::seed_from_u64(5));
        for _ in 0..50 {
            assert_eq!(a.next_range(4), b.next_range(4));
        }
    }
}
