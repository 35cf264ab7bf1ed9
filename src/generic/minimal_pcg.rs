//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the minimal C PCG32 implementation from
//! <https://www.pcg-random.org/>, implemented to satisfy [RngCore] and
//! [SeedableRng] so anything from [rand] works on top of it.
//!
//! PCG(32) was chosen as the source of (pseudo)random numbers as it is small,
//! fast, and --- most importantly here --- trivially reproducible from a
//! recorded seed.
//! Determinism of a solve rests on the generator: for a fixed seed the
//! shuffled clause orders, the initial surveys, and every local search flip
//! are all fixed.
//!
//! A [context](crate::context::GenericContext) is parameterised to any
//! [rand::Rng], with [MinimalPCG32] fixed by the canonical
//! [Context](crate::context::Context) alias.

use rand_core::{impls, RngCore, SeedableRng};

/// State and increment.
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        // Two draws, as the core step yields 32 bits.
        let high = self.next_u32() as u64;
        let low = self.next_u32() as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Odd, and otherwise unmotivated.
        const INCREMENT: u64 = 5573589319906701683;
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = MinimalPCG32::seed_from_u64(42);
        let mut b = MinimalPCG32::seed_from_u64(42);

        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut a = MinimalPCG32::seed_from_u64(1);
        let mut b = MinimalPCG32::seed_from_u64(2);

        let a_draws: Vec<u64> = (0..16).map(|_| a.next_u64()).collect();
        let b_draws: Vec<u64> = (0..16).map(|_| b.next_u64()).collect();

        assert_ne!(a_draws, b_draws);
    }

    #[test]
    fn unit_interval_draws() {
        use rand::Rng;

        let mut rng = MinimalPCG32::seed_from_u64(7);
        for _ in 0..256 {
            let x: f64 = rng.random();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
