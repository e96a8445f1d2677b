//! Random number generators.
//!
//! Wraps the `rand_mt` Mersenne Twister so it can drive any `rand_distr`
//! distribution while remaining bit-for-bit reproducible from a seed.

use rand::RngCore;
use rand_mt::Mt19937GenRand64;

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
///
/// Two generators built from the same seed produce identical streams.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
    seed: u64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
            seed,
        }
    }

    /// Create a generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for MersenneTwisterUniformRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwisterUniformRng")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl RngCore for MersenneTwisterUniformRng {
    fn next_u32(&mut self) -> u32 {
        (self.rng.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.rng.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// A fresh seed drawn from the thread-local entropy-seeded generator.
pub fn entropy_seed() -> u64 {
    rand::random()
}
