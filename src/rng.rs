//! Random index selection for ticks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices in `0..len`.
pub trait RandomIndex {
    /// `len` is never zero when called by the game.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<F> RandomIndex for F
where
    F: FnMut(usize) -> usize,
{
    fn next_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Small fast generator seeded from the platform entropy source
/// (`crypto.getRandomValues` in the browser).
#[derive(Clone, Debug)]
pub struct EntropyRng {
    inner: SmallRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self { inner: SmallRng::from_entropy() }
    }

    /// Reproducible sequence, for tests and replays.
    pub fn from_seed(seed: u64) -> Self {
        Self { inner: SmallRng::seed_from_u64(seed) }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomIndex for EntropyRng {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }
}
