//! Injectable random source
//!
//! Every random draw in the game (country sampling, shuffle decoys, facts
//! and tips) goes through `GameRng`, so a seeded instance makes a whole
//! session reproducible.

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

/// Seedable RNG shared by the session and the score screen
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: SmallRng,
    seed: Option<u64>,
}

impl GameRng {
    /// Deterministic RNG for tests and `seed = ...` configs
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// RNG seeded from the OS
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: SmallRng::from_entropy(),
            seed: None,
        }
    }

    /// Build from an optional configured seed
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed, if this RNG was seeded explicitly
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Pick `amount` distinct elements, in random order
    pub fn choose_distinct<'a, T>(&mut self, slice: &'a [T], amount: usize) -> Vec<&'a T> {
        slice.choose_multiple(&mut self.inner, amount).collect()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
