//! Deterministic random number generation for deck shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deck orders
//! - **Context streams**: Each deck shuffles from its own stream, so adding a
//!   shuffle to one deck never perturbs the order of another
//!
//! ```
//! use pandemic_rules::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut infection = rng.for_context("infection");
//! let mut player = rng.for_context("player");
//!
//! let mut a: Vec<u32> = (0..48).collect();
//! let mut b = a.clone();
//! infection.shuffle(&mut a);
//! player.shuffle(&mut b);
//! assert_ne!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seedable RNG injected into every deck build and shuffle.
///
/// Uses ChaCha8 so the same seed gives the same decks on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform in-place permutation (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
