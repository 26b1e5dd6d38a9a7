//! Deterministic shuffling for deals.
//!
//! Every deal draws from one ChaCha8 stream. Two controllers built from the
//! same seed deal the same sequence of layouts, and a captured
//! `GameRngState` replays the deals that follow it.
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut rng1 = GameRng::new(7);
//! let mut rng2 = GameRng::new(7);
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6];
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//!
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Shuffle source owned by the controller.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread-local generator, for real play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform in-place permutation (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Position in the stream, for replaying later deals.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Seed plus ChaCha8 word position. Constant size however many deals ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
