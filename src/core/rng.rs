//! Random sources for tile spawning.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine draws through the `TileRng` trait
//! - **Deterministic**: `GameRng` with the same seed spawns the same tiles
//! - **Replayable**: O(1) state capture and restore via `GameRngState`
//! - **Scripted**: `ScriptedRng` replays fixed draws to pin spawn branches
//!
//! ## Usage
//!
//! ```
//! use chroma_2048::core::{GameRng, TileRng};
//!
//! let mut rng = GameRng::new(42);
//! let checkpoint = rng.state();
//!
//! let first: Vec<_> = (0..5).map(|_| rng.pick(16)).collect();
//!
//! let mut replay = GameRng::from_state(&checkpoint);
//! let again: Vec<_> = (0..5).map(|_| replay.pick(16)).collect();
//! assert_eq!(first, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Uniform draws used by the spawn policy.
pub trait TileRng {
    /// Uniform index in `0..upper`. Callers never pass `upper == 0`.
    fn pick(&mut self, upper: usize) -> usize;

    /// Uniform two-way draw.
    fn coin(&mut self) -> bool {
        self.pick(2) == 1
    }
}

/// Seeded ChaCha8 source.
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

    /// Seed from the process-wide thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for replay.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a captured state.
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

impl TileRng for GameRng {
    fn pick(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// Captured `GameRng` position.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of draws.
///
/// Each `pick(upper)` returns the next scripted value reduced modulo
/// `upper`. Once the script runs out every draw returns 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    draws: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Append more draws to the script.
    pub fn push(&mut self, draws: impl IntoIterator<Item = usize>) {
        self.draws.extend(draws);
    }

    /// Draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl TileRng for ScriptedRng {
    fn pick(&mut self, upper: usize) -> usize {
        self.draws.pop_front().map_or(0, |d| d % upper)
    }
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn pick(&mut self, upper: usize) -> usize {
        (**self).pick(upper)
    }
}
