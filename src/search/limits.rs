//! Search configuration.
//!
//! Only fixed-depth search exists. The random source used for the root
//! fallback move can be pinned with a seed for reproducible runs.

use crate::error::Result;
use crate::types::Depth;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default lookahead in plies
pub const DEFAULT_DEPTH: i32 = Depth::DEFAULT.raw();

/// Search limits configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLimits {
    /// Plies searched by [`Searcher::best_move`](super::Searcher::best_move)
    pub depth: Depth,
    /// Cut off siblings once `alpha >= beta`. Disabling this runs plain minimax.
    pub pruning: bool,
    /// Seed for the fallback move RNG, entropy when `None`
    pub seed: Option<u64>,
}

impl SearchLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed depth search. Fails on a negative depth.
    pub fn depth(depth: i32) -> Result<Self> {
        Ok(Self {
            depth: Depth::new(depth)?,
            ..Default::default()
        })
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: Depth::DEFAULT,
            pruning: true,
            seed: None,
        }
    }
}
