//! Search module for the engine.
//!
//! # Architecture
//! - `Searcher`: search controller holding the evaluator, limits, stats and
//!   the fallback RNG
//! - `minimax`: recursive minimax with alpha-beta pruning
//! - `root`: best-move selection at the root
//! - `limits`: search configuration

mod limits;
mod minimax;
mod root;

pub use limits::{SearchLimits, DEFAULT_DEPTH};
pub use root::random_move;

use crate::error::{EngineError, Result};
use crate::eval::{Evaluator, PieceSquare};
use crate::rules::Rules;
use crate::types::{Depth, NodeCount, Score};
use rand::rngs::StdRng;

/// Search statistics collected during search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root and leaves included
    pub nodes: NodeCount,
    /// Static evaluations
    pub leaves: NodeCount,
    /// Nodes that stopped early on `alpha >= beta`
    pub cutoffs: NodeCount,
}

/// Result from a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// `None` at the horizon and at nodes with no legal moves
    pub best_move: Option<M>,
    pub score: Score,
}

impl<M> SearchResult<M> {
    fn leaf(score: Score) -> Self {
        Self {
            best_move: None,
            score,
        }
    }
}

/// Main search controller
pub struct Searcher<E = PieceSquare> {
    evaluator: E,
    limits: SearchLimits,
    stats: SearchStats,
    rng: StdRng,
}

impl Searcher<PieceSquare> {
    pub fn new() -> Self {
        Self::with_evaluator(PieceSquare)
    }
}

impl Default for Searcher<PieceSquare> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Searcher<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        let limits = SearchLimits::default();
        Self {
            evaluator,
            rng: limits.rng(),
            limits,
            stats: SearchStats::default(),
        }
    }

    /// Replace the limits. Reseeds the fallback RNG.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.rng = limits.rng();
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Statistics of the last search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Alpha-beta search of `pos` to `depth` plies with the given window.
    ///
    /// Returns the node score and, unless `depth` is zero or there is no
    /// legal move, the first move reaching it.
    pub fn search<P>(
        &mut self,
        pos: &mut P,
        depth: Depth,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Result<SearchResult<P::Move>>
    where
        P: Rules + ?Sized,
        E: Evaluator<P>,
    {
        self.stats = SearchStats::default();
        minimax::search(self, pos, depth, alpha, beta, maximizing)
    }

    /// Best move and its score for the side to move.
    pub fn search_root<P>(&mut self, pos: &mut P, depth: Depth) -> Result<SearchResult<P::Move>>
    where
        P: Rules + ?Sized,
        E: Evaluator<P>,
    {
        self.stats = SearchStats::default();
        root::search_root(self, pos, depth)
    }

    /// Best move for the side to move, looking `depth` plies ahead.
    ///
    /// Fails with `NoLegalMoves` when the game is over and with
    /// `InvalidDepth` for depth zero.
    pub fn choose_best_move<P>(&mut self, pos: &mut P, depth: Depth) -> Result<P::Move>
    where
        P: Rules + ?Sized,
        E: Evaluator<P>,
    {
        self.search_root(pos, depth)?
            .best_move
            .ok_or(EngineError::NoLegalMoves)
    }

    /// [`Searcher::choose_best_move`] at the configured depth.
    pub fn best_move<P>(&mut self, pos: &mut P) -> Result<P::Move>
    where
        P: Rules + ?Sized,
        E: Evaluator<P>,
    {
        let depth = self.limits.depth;
        self.choose_best_move(pos, depth)
    }

    #[inline]
    fn inc_nodes(&mut self) {
        self.stats.nodes += 1;
    }

    #[inline]
    fn inc_leaves(&mut self) {
        self.stats.leaves += 1;
    }

    #[inline]
    fn inc_cutoffs(&mut self) {
        self.stats.cutoffs += 1;
    }
}
