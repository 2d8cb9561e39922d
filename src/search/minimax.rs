//! Minimax with alpha-beta pruning.
//!
//! Scores are White-relative throughout, so the side to move alternates
//! between maximizing and minimizing instead of negating (no negamax).

use super::{SearchResult, Searcher};
use crate::error::Result;
use crate::eval::Evaluator;
use crate::rules::{MoveGuard, Rules};
use crate::types::{Depth, Score};

/// Recursive search of `pos` to `depth` plies.
///
/// Every move is applied through a [`MoveGuard`], so `pos` is back in its
/// entry state when this returns, on the error path as well.
pub(crate) fn search<P, E>(
    searcher: &mut Searcher<E>,
    pos: &mut P,
    depth: Depth,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
) -> Result<SearchResult<P::Move>>
where
    P: Rules + ?Sized,
    E: Evaluator<P>,
{
    searcher.inc_nodes();

    if depth.is_leaf() {
        searcher.inc_leaves();
        return Ok(SearchResult::leaf(searcher.evaluator.evaluate(pos)));
    }

    // A node without legal moves keeps the sentinel: mate and stalemate
    // are not scored here.
    let mut best_score = Score::worst_for(maximizing);
    let mut best_move = None;

    for m in pos.legal_moves() {
        let mut child = MoveGuard::apply(pos, m);
        let result = search(searcher, &mut *child, depth.child(), alpha, beta, !maximizing)?;
        child.undo()?;

        if result.score.improves_on(best_score, maximizing) {
            best_score = result.score;
            best_move = Some(m);
        }

        if maximizing {
            alpha = alpha.max(best_score);
        } else {
            beta = beta.min(best_score);
        }

        if searcher.limits.pruning && alpha >= beta {
            searcher.inc_cutoffs();
            log::trace!(
                "cutoff at depth {} after {:?} (alpha {}, beta {})",
                depth,
                m,
                alpha.raw(),
                beta.raw()
            );
            break;
        }
    }

    Ok(SearchResult {
        best_move,
        score: best_score,
    })
}
