//! Root move selection.

use super::{minimax, SearchResult, Searcher};
use crate::error::{EngineError, Result};
use crate::eval::Evaluator;
use crate::rules::{MoveGuard, Rules};
use crate::types::{Color, Depth, Score};
use rand::seq::SliceRandom;
use rand::Rng;

/// A uniformly random legal move.
pub fn random_move<P, R>(pos: &P, rng: &mut R) -> Result<P::Move>
where
    P: Rules + ?Sized,
    R: Rng + ?Sized,
{
    pos.legal_moves()
        .choose(rng)
        .copied()
        .ok_or(EngineError::NoLegalMoves)
}

/// Full-width pass over the root moves.
///
/// Each child gets a fresh `(-ROOT_BOUND, ROOT_BOUND)` window, so the root
/// never prunes its own siblings. A random legal move is held as the
/// fallback until some move strictly beats the root bound.
pub(crate) fn search_root<P, E>(
    searcher: &mut Searcher<E>,
    pos: &mut P,
    depth: Depth,
) -> Result<SearchResult<P::Move>>
where
    P: Rules + ?Sized,
    E: Evaluator<P>,
{
    if depth.is_leaf() {
        return Err(EngineError::InvalidDepth(depth.raw()));
    }

    let moves = pos.legal_moves();
    let maximizing = pos.side_to_move() == Color::White;

    let fallback = *moves
        .choose(&mut searcher.rng)
        .ok_or(EngineError::NoLegalMoves)?;
    let mut best_move = fallback;
    let mut best_score = Score::root_worst_for(maximizing);
    let mut improved = false;

    searcher.inc_nodes();

    for (i, &m) in moves.iter().enumerate() {
        let mut child = MoveGuard::apply(pos, m);
        let result = minimax::search(
            searcher,
            &mut *child,
            depth.child(),
            -Score::ROOT_BOUND,
            Score::ROOT_BOUND,
            !maximizing,
        )?;
        child.undo()?;

        log::debug!(
            "[{}/{}] {:?} scored {}",
            i + 1,
            moves.len(),
            m,
            result.score
        );

        if result.score.improves_on(best_score, maximizing) {
            best_score = result.score;
            best_move = m;
            improved = true;
        }
    }

    if !improved {
        log::warn!("no root move beat the root bound, playing fallback {:?}", fallback);
    }

    log::debug!(
        "depth {} best {:?} {} ({} nodes, {} leaves, {} cutoffs)",
        depth,
        best_move,
        best_score,
        searcher.stats.nodes,
        searcher.stats.leaves,
        searcher.stats.cutoffs
    );

    Ok(SearchResult {
        best_move: Some(best_move),
        score: best_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{format_move, Position};
    use crate::search::SearchLimits;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_move_is_legal() {
        let pos = Position::new();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let m = random_move(&pos, &mut rng).unwrap();
            assert!(pos.legal_moves().contains(&m));
        }
    }

    #[test]
    fn test_random_move_without_moves() {
        let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_move(&pos, &mut rng), Err(EngineError::NoLegalMoves));
    }

    #[test]
    fn test_root_depth_zero_rejected() {
        let mut searcher = Searcher::new();
        let mut pos = Position::new();
        assert_eq!(
            search_root(&mut searcher, &mut pos, Depth::ZERO),
            Err(EngineError::InvalidDepth(0))
        );
    }

    #[test]
    fn test_black_minimizes() {
        // Black can take a loose white queen on d4
        let mut pos = Position::from_fen("4k3/8/8/3r4/3Q4/8/8/4K3 b - - 0 1").unwrap();
        let mut searcher = Searcher::new().with_limits(SearchLimits::new().with_seed(3));
        let result = search_root(&mut searcher, &mut pos, Depth::ONE).unwrap();
        assert_eq!(result.best_move.map(format_move).as_deref(), Some("d5d4"));
        assert!(result.score < Score::ZERO);
    }
}
