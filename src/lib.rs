//! Fixed-depth chess move selection.
//!
//! Minimax with alpha-beta pruning over a position supplied by a rules
//! engine, scoring leaves with material plus positional tables.
//!
//! ```no_run
//! use skakbot::{choose_best_move, format_move, Position};
//!
//! let mut pos = Position::new();
//! let m = choose_best_move(&mut pos, 3)?;
//! println!("{}", format_move(m));
//! # Ok::<(), skakbot::EngineError>(())
//! ```

pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod types;

pub use error::{EngineError, Result};
pub use eval::{evaluate, Evaluator, Material, PieceSquare};
pub use rules::{format_move, parse_move, MoveGuard, Position, Rules};
pub use search::{random_move, SearchLimits, SearchResult, SearchStats, Searcher};
pub use types::{Depth, Move, Score};

/// Pick a move for the side to move with the default evaluator.
///
/// `depth` must be at least 1.
pub fn choose_best_move<P>(pos: &mut P, depth: i32) -> Result<P::Move>
where
    P: Rules + ?Sized,
{
    Searcher::new().choose_best_move(pos, Depth::new(depth)?)
}
