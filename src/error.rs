//! Error types for the move-selection engine.

use thiserror::Error;

/// Errors surfaced to callers of the search and the rules boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The position has no legal moves; the game is already over.
    #[error("no legal moves in this position")]
    NoLegalMoves,

    /// A search depth outside the accepted range.
    #[error("invalid search depth {0}")]
    InvalidDepth(i32),

    /// `undo` was called with no applied move left to revert.
    #[error("undo without a matching apply")]
    UnbalancedUndo,

    /// The FEN string could not be turned into a position.
    #[error("invalid FEN '{0}'")]
    InvalidFen(String),

    /// The move text does not name a legal move in the position.
    #[error("illegal move '{0}'")]
    IllegalMove(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
