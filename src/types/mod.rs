//! Core types for the engine.
//!
//! Board and move types come from the `chess` crate and are re-exported
//! here as the canonical names. Engine-specific types (Score, Depth)
//! live alongside them.

mod depth;
mod score;

pub use depth::{Depth, MAX_DEPTH};
pub use score::{Score, SCORE_NODE_SENTINEL, SCORE_ROOT_BOUND};

// Re-export chess crate types as canonical types
pub use chess::{
    Board, BoardStatus, ChessMove as Move, Color, File, MoveGen, Piece, Rank, Square,
};

/// Node count type
pub type NodeCount = u64;

/// Centipawn value type (for piece values, etc.)
pub type Value = i32;

// Piece values in centipawns
pub const PAWN_VALUE: Value = 100;
pub const KNIGHT_VALUE: Value = 320;
pub const BISHOP_VALUE: Value = 330;
pub const ROOK_VALUE: Value = 500;
pub const QUEEN_VALUE: Value = 900;
pub const KING_VALUE: Value = 20000; // sentinel weight, not a mate score

/// Get the material value of a piece in centipawns
#[inline]
pub const fn piece_value(piece: Piece) -> Value {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}
