//! Board evaluation module.
//!
//! Leaf scores for the search, always from White's point of view. The
//! search is generic over [`Evaluator`]; [`PieceSquare`] is the default
//! and [`Material`] is the plain material count.

pub mod tables;

use crate::rules::Rules;
use crate::types::{piece_value, Color, Piece, Score, Value};

/// Static evaluation of a position.
pub trait Evaluator<P: ?Sized> {
    fn evaluate(&self, pos: &P) -> Score;
}

/// Material plus positional tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceSquare;

/// Material only. The king counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Material;

impl<P: Rules + ?Sized> Evaluator<P> for PieceSquare {
    fn evaluate(&self, pos: &P) -> Score {
        evaluate(pos)
    }
}

impl<P: Rules + ?Sized> Evaluator<P> for Material {
    fn evaluate(&self, pos: &P) -> Score {
        sum_over_board(pos, |piece, _, _| match piece {
            Piece::King => 0,
            _ => piece_value(piece),
        })
    }
}

/// Evaluate the position with material and positional tables.
pub fn evaluate<P: Rules + ?Sized>(pos: &P) -> Score {
    sum_over_board(pos, |piece, file, rank| {
        piece_value(piece) + tables::positional_bonus(piece, file, rank)
    })
}

/// Add `value` for each White piece and subtract it for each Black piece.
fn sum_over_board<P, F>(pos: &P, value: F) -> Score
where
    P: Rules + ?Sized,
    F: Fn(Piece, usize, usize) -> Value,
{
    let mut score = Score::ZERO;
    for file in 0..8 {
        for rank in 0..8 {
            if let Some((piece, color)) = pos.piece_at(file, rank) {
                let v = value(piece, file, rank);
                match color {
                    Color::White => score += v,
                    Color::Black => score -= v,
                }
            }
        }
    }
    score
}
