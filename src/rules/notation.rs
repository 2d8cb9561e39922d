//! UCI-style move text (`e2e4`, `e7e8q`).

use crate::types::{Board, Move, MoveGen, Piece, Square};
use std::str::FromStr;

/// Parse a move string into the matching legal move on `board`.
pub fn parse_move(board: &Board, move_str: &str) -> Option<Move> {
    let move_str = move_str.trim();
    if move_str.len() < 4 || move_str.len() > 5 || !move_str.is_ascii() {
        return None;
    }

    let from = Square::from_str(&move_str[0..2]).ok()?;
    let to = Square::from_str(&move_str[2..4]).ok()?;

    let promo = match move_str[4..].chars().next() {
        None => None,
        Some('q' | 'Q') => Some(Piece::Queen),
        Some('r' | 'R') => Some(Piece::Rook),
        Some('b' | 'B') => Some(Piece::Bishop),
        Some('n' | 'N') => Some(Piece::Knight),
        Some(_) => return None,
    };

    MoveGen::new_legal(board).find(|m| {
        m.get_source() == from && m.get_dest() == to && m.get_promotion() == promo
    })
}

/// Format a move to UCI notation.
pub fn format_move(m: Move) -> String {
    let mut s = format!("{}{}", m.get_source(), m.get_dest());
    if let Some(promo) = m.get_promotion() {
        s.push(match promo {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            Piece::Pawn => 'p',
            Piece::King => 'k',
        });
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let board = Board::default();
        let m = parse_move(&board, "g1f3").unwrap();
        assert_eq!(m.get_source(), Square::G1);
        assert_eq!(format_move(m), "g1f3");
        assert!(parse_move(&board, "g1g3").is_none());
        assert!(parse_move(&board, "zz").is_none());
    }

    #[test]
    fn test_promotion() {
        let board = Board::from_str("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        let m = parse_move(&board, "e7e8n").unwrap();
        assert_eq!(m.get_promotion(), Some(Piece::Knight));
        assert_eq!(format_move(m), "e7e8n");
        // a bare pawn push to the last rank needs a promotion piece
        assert!(parse_move(&board, "e7e8").is_none());
    }
}
