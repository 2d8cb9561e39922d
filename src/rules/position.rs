//! `chess`-crate backed position with an undo history.

use super::{notation, Rules};
use crate::error::{EngineError, Result};
use crate::types::{Board, BoardStatus, Color, File, Move, MoveGen, Piece, Rank, Square};
use std::str::FromStr;

/// A chess position that can be played forward and taken back.
///
/// `chess::Board` is an immutable value, so each applied move pushes the
/// previous board onto `history` and undo pops it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    history: Vec<Board>,
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Parse a FEN string. Each side needs exactly one king.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let invalid = || EngineError::InvalidFen(fen.to_string());
        let placement = fen.split_whitespace().next().ok_or_else(invalid)?;
        // chess::Board cannot be built without both kings
        let kings = |k: char| placement.chars().filter(|&c| c == k).count();
        if kings('K') != 1 || kings('k') != 1 {
            return Err(invalid());
        }
        Board::from_str(fen)
            .map(Self::from_board)
            .map_err(|_| EngineError::InvalidFen(fen.to_string()))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Ongoing, checkmate or stalemate, as decided by the rules engine.
    pub fn status(&self) -> BoardStatus {
        self.board.status()
    }

    pub fn is_game_over(&self) -> bool {
        self.status() != BoardStatus::Ongoing
    }

    /// Number of applied moves that can still be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Look up UCI move text (`e2e4`, `e7e8q`) among the legal moves.
    pub fn parse_move(&self, text: &str) -> Option<Move> {
        notation::parse_move(&self.board, text)
    }

    /// Parse and apply UCI move text.
    pub fn apply_uci(&mut self, text: &str) -> Result<Move> {
        let mv = self
            .parse_move(text)
            .ok_or_else(|| EngineError::IllegalMove(text.to_string()))?;
        self.apply(mv);
        Ok(mv)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn apply(&mut self, mv: Move) {
        let next = self.board.make_move_new(mv);
        self.history.push(std::mem::replace(&mut self.board, next));
    }

    fn undo(&mut self) -> Result<()> {
        self.board = self.history.pop().ok_or(EngineError::UnbalancedUndo)?;
        Ok(())
    }

    fn piece_at(&self, file: usize, rank: usize) -> Option<(Piece, Color)> {
        let sq = Square::make_square(Rank::from_index(rank), File::from_index(file));
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some((piece, color))
    }

    fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_queries() {
        let pos = Position::new();
        assert_eq!(pos.legal_moves().len(), 20);
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.piece_at(4, 0), Some((Piece::King, Color::White)));
        assert_eq!(pos.piece_at(3, 7), Some((Piece::Queen, Color::Black)));
        assert_eq!(pos.piece_at(4, 4), None);
    }

    #[test]
    fn test_apply_undo_round_trip() {
        let mut pos = Position::new();
        let before = pos.clone();

        pos.apply_uci("e2e4").unwrap();
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.piece_at(4, 3), Some((Piece::Pawn, Color::White)));
        assert_eq!(pos.piece_at(4, 1), None);

        pos.undo().unwrap();
        assert_eq!(pos, before);
    }

    #[test]
    fn test_undo_without_apply() {
        let mut pos = Position::new();
        assert_eq!(pos.undo(), Err(EngineError::UnbalancedUndo));
    }

    #[test]
    fn test_bad_inputs() {
        assert!(matches!(
            Position::from_fen("not a fen"),
            Err(EngineError::InvalidFen(_))
        ));
        let mut pos = Position::new();
        assert_eq!(
            pos.apply_uci("e2e5"),
            Err(EngineError::IllegalMove("e2e5".to_string()))
        );
        assert_eq!(pos.history_len(), 0);
    }

    #[test]
    fn test_fen_without_both_kings() {
        for fen in [
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/3k4/8/8/8/8 w - - 0 1",
            "8/8/8/3K4/8/8/8/8 b - - 0 1",
            "4k3/8/8/8/8/8/8/2K1K3 w - - 0 1",
            "",
        ] {
            assert_eq!(
                Position::from_fen(fen),
                Err(EngineError::InvalidFen(fen.to_string())),
                "{:?}",
                fen
            );
        }
        assert!(Position::from_fen("8/8/8/3k4/8/8/8/4K3 w - - 0 1").is_ok());
    }

    #[test]
    fn test_game_over_detection() {
        // Fool's mate
        let mut pos = Position::new();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            pos.apply_uci(mv).unwrap();
        }
        assert_eq!(pos.status(), BoardStatus::Checkmate);
        assert!(pos.is_game_over());
        assert!(pos.legal_moves().is_empty());
    }
}
