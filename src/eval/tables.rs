//! Positional tables.
//!
//! Each table is indexed `[file][rank]` with absolute coordinates (file a = 0,
//! rank 1 = 0), so every row below is one file. The same table is used for
//! both colours; Black's squares are not mirrored.

use crate::types::Piece;

pub type Table = [[i32; 8]; 8];

#[rustfmt::skip]
pub const PAWN_TABLE: Table = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [ 50, 50, 50, 50, 50, 50, 50, 50],
    [ 10, 10, 20, 30, 30, 20, 10, 10],
    [  5,  5, 10, 25, 25, 10,  5,  5],
    [  0,  0,  0, 20, 20,  0,  0,  0],
    [  5, -5,-10,  0,  0,-10, -5,  5],
    [  5, 10, 10,-20,-20, 10, 10,  5],
    [  0,  0,  0,  0,  0,  0,  0,  0],
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: Table = [
    [-50,-40,-30,-30,-30,-30,-40,-50],
    [-40,-20,  0,  0,  0,  0,-20,-40],
    [-30,  0, 10, 15, 15, 10,  0,-30],
    [-30,  5, 15, 20, 20, 15,  5,-30],
    [-30,  0, 15, 20, 20, 15,  0,-30],
    [-30,  5, 10, 15, 15, 10,  5,-30],
    [-40,-20,  0,  5,  5,  0,-20,-40],
    [-50,-40,-30,-30,-30,-30,-40,-50],
];

#[rustfmt::skip]
pub const BISHOP_TABLE: Table = [
    [-20,-10,-10,-10,-10,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5, 10, 10,  5,  0,-10],
    [-10,  5,  5, 10, 10,  5,  5,-10],
    [-10,  0, 10, 10, 10, 10,  0,-10],
    [-10, 10, 10, 10, 10, 10, 10,-10],
    [-10,  5,  0,  0,  0,  0,  5,-10],
    [-20,-10,-10,-10,-10,-10,-10,-20],
];

#[rustfmt::skip]
pub const ROOK_TABLE: Table = [
    [  0,  0,  0,  0,  0,  0,  0,  0],
    [  5, 10, 10, 10, 10, 10, 10,  5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [ -5,  0,  0,  0,  0,  0,  0, -5],
    [  0,  0,  0,  5,  5,  0,  0,  0],
];

// Files e, f and g are the only rows in any table that are not palindromes.
#[rustfmt::skip]
pub const QUEEN_TABLE: Table = [
    [-20,-10,-10, -5, -5,-10,-10,-20],
    [-10,  0,  0,  0,  0,  0,  0,-10],
    [-10,  0,  5,  5,  5,  5,  0,-10],
    [ -5,  0,  5,  5,  5,  5,  0, -5],
    [  0,  0,  5,  5,  5,  5,  0, -5],
    [-10,  5,  5,  5,  5,  5,  0,-10],
    [-10,  0,  5,  0,  0,  0,  0,-10],
    [-20,-10,-10, -5, -5,-10,-10,-20],
];

#[rustfmt::skip]
pub const KING_TABLE: Table = [
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-30,-40,-40,-50,-50,-40,-40,-30],
    [-20,-30,-30,-40,-40,-30,-30,-20],
    [-10,-20,-20,-20,-20,-20,-20,-10],
    [ 20, 20,  0,  0,  0,  0, 20, 20],
    [ 20, 30, 10,  0,  0, 10, 30, 20],
];

#[inline]
pub const fn table(piece: Piece) -> &'static Table {
    match piece {
        Piece::Pawn => &PAWN_TABLE,
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => &KING_TABLE,
    }
}

/// Positional bonus for `piece` on (`file`, `rank`), whatever its colour.
#[inline]
pub fn positional_bonus(piece: Piece, file: usize, rank: usize) -> i32 {
    table(piece)[file][rank]
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PIECES: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[test]
    fn test_indexing_is_file_then_rank() {
        // c-file pawn: advancing from rank 2 to rank 4 gains 20
        assert_eq!(positional_bonus(Piece::Pawn, 2, 1), 10);
        assert_eq!(positional_bonus(Piece::Pawn, 2, 3), 30);
        // knight on b1 vs c3
        assert_eq!(positional_bonus(Piece::Knight, 1, 0), -40);
        assert_eq!(positional_bonus(Piece::Knight, 2, 2), 10);
    }

    #[test]
    fn test_only_queen_files_e_to_g_are_asymmetric() {
        for piece in ALL_PIECES {
            for file in 0..8 {
                let row = table(piece)[file];
                let mut mirrored = row;
                mirrored.reverse();
                let expect_symmetric = !(piece == Piece::Queen && (4..=6).contains(&file));
                assert_eq!(row == mirrored, expect_symmetric, "{:?} file {}", piece, file);
            }
        }
    }
}
