//! Piece-square tables in centipawns.
//!
//! Tables are written from White's side with a1 at index 0, one rank per
//! row. Black pieces read the rank-mirrored square.
//!
//! <https://www.chessprogramming.org/Simplified_Evaluation_Function>

use chess::{BitBoard, Color, Piece, Square, NUM_PIECES};

pub type PieceSquareTable = [i16; 64];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSquareTables {
    tables: [PieceSquareTable; NUM_PIECES],
}

impl PieceSquareTables {
    pub const fn new(tables: [PieceSquareTable; NUM_PIECES]) -> Self {
        Self { tables }
    }

    /// Bonus for `piece` of `color` standing on `square`.
    #[inline(always)]
    pub fn value(&self, piece: Piece, color: Color, square: Square) -> i16 {
        let index = match color {
            Color::White => square.to_index(),
            Color::Black => mirror(square.to_index()),
        };
        self.tables[piece.to_index()][index]
    }

    #[inline(always)]
    pub fn sum(&self, piece: Piece, color: Color, squares: BitBoard) -> i32 {
        squares
            .map(|square| self.value(piece, color, square) as i32)
            .sum()
    }
}

impl Default for PieceSquareTables {
    fn default() -> Self {
        Self::new([
            PAWN_PST, KNIGHT_PST, BISHOP_PST, ROOK_PST, QUEEN_PST, KING_PST,
        ])
    }
}

#[inline(always)]
const fn mirror(index: usize) -> usize {
    index ^ 56
}

// - Rewards central pawns and pawns close to promotion
// - Keeps f2/g2/h2 home to shelter a castled king
pub const PAWN_PST: PieceSquareTable = [
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 1: a1..h1
    5, 10, 10, -20, -20, 10, 10, 5, // RANK 2
    5, -5, -10, 0, 0, -10, -5, 5, // RANK 3
    0, 0, 0, 20, 20, 0, 0, 0, // RANK 4
    5, 5, 10, 25, 25, 10, 5, 5, // RANK 5
    10, 10, 20, 30, 30, 20, 10, 10, // RANK 6
    50, 50, 50, 50, 50, 50, 50, 50, // RANK 7
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 8
];

// - Knights on the rim are dim
pub const KNIGHT_PST: PieceSquareTable = [
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 1: a1..h1
    -40, -20, 0, 5, 5, 0, -20, -40, // RANK 2
    -30, 5, 10, 15, 15, 10, 5, -30, // RANK 3
    -30, 0, 15, 20, 20, 15, 0, -30, // RANK 4
    -30, 5, 15, 20, 20, 15, 5, -30, // RANK 5
    -30, 0, 10, 15, 15, 10, 0, -30, // RANK 6
    -40, -20, 0, 0, 0, 0, -20, -40, // RANK 7
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 8
];

// - Avoids corners and borders, likes long diagonals
pub const BISHOP_PST: PieceSquareTable = [
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 1: a1..h1
    -10, 5, 0, 0, 0, 0, 5, -10, // RANK 2
    -10, 10, 10, 10, 10, 10, 10, -10, // RANK 3
    -10, 0, 10, 10, 10, 10, 0, -10, // RANK 4
    -10, 5, 5, 10, 10, 5, 5, -10, // RANK 5
    -10, 0, 5, 10, 10, 5, 0, -10, // RANK 6
    -10, 0, 0, 0, 0, 0, 0, -10, // RANK 7
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 8
];

// - Seventh rank bonus, central files on the back rank
pub const ROOK_PST: PieceSquareTable = [
    0, 0, 0, 5, 5, 0, 0, 0, // RANK 1: a1..h1
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 2
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 3
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 4
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 5
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 6
    5, 10, 10, 10, 10, 10, 10, 5, // RANK 7
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 8
];

// - Mild center bonus
pub const QUEEN_PST: PieceSquareTable = [
    -20, -10, -10, -5, -5, -10, -10, -20, // RANK 1: a1..h1
    -10, 0, 5, 0, 0, 0, 0, -10, // RANK 2
    -10, 5, 5, 5, 5, 5, 0, -10, // RANK 3
    0, 0, 5, 5, 5, 5, 0, -5, // RANK 4
    -5, 0, 5, 5, 5, 5, 0, -5, // RANK 5
    -10, 0, 5, 5, 5, 5, 0, -10, // RANK 6
    -10, 0, 0, 0, 0, 0, 0, -10, // RANK 7
    -20, -10, -10, -5, -5, -10, -10, -20, // RANK 8
];

// - Stay home and castle
pub const KING_PST: PieceSquareTable = [
    20, 30, 10, 0, 0, 10, 30, 20, // RANK 1: a1..h1
    20, 20, 0, 0, 0, 0, 20, 20, // RANK 2
    -10, -20, -20, -20, -20, -20, -20, -10, // RANK 3
    -20, -30, -30, -40, -40, -30, -30, -20, // RANK 4
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 5
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 6
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 7
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 8
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_reads_mirrored_square() {
        let tables = PieceSquareTables::default();
        assert_eq!(
            tables.value(Piece::Pawn, Color::White, Square::E2),
            tables.value(Piece::Pawn, Color::Black, Square::E7)
        );
        assert_eq!(
            tables.value(Piece::Knight, Color::White, Square::B1),
            tables.value(Piece::Knight, Color::Black, Square::B8)
        );
        assert_eq!(tables.value(Piece::Pawn, Color::White, Square::A7), 50);
        assert_eq!(tables.value(Piece::Pawn, Color::Black, Square::A2), 50);
    }

    #[test]
    fn test_king_prefers_castled_squares() {
        let tables = PieceSquareTables::default();
        assert!(
            tables.value(Piece::King, Color::White, Square::G1)
                > tables.value(Piece::King, Color::White, Square::E1)
        );
    }
}
