use chess::Piece;

/// Material value of each piece kind in centipawns.
///
/// Shared by the evaluators and the capture ordering so both agree on what a
/// piece is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValueTable {
    pub pawn: i16,
    pub knight: i16,
    pub bishop: i16,
    pub rook: i16,
    pub queen: i16,
    pub king: i16,
}

impl PieceValueTable {
    #[inline(always)]
    pub fn get(&self, piece: Piece) -> i16 {
        match piece {
            Piece::Pawn => self.pawn,
            Piece::Knight => self.knight,
            Piece::Bishop => self.bishop,
            Piece::Rook => self.rook,
            Piece::Queen => self.queen,
            Piece::King => self.king,
        }
    }
}

impl Default for PieceValueTable {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
            king: 1000,
        }
    }
}
