use chess::{BitBoard, Board, Color, Piece, EMPTY};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

/// Number of pieces of one kind and colour.
#[inline(always)]
pub fn piece_count(board: &Board, color: Color, piece: Piece) -> u32 {
    (*board.pieces(piece) & *board.color_combined(color)).popcnt()
}

/// Check if the position has insufficient material for either side to mate.
///
/// Returns true for dead drawn positions:
/// - K vs K
/// - K+N vs K (either side)
/// - K+B vs K (either side)
/// - K+B vs K+B with same-colored bishops
pub fn has_insufficient_material(board: &Board) -> bool {
    let heavy = *board.pieces(Piece::Pawn) | *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);
    if heavy != EMPTY {
        return false;
    }

    let white_minors = minors(board, Color::White);
    let black_minors = minors(board, Color::Black);

    match (white_minors.popcnt(), black_minors.popcnt()) {
        (0, 0) | (1, 0) | (0, 1) => true,
        (1, 1) => {
            let bishops = *board.pieces(Piece::Bishop);
            if (white_minors & bishops) == EMPTY || (black_minors & bishops) == EMPTY {
                return false;
            }

            let light_squares = BitBoard(LIGHT_SQUARES_MASK);
            let white_on_light = (white_minors & light_squares) != EMPTY;
            let black_on_light = (black_minors & light_squares) != EMPTY;
            white_on_light == black_on_light
        }
        _ => false,
    }
}

#[inline(always)]
fn minors(board: &Board, color: Color) -> BitBoard {
    (*board.pieces(Piece::Knight) | *board.pieces(Piece::Bishop)) & *board.color_combined(color)
}
