use chess::{Board, ChessMove, Piece};

/// The piece removed by `mv`, counting en passant as a pawn capture.
#[inline(always)]
pub fn captured_piece(board: &Board, mv: ChessMove) -> Option<Piece> {
    if let Some(victim) = board.piece_on(mv.get_dest()) {
        return Some(victim);
    }

    // A pawn changing file onto an empty square can only be en passant
    let is_pawn = board.piece_on(mv.get_source()) == Some(Piece::Pawn);
    if is_pawn && mv.get_source().get_file() != mv.get_dest().get_file() {
        return Some(Piece::Pawn);
    }

    None
}

#[inline(always)]
pub fn is_capture(board: &Board, mv: ChessMove) -> bool {
    captured_piece(board, mv).is_some()
}

/// The piece making the move.
#[inline(always)]
pub fn moved_piece(board: &Board, mv: ChessMove) -> Option<Piece> {
    board.piece_on(mv.get_source())
}
