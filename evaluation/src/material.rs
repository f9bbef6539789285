use chess::{Board, Color, ALL_PIECES};
use utils::material::piece_count;

use crate::PieceValueTable;

/// Material of White minus material of Black, kings included on both sides.
pub fn material_balance(board: &Board, values: &PieceValueTable) -> i16 {
    let mut balance = 0i32;
    for piece in ALL_PIECES {
        let white = piece_count(board, Color::White, piece) as i32;
        let black = piece_count(board, Color::Black, piece) as i32;
        balance += values.get(piece) as i32 * (white - black);
    }
    crate::scores::clamp_eval(balance)
}
