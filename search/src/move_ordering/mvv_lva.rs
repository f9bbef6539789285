use std::cmp::Reverse;

use evaluation::PieceValueTable;
use utils::moves::{captured_piece, moved_piece};
use utils::{ChessPosition, MoveList};

use super::MoveOrderer;
use chess::ChessMove;

/// Most Valuable Victim - Least Valuable Attacker.
///
/// Captures come first, biggest victim first and cheapest attacker among
/// equal victims. Quiet moves follow in generation order.
///
/// <https://www.chessprogramming.org/MVV-LVA>
#[derive(Debug, Clone, Copy, Default)]
pub struct MvvLva {
    values: PieceValueTable,
}

impl MvvLva {
    pub fn new(values: PieceValueTable) -> Self {
        Self { values }
    }
}

impl MoveOrderer<ChessPosition> for MvvLva {
    fn name(&self) -> String {
        "mvv-lva".to_string()
    }

    fn order(&self, position: &ChessPosition, moves: &mut MoveList<ChessMove>) {
        let board = position.board();
        // Stable, so ties and quiet moves keep their generated order
        moves.sort_by_key(|&mv| match captured_piece(board, mv) {
            Some(victim) => {
                let attacker = moved_piece(board, mv).map_or(0, |p| self.values.get(p));
                (false, Reverse(self.values.get(victim)), attacker)
            }
            None => (true, Reverse(0), 0),
        });
    }
}
