use chess::{Color, ALL_PIECES};
use utils::material::piece_count;
use utils::ChessPosition;

use crate::scores::clamp_eval;
use crate::{Evaluator, PieceValueTable};

/// Counts material and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluation {
    values: PieceValueTable,
}

impl StandardEvaluation {
    pub fn new(values: PieceValueTable) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &PieceValueTable {
        &self.values
    }

    /// Material of `us` minus material of the opponent.
    pub(crate) fn material(&self, position: &ChessPosition, us: Color) -> i32 {
        let board = position.board();
        ALL_PIECES
            .iter()
            .map(|&piece| {
                let ours = piece_count(board, us, piece) as i32;
                let theirs = piece_count(board, !us, piece) as i32;
                self.values.get(piece) as i32 * (ours - theirs)
            })
            .sum()
    }
}

impl Evaluator<ChessPosition> for StandardEvaluation {
    fn name(&self) -> String {
        "standard".to_string()
    }

    fn evaluate(&self, position: &ChessPosition) -> i16 {
        clamp_eval(self.material(position, position.side_to_move()))
    }
}
