use chess::{Color, ALL_PIECES};
use utils::ChessPosition;

use crate::scores::clamp_eval;
use crate::{Evaluator, PieceSquareTables, PieceValueTable, StandardEvaluation};

/// Material plus a piece-square bonus for every piece on the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct PiecePositionEvaluation {
    material: StandardEvaluation,
    tables: PieceSquareTables,
}

impl PiecePositionEvaluation {
    pub fn new(values: PieceValueTable, tables: PieceSquareTables) -> Self {
        Self {
            material: StandardEvaluation::new(values),
            tables,
        }
    }

    fn placement(&self, position: &ChessPosition, color: Color) -> i32 {
        let board = position.board();
        let ours = *board.color_combined(color);
        ALL_PIECES
            .iter()
            .map(|&piece| self.tables.sum(piece, color, *board.pieces(piece) & ours))
            .sum()
    }
}

impl Evaluator<ChessPosition> for PiecePositionEvaluation {
    fn name(&self) -> String {
        "positional".to_string()
    }

    fn evaluate(&self, position: &ChessPosition) -> i16 {
        let us = position.side_to_move();
        let score = self.material.material(position, us) + self.placement(position, us)
            - self.placement(position, !us);
        clamp_eval(score)
    }
}
