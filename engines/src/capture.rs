use chess::{ChessMove, Piece};
use evaluation::PieceValueTable;
use rand::rngs::StdRng;
use utils::moves::{captured_piece, moved_piece};
use utils::ChessPosition;

use crate::random::pick;
use crate::{playable_moves, seeded_rng, Engine, EngineError};

/// The capture of the most valuable piece among `moves`, first one on ties.
fn best_capture(
    position: &ChessPosition,
    values: &PieceValueTable,
    moves: impl Iterator<Item = ChessMove>,
) -> Option<ChessMove> {
    let board = position.board();
    let mut best: Option<(ChessMove, i16)> = None;

    for mv in moves {
        let Some(victim) = captured_piece(board, mv) else {
            continue;
        };
        let value = values.get(victim);
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((mv, value));
        }
    }

    best.map(|(mv, _)| mv)
}

/// Always takes the most valuable piece on offer.
pub struct CaptureHighestValue {
    values: PieceValueTable,
    rng: StdRng,
}

impl CaptureHighestValue {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            values: PieceValueTable::default(),
            rng: seeded_rng(seed),
        }
    }
}

impl Engine for CaptureHighestValue {
    fn name(&self) -> String {
        "capture_highest_value".to_string()
    }

    fn evaluate(&mut self, position: &mut ChessPosition) -> Result<ChessMove, EngineError> {
        let moves = playable_moves(position)?;
        match best_capture(position, &self.values, moves.iter().copied()) {
            Some(mv) => Ok(mv),
            None => pick(&mut self.rng, &moves),
        }
    }
}

/// Moves one kind of piece whenever possible, capturing with it first.
pub struct PrioritizePiece {
    piece: Piece,
    values: PieceValueTable,
    rng: StdRng,
}

impl PrioritizePiece {
    pub fn new(piece: Piece, seed: Option<u64>) -> Self {
        Self {
            piece,
            values: PieceValueTable::default(),
            rng: seeded_rng(seed),
        }
    }
}

impl Engine for PrioritizePiece {
    fn name(&self) -> String {
        let piece = match self.piece {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        };
        format!("prioritize_{piece}")
    }

    fn evaluate(&mut self, position: &mut ChessPosition) -> Result<ChessMove, EngineError> {
        let moves = playable_moves(position)?;
        let board = position.board();
        let preferred: Vec<ChessMove> = moves
            .iter()
            .copied()
            .filter(|&mv| moved_piece(board, mv) == Some(self.piece))
            .collect();

        if let Some(mv) = best_capture(position, &self.values, preferred.iter().copied()) {
            return Ok(mv);
        }
        if preferred.is_empty() {
            pick(&mut self.rng, &moves)
        } else {
            pick(&mut self.rng, &preferred)
        }
    }
}
