use chess::ChessMove;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use utils::moves::is_capture;
use utils::ChessPosition;

use crate::{playable_moves, seeded_rng, Engine, EngineError};

/// Picks uniformly among `moves`, which must not be empty.
pub(crate) fn pick(rng: &mut StdRng, moves: &[ChessMove]) -> Result<ChessMove, EngineError> {
    moves.choose(rng).copied().ok_or(EngineError::Resigned)
}

/// Plays any legal move.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Engine for RandomPolicy {
    fn name(&self) -> String {
        "random".to_string()
    }

    fn evaluate(&mut self, position: &mut ChessPosition) -> Result<ChessMove, EngineError> {
        let moves = playable_moves(position)?;
        pick(&mut self.rng, &moves)
    }
}

/// Captures something when it can, otherwise moves at random.
pub struct RandomCapture {
    rng: StdRng,
}

impl RandomCapture {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Engine for RandomCapture {
    fn name(&self) -> String {
        "random_capture".to_string()
    }

    fn evaluate(&mut self, position: &mut ChessPosition) -> Result<ChessMove, EngineError> {
        let moves = playable_moves(position)?;
        let captures: Vec<ChessMove> = moves
            .iter()
            .copied()
            .filter(|&mv| is_capture(position.board(), mv))
            .collect();

        if captures.is_empty() {
            pick(&mut self.rng, &moves)
        } else {
            pick(&mut self.rng, &captures)
        }
    }
}

/// Never captures unless every legal move is a capture.
pub struct AvoidCapture {
    rng: StdRng,
}

impl AvoidCapture {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Engine for AvoidCapture {
    fn name(&self) -> String {
        "avoid_capture".to_string()
    }

    fn evaluate(&mut self, position: &mut ChessPosition) -> Result<ChessMove, EngineError> {
        let moves = playable_moves(position)?;
        let quiet: Vec<ChessMove> = moves
            .iter()
            .copied()
            .filter(|&mv| !is_capture(position.board(), mv))
            .collect();

        if quiet.is_empty() {
            pick(&mut self.rng, &moves)
        } else {
            pick(&mut self.rng, &quiet)
        }
    }
}
