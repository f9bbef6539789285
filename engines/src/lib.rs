mod capture;
mod minimax;
mod random;
mod scholars_mate;

use chess::ChessMove;
use rand::rngs::StdRng;
use rand::SeedableRng;
use search::SearchError;
use thiserror::Error;
use utils::{ChessPosition, GameOverCondition, MoveList, PositionAdapter};

pub use capture::{CaptureHighestValue, PrioritizePiece};
pub use minimax::MiniMax;
pub use random::{AvoidCapture, RandomCapture, RandomPolicy};
pub use scholars_mate::ScholarsMate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No move exists; the game has ended.
    #[error("game over by {0}")]
    GameOver(GameOverCondition),
    #[error("engine resigned")]
    Resigned,
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Anything that can pick a move for the side to move.
///
/// `evaluate` may push and pop moves on the position while it thinks, but
/// hands it back exactly as it found it.
pub trait Engine: Send {
    fn name(&self) -> String;

    fn evaluate(&mut self, position: &mut ChessPosition) -> Result<ChessMove, EngineError>;

    /// Drops state carried over from an earlier game.
    fn new_game(&mut self) {}
}

/// Legal moves, or the reason there are none to play.
pub(crate) fn playable_moves(
    position: &ChessPosition,
) -> Result<MoveList<ChessMove>, EngineError> {
    if let Some(condition) = position.terminal_status().game_over() {
        return Err(EngineError::GameOver(condition));
    }
    let moves = position.legal_moves();
    if moves.is_empty() {
        return Err(EngineError::GameOver(GameOverCondition::Stalemate));
    }
    Ok(moves)
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
