mod chess_position;
mod error;
pub mod material;
pub mod moves;
mod position;
pub mod zobrist;

pub use chess_position::ChessPosition;
pub use error::PositionError;
pub use position::{
    GameOverCondition, MoveGuard, MoveList, PositionAdapter, TerminalStatus, MAX_MOVES,
};
