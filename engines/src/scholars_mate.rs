use chess::{ChessMove, Color};
use log::info;
use std::str::FromStr;
use utils::ChessPosition;

use crate::{playable_moves, Engine, EngineError};

const SCRIPT: [&str; 4] = ["e2e4", "f1c4", "d1h5", "h5f7"];

/// Tries the four-move mate as White and gives up the moment it fails.
#[derive(Debug, Default)]
pub struct ScholarsMate;

impl ScholarsMate {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for ScholarsMate {
    fn name(&self) -> String {
        "scholars_mate".to_string()
    }

    fn evaluate(&mut self, position: &mut ChessPosition) -> Result<ChessMove, EngineError> {
        playable_moves(position)?;

        if position.side_to_move() == Color::Black {
            info!("{} resigns: only plays White", self.name());
            return Err(EngineError::Resigned);
        }

        let index = position.fullmove_number() as usize - 1;
        let Some(uci) = SCRIPT.get(index) else {
            info!("{} resigns: sequence exhausted", self.name());
            return Err(EngineError::Resigned);
        };

        match ChessMove::from_str(uci) {
            Ok(mv) if position.is_legal(mv) => Ok(mv),
            _ => {
                info!("{} resigns: {} is not playable", self.name(), uci);
                Err(EngineError::Resigned)
            }
        }
    }
}
