use std::fmt;

use chess::{ChessMove, Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Checkmate { winner: Color },
    Resignation { winner: Color },
    Stalemate,
    /// Repetition, fifty-move rule or insufficient material.
    Draw,
    /// The game reached the full-move cap without a result.
    MoveLimit,
}

impl GameResult {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate { winner } | GameResult::Resignation { winner } => Some(winner),
            GameResult::Stalemate | GameResult::Draw | GameResult::MoveLimit => None,
        }
    }

    #[inline]
    pub fn is_draw(self) -> bool {
        self.winner().is_none()
    }

    fn score(self) -> &'static str {
        match self.winner() {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }

    fn reason(self) -> &'static str {
        match self {
            GameResult::Checkmate { .. } => "checkmate",
            GameResult::Resignation { .. } => "resignation",
            GameResult::Stalemate => "stalemate",
            GameResult::Draw => "draw",
            GameResult::MoveLimit => "move limit",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.score(), self.reason())
    }
}

/// One move of the game and the material balance it left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyRecord {
    pub side: Color,
    pub mv: ChessMove,
    /// Material from White's point of view after the move.
    pub material: i16,
}

#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub starting_position: String,
    pub white_name: String,
    pub black_name: String,
    pub result: GameResult,
    pub plies: Vec<PlyRecord>,
}

impl GameOutcome {
    pub fn moves(&self) -> impl Iterator<Item = ChessMove> + '_ {
        self.plies.iter().map(|ply| ply.mv)
    }

    /// Full moves started, counting a lone White move as one.
    pub fn move_count(&self) -> usize {
        self.plies.len().div_ceil(2)
    }

    pub fn final_material(&self) -> i16 {
        self.plies.last().map_or(0, |ply| ply.material)
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.result.winner().map(|color| match color {
            Color::White => self.white_name.as_str(),
            Color::Black => self.black_name.as_str(),
        })
    }

    /// Space separated UCI move list.
    pub fn move_text(&self) -> String {
        self.moves()
            .map(|mv| mv.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} - {} moves: {}",
            self.white_name,
            self.black_name,
            self.move_count(),
            self.result
        )
    }
}
