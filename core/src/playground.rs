use chess::{ChessMove, Color};
use engines::{Engine, EngineError};
use evaluation::{material_balance, PieceValueTable};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use search::ConfigurationError;
use thiserror::Error;
use utils::{ChessPosition, GameOverCondition, PositionAdapter, PositionError};

use crate::outcome::{GameOutcome, GameResult, PlyRecord};

pub const DEFAULT_MAX_MOVES: u16 = 300;

/// Builds a fresh engine for the given game number.
pub type EngineFactory =
    Box<dyn Fn(u64) -> Result<Box<dyn Engine>, ConfigurationError> + Send + Sync>;

#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("{engine} played illegal move {mv} in {fen}")]
    IllegalMove {
        engine: String,
        mv: ChessMove,
        fen: String,
    },
    #[error("{engine} failed: {source}")]
    Engine {
        engine: String,
        #[source]
        source: EngineError,
    },
}

/// Plays engines against each other from a fixed start position.
pub struct Playground {
    white: EngineFactory,
    black: EngineFactory,
    start: ChessPosition,
    max_moves: u16,
    values: PieceValueTable,
}

impl Playground {
    pub fn new<W, B>(white: W, black: B) -> Self
    where
        W: Fn(u64) -> Result<Box<dyn Engine>, ConfigurationError> + Send + Sync + 'static,
        B: Fn(u64) -> Result<Box<dyn Engine>, ConfigurationError> + Send + Sync + 'static,
    {
        Self {
            white: Box::new(white),
            black: Box::new(black),
            start: ChessPosition::default(),
            max_moves: DEFAULT_MAX_MOVES,
            values: PieceValueTable::default(),
        }
    }

    pub fn with_fen(mut self, fen: &str) -> Result<Self, PositionError> {
        self.start = ChessPosition::from_fen(fen)?;
        Ok(self)
    }

    /// Full moves after which the game is called a draw.
    pub fn with_max_moves(mut self, max_moves: u16) -> Self {
        self.max_moves = max_moves;
        self
    }

    pub fn play_game(&self) -> Result<GameOutcome, PlaygroundError> {
        self.play(0)
    }

    /// Plays `count` independent games on the rayon pool. Outcomes come back
    /// in game order.
    pub fn play_multiple_games(&self, count: usize) -> Result<Vec<GameOutcome>, PlaygroundError> {
        let bar = progress_bar(count);

        let outcomes = (0..count as u64)
            .into_par_iter()
            .map(|game| {
                let outcome = self.play(game);
                bar.inc(1);
                outcome
            })
            .collect::<Result<Vec<_>, _>>();

        bar.finish_and_clear();
        outcomes
    }

    fn play(&self, game: u64) -> Result<GameOutcome, PlaygroundError> {
        let mut white = (self.white)(game)?;
        let mut black = (self.black)(game)?;
        white.new_game();
        black.new_game();

        let mut position = self.start.clone();
        let mut plies = Vec::new();
        let ply_limit = usize::from(self.max_moves) * 2;

        let result = loop {
            let side = position.side_to_move();

            if let Some(condition) = position.terminal_status().game_over() {
                break game_over(condition, side);
            }
            if plies.len() >= ply_limit {
                break GameResult::MoveLimit;
            }

            let engine = match side {
                Color::White => &mut white,
                Color::Black => &mut black,
            };

            let mv = match engine.evaluate(&mut position) {
                Ok(mv) => mv,
                Err(EngineError::Resigned) => break GameResult::Resignation { winner: !side },
                Err(EngineError::GameOver(condition)) => break game_over(condition, side),
                Err(source) => {
                    return Err(PlaygroundError::Engine {
                        engine: engine.name(),
                        source,
                    })
                }
            };

            if !position.is_legal(mv) {
                return Err(PlaygroundError::IllegalMove {
                    engine: engine.name(),
                    mv,
                    fen: position.fen(),
                });
            }

            position.apply_move(mv);
            let material = material_balance(position.board(), &self.values);
            debug!("{} plays {} (material {})", engine.name(), mv, material);

            plies.push(PlyRecord {
                side,
                mv,
                material,
            });
        };

        let outcome = GameOutcome {
            starting_position: self.start.fen(),
            white_name: white.name(),
            black_name: black.name(),
            result,
            plies,
        };
        info!("Game {}: {}", game + 1, outcome);

        Ok(outcome)
    }
}

/// `side` is the player to move when the game ended.
fn game_over(condition: GameOverCondition, side: Color) -> GameResult {
    match condition {
        GameOverCondition::Checkmate => GameResult::Checkmate { winner: !side },
        GameOverCondition::Stalemate => GameResult::Stalemate,
        GameOverCondition::Draw => GameResult::Draw,
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} {pos}/{len} [{wide_bar:.cyan/blue}] {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use engines::{AvoidCapture, CaptureHighestValue, ScholarsMate};
    use std::str::FromStr;

    fn scholars(_: u64) -> Result<Box<dyn Engine>, ConfigurationError> {
        Ok(Box::new(ScholarsMate::new()))
    }

    fn avoid_capture(game: u64) -> Result<Box<dyn Engine>, ConfigurationError> {
        Ok(Box::new(AvoidCapture::new(Some(game))))
    }

    struct Stubborn;

    impl Engine for Stubborn {
        fn name(&self) -> String {
            "stubborn".to_string()
        }

        fn evaluate(&mut self, _: &mut ChessPosition) -> Result<ChessMove, EngineError> {
            Ok(ChessMove::from_str("e2e5").unwrap())
        }
    }

    #[test]
    fn test_black_resignation_ends_the_game() {
        let outcome = Playground::new(scholars, scholars).play_game().unwrap();

        assert_eq!(outcome.result, GameResult::Resignation { winner: Color::White });
        assert_eq!(outcome.move_text(), "e2e4");
        assert_eq!(outcome.winner_name(), Some("scholars_mate"));
    }

    #[test]
    fn test_game_from_checkmate() {
        let outcome = Playground::new(avoid_capture, avoid_capture)
            .with_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap()
            .play_game()
            .unwrap();

        assert_eq!(outcome.result, GameResult::Checkmate { winner: Color::Black });
        assert!(outcome.plies.is_empty());
    }

    #[test]
    fn test_game_from_stalemate() {
        let outcome = Playground::new(avoid_capture, avoid_capture)
            .with_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .unwrap()
            .play_game()
            .unwrap();

        assert_eq!(outcome.result, GameResult::Stalemate);
    }

    #[test]
    fn test_move_limit_is_a_draw() {
        let outcome = Playground::new(avoid_capture, avoid_capture)
            .with_max_moves(1)
            .play_game()
            .unwrap();

        assert_eq!(outcome.result, GameResult::MoveLimit);
        assert_eq!(outcome.plies.len(), 2);
        assert_eq!(outcome.plies[0].side, Color::White);
        assert_eq!(outcome.plies[1].side, Color::Black);
        assert!(outcome.result.is_draw());
    }

    #[test]
    fn test_material_is_recorded_per_ply() {
        let capture = |game: u64| -> Result<Box<dyn Engine>, ConfigurationError> {
            Ok(Box::new(CaptureHighestValue::new(Some(game))))
        };
        let outcome = Playground::new(capture, scholars)
            .with_fen("4k3/8/8/8/2q2R2/8/8/4K3 w - - 0 1")
            .unwrap()
            .play_game()
            .unwrap();

        assert_eq!(outcome.move_text(), "f4c4");
        assert_eq!(outcome.final_material(), 500);
        assert_eq!(outcome.result, GameResult::Resignation { winner: Color::White });
    }

    #[test]
    fn test_illegal_move_is_an_error() {
        let stubborn =
            |_: u64| -> Result<Box<dyn Engine>, ConfigurationError> { Ok(Box::new(Stubborn)) };
        let err = Playground::new(stubborn, scholars).play_game().unwrap_err();

        assert!(matches!(err, PlaygroundError::IllegalMove { ref engine, .. } if engine == "stubborn"));
    }

    #[test]
    fn test_invalid_fen() {
        let result = Playground::new(scholars, scholars).with_fen("8/8/8");
        assert!(matches!(result, Err(PositionError::InvalidFen(_))));
    }

    #[test]
    fn test_multiple_games_keep_order() {
        let outcomes = Playground::new(avoid_capture, avoid_capture)
            .with_max_moves(3)
            .play_multiple_games(4)
            .unwrap();

        assert_eq!(outcomes.len(), 4);

        let replay = Playground::new(avoid_capture, avoid_capture)
            .with_max_moves(3)
            .play_multiple_games(4)
            .unwrap();
        for (a, b) in outcomes.iter().zip(&replay) {
            assert_eq!(a.plies, b.plies);
        }
    }
}
