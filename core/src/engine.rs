use chess::Piece;
use engines::{
    AvoidCapture, CaptureHighestValue, Engine, MiniMax, PrioritizePiece, RandomCapture,
    RandomPolicy, ScholarsMate,
};
use evaluation::{PiecePositionEvaluation, StandardEvaluation};
use search::{ConfigurationError, MvvLva, NaturalOrder, SearchConfig, SearchEngine};
use utils::ChessPosition;

use crate::args::{EngineKind, EvaluationKind, OrderingKind, SimulateArgs};

/// Everything needed to build a fresh engine for each game.
#[derive(Debug, Clone, Copy)]
pub struct EngineSetup {
    pub kind: EngineKind,
    pub search: SearchConfig,
    pub evaluation: EvaluationKind,
    pub ordering: OrderingKind,
    pub seed: Option<u64>,
}

impl EngineSetup {
    pub fn from_args(kind: EngineKind, args: &SimulateArgs) -> Self {
        let search = SearchConfig {
            depth: args.depth,
            hash_size_mb: args.hash,
            alpha_beta: !args.no_pruning,
            transposition: !args.no_tt,
            ..Default::default()
        };

        Self {
            kind,
            search,
            evaluation: args.evaluation,
            ordering: args.ordering,
            seed: args.seed,
        }
    }

    /// Builds the engine for game number `game`. Seeded setups hand every game
    /// its own stream so parallel games do not replay each other.
    pub fn create(&self, game: u64) -> Result<Box<dyn Engine>, ConfigurationError> {
        let seed = self.seed.map(|seed| seed.wrapping_add(game));

        let engine: Box<dyn Engine> = match self.kind {
            EngineKind::Random => Box::new(RandomPolicy::new(seed)),
            EngineKind::RandomCapture => Box::new(RandomCapture::new(seed)),
            EngineKind::AvoidCapture => Box::new(AvoidCapture::new(seed)),
            EngineKind::CaptureHighestValue => Box::new(CaptureHighestValue::new(seed)),
            EngineKind::PrioritizePawn => Box::new(PrioritizePiece::new(Piece::Pawn, seed)),
            EngineKind::PrioritizeKnight => Box::new(PrioritizePiece::new(Piece::Knight, seed)),
            EngineKind::PrioritizeBishop => Box::new(PrioritizePiece::new(Piece::Bishop, seed)),
            EngineKind::ScholarsMate => Box::new(ScholarsMate::new()),
            EngineKind::Minimax => Box::new(MiniMax::with_search(self.search_engine()?)),
        };

        Ok(engine)
    }

    fn search_engine(&self) -> Result<SearchEngine<ChessPosition>, ConfigurationError> {
        let builder = SearchEngine::builder().config(self.search);

        let builder = match self.evaluation {
            EvaluationKind::Standard => builder.evaluator(StandardEvaluation::default()),
            EvaluationKind::Positional => builder.evaluator(PiecePositionEvaluation::default()),
        };

        let builder = match self.ordering {
            OrderingKind::MvvLva => builder.move_orderer(MvvLva::default()),
            OrderingKind::Natural => builder.move_orderer(NaturalOrder),
        };

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(kind: EngineKind) -> EngineSetup {
        EngineSetup {
            kind,
            search: SearchConfig::default(),
            evaluation: EvaluationKind::Positional,
            ordering: OrderingKind::MvvLva,
            seed: Some(1),
        }
    }

    #[test]
    fn test_names_match_kinds() {
        let cases = [
            (EngineKind::Random, "random"),
            (EngineKind::RandomCapture, "random_capture"),
            (EngineKind::AvoidCapture, "avoid_capture"),
            (EngineKind::CaptureHighestValue, "capture_highest_value"),
            (EngineKind::PrioritizeKnight, "prioritize_knight"),
            (EngineKind::ScholarsMate, "scholars_mate"),
            (EngineKind::Minimax, "minimax_d3_positional"),
        ];

        for (kind, name) in cases {
            assert_eq!(setup(kind).create(0).unwrap().name(), name);
        }
    }

    #[test]
    fn test_minimax_uses_selected_evaluation() {
        let mut setup = setup(EngineKind::Minimax);
        setup.evaluation = EvaluationKind::Standard;
        setup.search.depth = 2;
        assert_eq!(setup.create(0).unwrap().name(), "minimax_d2_standard");
    }

    #[test]
    fn test_invalid_depth_is_reported() {
        let mut setup = setup(EngineKind::Minimax);
        setup.search.depth = 0;
        assert!(matches!(
            setup.create(0),
            Err(ConfigurationError::InvalidDepth { .. })
        ));
    }

    #[test]
    fn test_games_get_distinct_seeds() {
        let setup = setup(EngineKind::Random);
        let mut position = ChessPosition::default();

        let first: Vec<_> = (0..8)
            .map(|game| setup.create(game).unwrap().evaluate(&mut position).unwrap())
            .collect();
        let again: Vec<_> = (0..8)
            .map(|game| setup.create(game).unwrap().evaluate(&mut position).unwrap())
            .collect();

        assert_eq!(first, again);
        assert!(first.iter().any(|mv| *mv != first[0]));
    }
}
