use chess::ChessMove;
use evaluation::PiecePositionEvaluation;
use log::debug;
use search::{ConfigurationError, MvvLva, SearchConfig, SearchEngine, SearchError, SearchResult};
use utils::ChessPosition;

use crate::{Engine, EngineError};

/// Engine backed by the alpha-beta [`SearchEngine`].
pub struct MiniMax {
    search: SearchEngine<ChessPosition>,
    last_result: Option<SearchResult<ChessMove>>,
}

impl MiniMax {
    /// Positional evaluation with MVV-LVA ordering.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigurationError> {
        let search = SearchEngine::builder()
            .config(config)
            .evaluator(PiecePositionEvaluation::default())
            .move_orderer(MvvLva::default())
            .build()?;
        Ok(Self::with_search(search))
    }

    pub fn with_search(search: SearchEngine<ChessPosition>) -> Self {
        Self {
            search,
            last_result: None,
        }
    }

    pub fn depth(&self) -> u8 {
        self.search.config().depth
    }

    pub fn set_depth(&mut self, depth: u8) -> Result<(), ConfigurationError> {
        self.search.set_depth(depth)
    }

    pub fn search_engine_mut(&mut self) -> &mut SearchEngine<ChessPosition> {
        &mut self.search
    }

    pub fn last_result(&self) -> Option<&SearchResult<ChessMove>> {
        self.last_result.as_ref()
    }
}

impl Engine for MiniMax {
    fn name(&self) -> String {
        format!(
            "minimax_d{}_{}",
            self.search.config().depth,
            self.search.evaluator_name()
        )
    }

    fn evaluate(&mut self, position: &mut ChessPosition) -> Result<ChessMove, EngineError> {
        match self.search.search(position) {
            Ok(result) => {
                debug!("{} chose {} ({})", self.name(), result.best_move, result.score);
                self.last_result = Some(result);
                Ok(result.best_move)
            }
            Err(SearchError::GameOver(condition)) => Err(EngineError::GameOver(condition)),
            Err(err) => Err(err.into()),
        }
    }

    fn new_game(&mut self) {
        self.search.new_game();
        self.last_result = None;
    }
}
