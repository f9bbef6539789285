use log::debug;
use utils::PositionAdapter;

use evaluation::Evaluator;

use crate::config::validate_depth;
use crate::move_ordering::{MoveOrderer, NaturalOrder};
use crate::transposition::TranspositionTable;
use crate::{ConfigurationError, SearchConfig, SearchError, MAX_DEPTH};

mod search;
mod stats;
#[cfg(test)]
mod tree;

pub use stats::SearchStats;

/// Outcome of one call to [`SearchEngine::best_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub best_move: M,
    /// Score of `best_move` from the side to move, in centipawns.
    pub score: i16,
    pub depth: u8,
    pub stats: SearchStats,
}

/// Depth-bounded negamax with alpha-beta pruning and a transposition table.
///
/// The engine owns its evaluator, move orderer and table. The position is
/// borrowed for one call at a time and handed back unchanged.
pub struct SearchEngine<P: PositionAdapter> {
    config: SearchConfig,
    evaluator: Box<dyn Evaluator<P>>,
    orderer: Box<dyn MoveOrderer<P>>,
    tt: TranspositionTable<P::Move>,
    stats: SearchStats,
}

impl<P: PositionAdapter> SearchEngine<P> {
    pub fn builder() -> SearchEngineBuilder<P> {
        SearchEngineBuilder::default()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator_name(&self) -> String {
        self.evaluator.name()
    }

    pub fn orderer_name(&self) -> String {
        self.orderer.name()
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn set_evaluator(&mut self, evaluator: impl Evaluator<P> + 'static) {
        self.evaluator = Box::new(evaluator);
        // Cached scores came from the old evaluator
        self.tt.clear();
    }

    pub fn set_move_orderer(&mut self, orderer: impl MoveOrderer<P> + 'static) {
        self.orderer = Box::new(orderer);
    }

    pub fn set_depth(&mut self, depth: u8) -> Result<(), ConfigurationError> {
        validate_depth(depth)?;
        self.config.depth = depth;
        Ok(())
    }

    /// Forgets everything learned from previous positions.
    pub fn new_game(&mut self) {
        self.tt.clear();
    }

    /// Hash table fill rate in permille.
    pub fn hashfull(&self) -> u16 {
        self.tt.hashfull()
    }

    /// Searches at the configured depth.
    pub fn search(&mut self, position: &mut P) -> Result<SearchResult<P::Move>, SearchError> {
        self.best_move(position, self.config.depth)
    }

    /// Finds the best move for the side to move, searching `depth` plies.
    pub fn best_move(
        &mut self,
        position: &mut P,
        depth: u8,
    ) -> Result<SearchResult<P::Move>, SearchError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(SearchError::InvalidDepth {
                depth,
                max: MAX_DEPTH,
            });
        }
        if let Some(condition) = position.terminal_status().game_over() {
            return Err(SearchError::GameOver(condition));
        }

        self.stats = SearchStats::default();
        let (score, best_move) = self.search_root(position, depth);
        let best_move = best_move.ok_or(SearchError::GameOver(
            utils::GameOverCondition::Stalemate,
        ))?;

        debug!(
            "depth {} score {} move {:?} | {} | hashfull {}",
            depth,
            score,
            best_move,
            self.stats,
            self.tt.hashfull()
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats,
        })
    }
}

pub struct SearchEngineBuilder<P: PositionAdapter> {
    config: SearchConfig,
    evaluator: Option<Box<dyn Evaluator<P>>>,
    orderer: Option<Box<dyn MoveOrderer<P>>>,
}

impl<P: PositionAdapter> Default for SearchEngineBuilder<P> {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            evaluator: None,
            orderer: None,
        }
    }
}

impl<P: PositionAdapter> SearchEngineBuilder<P> {
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn evaluator(mut self, evaluator: impl Evaluator<P> + 'static) -> Self {
        self.evaluator = Some(Box::new(evaluator));
        self
    }

    pub fn move_orderer(mut self, orderer: impl MoveOrderer<P> + 'static) -> Self {
        self.orderer = Some(Box::new(orderer));
        self
    }

    pub fn build(self) -> Result<SearchEngine<P>, ConfigurationError> {
        self.config.validate()?;
        let evaluator = self.evaluator.ok_or(ConfigurationError::MissingEvaluator)?;
        let orderer = self.orderer.unwrap_or_else(|| Box::new(NaturalOrder));

        Ok(SearchEngine {
            tt: TranspositionTable::new(self.config.hash_size_mb),
            config: self.config,
            evaluator,
            orderer,
            stats: SearchStats::default(),
        })
    }
}
