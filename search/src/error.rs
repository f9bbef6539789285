use thiserror::Error;
use utils::GameOverCondition;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("search engine needs an evaluator")]
    MissingEvaluator,
    #[error("search depth must be between 1 and {max}, got {depth}")]
    InvalidDepth { depth: u8, max: u8 },
    #[error("hash size must be at least 1 MB, got {0}")]
    InvalidHashSize(usize),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The root position has no move to return.
    #[error("game over by {0}")]
    GameOver(GameOverCondition),
    #[error("search depth must be between 1 and {max}, got {depth}")]
    InvalidDepth { depth: u8, max: u8 },
}
