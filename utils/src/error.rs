use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid FEN '{0}'")]
    InvalidFen(String),
    #[error("illegal move '{mv}' in position {fen}")]
    IllegalMove { mv: String, fen: String },
}
