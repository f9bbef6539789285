mod config;
mod engine;
mod error;
mod move_ordering;
mod transposition;

/// Maximum search depth supported by the engine.
pub const MAX_DEPTH: u8 = 64;

pub use config::SearchConfig;
pub use engine::{SearchEngine, SearchEngineBuilder, SearchResult, SearchStats};
pub use error::{ConfigurationError, SearchError};
pub use move_ordering::{MoveOrderer, MvvLva, NaturalOrder};
pub use transposition::{Bound, ProbeResult, TranspositionTable};
