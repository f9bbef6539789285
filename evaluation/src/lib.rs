mod material;
mod piece_values;
mod positional;
pub mod pst;
pub mod scores;
mod standard;
mod traits;

pub use material::material_balance;
pub use piece_values::PieceValueTable;
pub use positional::PiecePositionEvaluation;
pub use pst::PieceSquareTables;
pub use standard::StandardEvaluation;
pub use traits::Evaluator;
