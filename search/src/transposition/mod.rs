mod table;

pub use table::{Bound, ProbeResult, TranspositionTable};
