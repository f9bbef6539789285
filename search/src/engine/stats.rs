use std::fmt;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root included.
    pub nodes: u64,
    /// Leaves handed to the evaluator.
    pub evaluations: u64,
    pub tt_probes: u64,
    /// Probes that found this position with a usable move hint.
    pub tt_hits: u64,
    /// Nodes answered from the table without searching.
    pub tt_cutoffs: u64,
    pub beta_cutoffs: u64,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes {} evals {} tt {}/{} (cutoffs {}) beta cutoffs {}",
            self.nodes,
            self.evaluations,
            self.tt_hits,
            self.tt_probes,
            self.tt_cutoffs,
            self.beta_cutoffs
        )
    }
}
