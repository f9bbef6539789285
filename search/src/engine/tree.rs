//! A synthetic game tree for checking the search against plain minimax.
//!
//! Every node is identified by the path from the root. Branching factor,
//! terminal nodes and leaf values all derive from a hash of that path, so a
//! seed always produces the same tree.

use evaluation::scores::{DRAW_VALUE, MATE_VALUE, NEG_INFINITY};
use evaluation::Evaluator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use utils::{MoveList, PositionAdapter, TerminalStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TreePosition {
    seed: u64,
    path: Vec<u8>,
}

impl TreePosition {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            seed,
            path: Vec::new(),
        }
    }

    fn node_hash(&self) -> u64 {
        self.path
            .iter()
            .fold(splitmix(self.seed), |hash, &mv| splitmix(hash ^ (mv as u64 + 1)))
    }

    /// Nodes a full-width search of `depth` plies enters, root included.
    pub(crate) fn count_nodes(&mut self, depth: u8) -> u64 {
        if depth == 0 || self.terminal_status().is_terminal() {
            return 1;
        }
        let mut count = 1;
        for mv in self.legal_moves() {
            self.apply_move(mv);
            count += self.count_nodes(depth - 1);
            self.revert_move(mv);
        }
        count
    }
}

fn splitmix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl PositionAdapter for TreePosition {
    type Move = u8;

    fn legal_moves(&self) -> MoveList<u8> {
        if self.terminal_status().is_terminal() {
            return MoveList::new();
        }
        let branching = 2 + (self.node_hash() % 3) as u8;
        (0..branching).collect()
    }

    fn apply_move(&mut self, mv: u8) {
        self.path.push(mv);
    }

    fn revert_move(&mut self, mv: u8) {
        let popped = self.path.pop();
        debug_assert_eq!(popped, Some(mv));
    }

    fn terminal_status(&self) -> TerminalStatus {
        if self.path.is_empty() {
            return TerminalStatus::Ongoing;
        }
        match self.node_hash() % 16 {
            0 => TerminalStatus::Checkmate,
            1 => TerminalStatus::Draw,
            _ => TerminalStatus::Ongoing,
        }
    }

    fn position_key(&self) -> u64 {
        self.node_hash()
    }

    fn position_fingerprint(&self) -> u64 {
        splitmix(self.node_hash() ^ 0x5555_5555_5555_5555)
    }
}

/// Pseudo-random leaf scores in [-500, 500].
pub(crate) struct LeafValue;

impl Evaluator<TreePosition> for LeafValue {
    fn name(&self) -> String {
        "leaf".to_string()
    }

    fn evaluate(&self, position: &TreePosition) -> i16 {
        StdRng::seed_from_u64(position.node_hash()).gen_range(-500..=500)
    }
}

/// Reference minimax: full width, no table, first best move wins ties.
pub(crate) fn minimax(position: &mut TreePosition, depth: u8, ply: u8) -> (i16, Option<u8>) {
    match position.terminal_status() {
        TerminalStatus::Checkmate => return (-(MATE_VALUE - ply as i16), None),
        TerminalStatus::Stalemate | TerminalStatus::Draw => return (DRAW_VALUE, None),
        TerminalStatus::Ongoing => {}
    }
    if depth == 0 {
        return (LeafValue.evaluate(position), None);
    }

    let mut best = (NEG_INFINITY, None);
    for mv in position.legal_moves() {
        position.apply_move(mv);
        let value = -minimax(position, depth - 1, ply + 1).0;
        position.revert_move(mv);

        if value > best.0 {
            best = (value, Some(mv));
        }
    }
    best
}
