use evaluation::scores::{DRAW_VALUE, MATE_VALUE, NEG_INFINITY, POS_INFINITY};
use utils::{MoveGuard, PositionAdapter, TerminalStatus};

use crate::move_ordering::promote;
use crate::transposition::Bound;

use super::SearchEngine;

impl<P: PositionAdapter> SearchEngine<P> {
    pub(super) fn search_root(&mut self, position: &mut P, depth: u8) -> (i16, Option<P::Move>) {
        self.negamax(position, depth, 0, NEG_INFINITY, POS_INFINITY)
    }

    /// Fail-soft negamax. Returns the node value from the side to move and
    /// the move that produced it.
    fn negamax(
        &mut self,
        position: &mut P,
        depth: u8,
        ply: u8,
        mut alpha: i16,
        mut beta: i16,
    ) -> (i16, Option<P::Move>) {
        self.stats.nodes += 1;

        match position.terminal_status() {
            TerminalStatus::Checkmate => return (self.mated_score(ply), None),
            TerminalStatus::Stalemate | TerminalStatus::Draw => return (DRAW_VALUE, None),
            TerminalStatus::Ongoing => {}
        }

        if depth == 0 {
            self.stats.evaluations += 1;
            return (self.evaluator.evaluate(position), None);
        }

        let mut moves = position.legal_moves();
        let key = position.position_key();
        let fingerprint = position.position_fingerprint();
        // Without mate-distance scoring a mate is worth the same at every ply
        let tt_ply = if self.config.mate_distance { ply } else { 0 };

        // Proven range of the true value, used to keep a re-search consistent
        let mut floor = NEG_INFINITY;
        let mut ceiling = POS_INFINITY;
        let mut hint = None;

        if self.config.transposition {
            self.stats.tt_probes += 1;

            let usable = self.tt.probe(key, fingerprint, tt_ply).filter(|entry| {
                // A move that is not legal here means the entry belongs to another position
                entry.best_move.map_or(true, |mv| moves.contains(&mv))
                    && (self.config.alpha_beta || entry.bound == Bound::Exact)
            });

            if let Some(entry) = usable {
                self.stats.tt_hits += 1;
                hint = entry.best_move;

                if entry.depth >= depth {
                    match entry.bound {
                        Bound::Exact => {
                            self.stats.tt_cutoffs += 1;
                            return (entry.value, entry.best_move);
                        }
                        Bound::Lower => {
                            if entry.value >= beta {
                                self.stats.tt_cutoffs += 1;
                                return (entry.value, entry.best_move);
                            }
                            floor = entry.value;
                            alpha = alpha.max(entry.value);
                        }
                        Bound::Upper => {
                            if entry.value <= alpha {
                                self.stats.tt_cutoffs += 1;
                                return (entry.value, entry.best_move);
                            }
                            ceiling = entry.value;
                            beta = beta.min(entry.value);
                        }
                    }
                }
            }
        }

        self.orderer.order(position, &mut moves);
        if let Some(hint) = hint {
            promote(&mut moves, hint);
        }

        let (window_alpha, window_beta) = (alpha, beta);
        let mut best_value = NEG_INFINITY;
        let mut best_move = None;

        for mv in moves {
            let value = {
                let mut child = MoveGuard::new(position, mv);
                let (child_alpha, child_beta) = if self.config.alpha_beta {
                    (-beta, -alpha)
                } else {
                    (NEG_INFINITY, POS_INFINITY)
                };
                -self.negamax(&mut child, depth - 1, ply + 1, child_alpha, child_beta).0
            };

            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }

            if self.config.alpha_beta {
                alpha = alpha.max(best_value);
                if alpha >= beta {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
        }

        let value = best_value.clamp(floor, ceiling);

        if self.config.transposition {
            let bound = if value <= window_alpha {
                Bound::Upper
            } else if value >= window_beta {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.tt
                .store(key, fingerprint, depth, tt_ply, value, bound, best_move);
        }

        (value, best_move)
    }

    #[inline(always)]
    fn mated_score(&self, ply: u8) -> i16 {
        if self.config.mate_distance {
            -(MATE_VALUE - ply as i16)
        } else {
            -MATE_VALUE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tree::{minimax, LeafValue, TreePosition};
    use super::*;
    use crate::{NaturalOrder, SearchConfig};

    fn tree_engine(config: SearchConfig) -> SearchEngine<TreePosition> {
        SearchEngine::builder()
            .config(config)
            .evaluator(LeafValue)
            .move_orderer(NaturalOrder)
            .build()
            .unwrap()
    }

    fn without_tt(alpha_beta: bool) -> SearchConfig {
        SearchConfig {
            alpha_beta,
            transposition: false,
            hash_size_mb: 1,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_alpha_beta_matches_minimax_on_random_trees() {
        for seed in 0..40u64 {
            for depth in 1..=5u8 {
                let mut position = TreePosition::new(seed);
                let (expected_score, expected_move) = minimax(&mut position, depth, 0);

                let mut engine = tree_engine(without_tt(true));
                let result = engine.best_move(&mut position, depth).unwrap();

                assert_eq!(result.score, expected_score, "seed {seed} depth {depth}");
                assert_eq!(Some(result.best_move), expected_move, "seed {seed} depth {depth}");
                assert_eq!(position, TreePosition::new(seed));
            }
        }
    }

    #[test]
    fn test_plain_minimax_mode_visits_every_node() {
        let mut position = TreePosition::new(3);
        let full = tree_engine(without_tt(false)).best_move(&mut position, 5).unwrap();
        let pruned = tree_engine(without_tt(true)).best_move(&mut position, 5).unwrap();

        assert_eq!(full.score, pruned.score);
        assert_eq!(full.stats.beta_cutoffs, 0);
        assert!(pruned.stats.nodes <= full.stats.nodes);
        assert_eq!(full.stats.nodes, position.count_nodes(5));
    }

    #[test]
    fn test_warm_table_gives_same_score() {
        for seed in 0..20u64 {
            let mut position = TreePosition::new(seed);
            let expected = minimax(&mut position, 4, 0).0;

            let mut engine = tree_engine(SearchConfig {
                hash_size_mb: 1,
                ..SearchConfig::default()
            });
            let cold = engine.best_move(&mut position, 4).unwrap();
            let warm = engine.best_move(&mut position, 4).unwrap();

            assert_eq!(cold.score, expected, "seed {seed}");
            assert_eq!(warm.score, expected, "seed {seed}");
        }
    }

    #[test]
    fn test_shallow_entries_only_reorder() {
        for seed in 0..20u64 {
            let mut position = TreePosition::new(seed);
            let expected = minimax(&mut position, 5, 0).0;

            let mut engine = tree_engine(SearchConfig {
                hash_size_mb: 1,
                ..SearchConfig::default()
            });
            // Fill the table from shallower searches first
            for depth in 1..=4 {
                engine.best_move(&mut position, depth).unwrap();
            }
            let result = engine.best_move(&mut position, 5).unwrap();

            assert_eq!(result.score, expected, "seed {seed}");
            assert!(result.stats.tt_hits > 0);
        }
    }

    #[test]
    fn test_minimax_mode_with_table() {
        let mut position = TreePosition::new(11);
        let expected = minimax(&mut position, 4, 0).0;

        let mut engine = tree_engine(SearchConfig {
            alpha_beta: false,
            hash_size_mb: 1,
            ..SearchConfig::default()
        });
        assert_eq!(engine.best_move(&mut position, 4).unwrap().score, expected);
        assert_eq!(engine.best_move(&mut position, 4).unwrap().score, expected);
    }
}
