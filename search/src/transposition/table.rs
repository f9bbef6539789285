use std::mem::size_of;

use evaluation::scores::is_mate_score;

/// Indicates whether the stored value is exact or a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// True minimax value (alpha < value < beta)
    Exact,
    /// Value >= beta (beta cutoff)
    Lower,
    /// Value <= alpha (all moves failed)
    Upper,
}

/// Result from probing the transposition table.
/// Caller should check `depth` to decide if `value`/`bound` are trustworthy for cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult<M> {
    /// Score from searching this position (mate-adjusted for current ply)
    pub value: i16,
    pub bound: Bound,
    /// Best move found from previous search
    pub best_move: Option<M>,
    /// Search depth that produced this result
    pub depth: u8,
}

#[derive(Debug, Clone, Copy)]
struct TTEntry<M> {
    key: u64,
    fingerprint: u64,
    depth: u8,
    value: i16,
    bound: Bound,
    best_move: Option<M>,
}

impl<M> TTEntry<M> {
    #[inline(always)]
    fn matches(&self, key: u64, fingerprint: u64) -> bool {
        self.key == key && self.fingerprint == fingerprint
    }
}

const CLUSTER_SIZE: usize = 4;
const MIN_BUCKETS: usize = 1024;
const HASHFULL_SAMPLE: usize = 1000;

/// Hash table for memoizing search results.
/// Uses 4-entry clusters; a full cluster gives up its shallowest entry.
///
/// <https://www.chessprogramming.org/Transposition_Table>
pub struct TranspositionTable<M> {
    entries: Vec<Option<TTEntry<M>>>,
    buckets: usize,
    occupied: usize,
}

impl<M: Copy> TranspositionTable<M> {
    /// Creates a new TT with the given size in megabytes.
    pub fn new(mb: usize) -> Self {
        let bytes = mb.saturating_mul(1024 * 1024);
        let entry_size = size_of::<Option<TTEntry<M>>>().max(1);
        let max_entries = (bytes / entry_size).max(CLUSTER_SIZE);

        Self::with_buckets((max_entries / CLUSTER_SIZE).max(MIN_BUCKETS))
    }

    /// Creates a TT with exactly `buckets` clusters.
    pub fn with_buckets(buckets: usize) -> Self {
        let buckets = buckets.max(1);
        Self {
            entries: vec![None; buckets * CLUSTER_SIZE],
            buckets,
            occupied: 0,
        }
    }

    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.occupied = 0;
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of occupied entries.
    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Returns hash table fill rate in permille (0-1000).
    ///
    /// Samples the first 1000 entries to get an approximation of the fill rate.
    pub fn hashfull(&self) -> u16 {
        let sample_size = self.entries.len().min(HASHFULL_SAMPLE);
        let sample = &self.entries[..sample_size];
        let filled_count = sample.iter().filter(|e| e.is_some()).count();

        ((filled_count * 1000) / sample_size) as u16
    }

    #[inline(always)]
    fn cluster(&self, key: u64) -> std::ops::Range<usize> {
        let base = (key % self.buckets as u64) as usize * CLUSTER_SIZE;
        base..base + CLUSTER_SIZE
    }

    /// Looks up an entry whose key and fingerprint both match.
    /// Mate scores come back relative to `ply`.
    pub fn probe(&self, key: u64, fingerprint: u64, ply: u8) -> Option<ProbeResult<M>> {
        let entry = self.entries[self.cluster(key)]
            .iter()
            .flatten()
            .find(|e| e.matches(key, fingerprint))?;

        Some(ProbeResult {
            value: from_tt(entry.value, ply),
            bound: entry.bound,
            best_move: entry.best_move,
            depth: entry.depth,
        })
    }

    /// Stores a search result. A matching entry is always refreshed,
    /// otherwise an empty slot is used, otherwise the shallowest entry goes.
    #[allow(clippy::too_many_arguments)]
    pub fn store(
        &mut self,
        key: u64,
        fingerprint: u64,
        depth: u8,
        ply: u8,
        value: i16,
        bound: Bound,
        best_move: Option<M>,
    ) {
        let new_entry = TTEntry {
            key,
            fingerprint,
            depth,
            value: to_tt(value, ply),
            bound,
            best_move,
        };

        let range = self.cluster(key);
        let cluster = &mut self.entries[range];

        if let Some(slot) = cluster
            .iter_mut()
            .find(|slot| matches!(slot, Some(e) if e.matches(key, fingerprint)))
        {
            *slot = Some(new_entry);
            return;
        }

        if let Some(slot) = cluster.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(new_entry);
            self.occupied += 1;
            return;
        }

        let mut victim_idx = 0;
        let mut min_depth = u8::MAX;
        for (i, slot) in cluster.iter().enumerate() {
            if let Some(entry) = slot {
                if entry.depth < min_depth {
                    min_depth = entry.depth;
                    victim_idx = i;
                }
            }
        }
        cluster[victim_idx] = Some(new_entry);
    }
}

// Mate scores are stored relative to the node so they stay valid when the
// same position is reached at a different ply.
#[inline(always)]
fn to_tt(value: i16, ply: u8) -> i16 {
    if !is_mate_score(value) {
        value
    } else if value > 0 {
        value + ply as i16
    } else {
        value - ply as i16
    }
}

#[inline(always)]
fn from_tt(value: i16, ply: u8) -> i16 {
    if !is_mate_score(value) {
        value
    } else if value > 0 {
        value - ply as i16
    } else {
        value + ply as i16
    }
}
