//! Transposition table for caching search results
//!
//! Results are keyed by position key (stone hash mixed with the side to
//! move). Capacity is a hard bound: once the table holds more than its
//! capacity it is cleared entirely before the next insert.
//!
//! # Example
//!
//! ```
//! use renju::board::Pos;
//! use renju::search::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(1024);
//! tt.store(0xABCD, 3, 120, EntryType::Exact, Pos::new(7, 7));
//!
//! let entry = tt.probe(0xABCD).unwrap();
//! assert_eq!(entry.score, 120);
//! assert_eq!(entry.best_move, Pos::new(7, 7));
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::board::Pos;

/// How a stored score relates to the true value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

impl EntryType {
    /// Classify a node result against the window it was searched with.
    #[inline]
    pub fn classify(score: i64, alpha_orig: i64, beta: i64) -> Self {
        if score <= alpha_orig {
            EntryType::UpperBound
        } else if score >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        }
    }
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub score: i64,
    /// Remaining depth the score was searched to
    pub depth: u8,
    pub entry_type: EntryType,
    /// Best move found, used first when ordering on a revisit
    pub best_move: Pos,
}

/// Outcome of consulting an entry at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The stored score answers the node outright
    Cutoff(i64),
    /// Window after applying the entry's bound
    Window { alpha: i64, beta: i64 },
}

impl TTEntry {
    /// Apply this entry at a node searched to `depth` with `(alpha, beta)`.
    /// Shallower entries leave the window untouched.
    pub fn apply(&self, depth: u8, mut alpha: i64, mut beta: i64) -> Probe {
        if self.depth < depth {
            return Probe::Window { alpha, beta };
        }
        match self.entry_type {
            EntryType::Exact => return Probe::Cutoff(self.score),
            EntryType::LowerBound => alpha = alpha.max(self.score),
            EntryType::UpperBound => beta = beta.min(self.score),
        }
        if alpha >= beta {
            Probe::Cutoff(self.score)
        } else {
            Probe::Window { alpha, beta }
        }
    }
}

/// Bounded hash map of search results.
#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
    capacity: usize,
    hits: u64,
    clears: u32,
}

impl TranspositionTable {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            hits: 0,
            clears: 0,
        }
    }

    /// Look up a position key.
    pub fn probe(&mut self, key: u64) -> Option<TTEntry> {
        let entry = self.entries.get(&key).copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    /// Store a result, replacing any entry for the same key. Clears the
    /// whole table first if it has grown past capacity.
    pub fn store(&mut self, key: u64, depth: u8, score: i64, entry_type: EntryType, best_move: Pos) {
        if self.entries.len() > self.capacity {
            debug!(entries = self.entries.len(), capacity = self.capacity, "transposition table full, clearing");
            self.entries.clear();
            self.clears += 1;
        }
        self.entries.insert(
            key,
            TTEntry {
                score,
                depth,
                entry_type,
                best_move,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> TTStats {
        TTStats {
            capacity: self.capacity,
            used: self.entries.len(),
            hits: self.hits,
            clears: self.clears,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub capacity: usize,
    /// Entries currently held
    pub used: usize,
    /// Probes that found an entry
    pub hits: u64,
    /// Times the table was wiped for exceeding capacity
    pub clears: u32,
}
