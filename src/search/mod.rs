//! Search module for the Renju AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Candidate generation and move ordering
//! - Forcing-move scan
//! - Alpha-Beta search with iterative deepening

pub mod alphabeta;
pub mod movegen;
pub mod tactics;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use movegen::{generate_candidates, is_foul_for, neighbor_distance, quick_score};
pub use tactics::{find_immediate_move, TacticKind};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
