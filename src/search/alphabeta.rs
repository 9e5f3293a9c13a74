//! Alpha-Beta search with iterative deepening and transposition table
//!
//! The `Searcher` owns a private copy of the position together with
//! everything derived from it: the Zobrist hash, the stone count and the
//! per-line score cache. Moves are made and unmade on that copy, keeping
//! all of it in step, so a node costs four line rescans instead of a full
//! board evaluation.
//!
//! Time is checked at every node. Once the deadline passes, pending nodes
//! collapse to their static evaluation and the interrupted iteration is
//! thrown away.
//!
//! # Example
//!
//! ```
//! use renju::board::{Board, Pos, Stone};
//! use renju::config::Difficulty;
//! use renju::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // Black just moved, so the searcher plays White
//! let limits = Difficulty::Easy.limits().with_max_depth(2);
//! let mut searcher = Searcher::new(&board, Stone::Black, limits).unwrap();
//! let result = searcher.search();
//! assert!(result.best_move.is_some());
//! ```

use std::time::Instant;

use tracing::{debug, error, trace};

use crate::board::{Board, Pos, Stone};
use crate::config::SearchLimits;
use crate::error::EngineError;
use crate::eval::{evaluate, LineScores, PatternScore};
use crate::rules::winner_with;

use super::movegen::generate_candidates;
use super::tactics::{find_immediate_move, TacticKind};
use super::tt::{EntryType, Probe, TTStats, TranspositionTable};
use super::zobrist::ZobristTable;

/// Bound for the alpha-beta window, far outside any reachable score
pub const INF: i64 = 1_000_000_000_000_000;

/// Search counters for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited by `alpha_beta`
    pub nodes: u64,
    /// Cache entries that answered a node outright
    pub tt_cutoffs: u64,
    /// Sibling loops cut short by alpha >= beta
    pub beta_cutoffs: u64,
}

/// Outcome of an iterative-deepening search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move of the deepest completed iteration
    pub best_move: Option<Pos>,
    /// Its score from the searcher's point of view
    pub score: i64,
    /// Deepest iteration that ran to completion (0 if none)
    pub depth: u8,
    /// Whether the deadline cut the search short
    pub timed_out: bool,
    pub stats: SearchStats,
}

/// Single-use search context for one move request.
pub struct Searcher {
    board: Board,
    hash: u64,
    stone_count: u32,
    /// Side the searcher plays
    color: Stone,
    lines: LineScores,
    tt: TranspositionTable,
    zobrist: &'static ZobristTable,
    limits: SearchLimits,
    deadline: Instant,
    timed_out: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Build a searcher over a copy of `board`. `last_mover` is the color
    /// that just played; the searcher plays the other one. The time budget
    /// starts now.
    pub fn new(board: &Board, last_mover: Stone, limits: SearchLimits) -> Result<Self, EngineError> {
        Self::with_deadline(board, last_mover, limits, Instant::now() + limits.time_limit)
    }

    /// Like [`Searcher::new`] with the search cut off at `deadline`.
    pub fn with_deadline(
        board: &Board,
        last_mover: Stone,
        limits: SearchLimits,
        deadline: Instant,
    ) -> Result<Self, EngineError> {
        if !last_mover.is_player() {
            return Err(EngineError::InvalidColor(last_mover.sign()));
        }
        let zobrist = ZobristTable::global();
        Ok(Self {
            board: *board,
            hash: zobrist.hash(board),
            stone_count: board.stone_count(),
            color: last_mover.opponent(),
            lines: LineScores::new(board),
            tt: TranspositionTable::new(limits.tt_capacity),
            zobrist,
            limits,
            deadline,
            timed_out: false,
            stats: SearchStats::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn stone_count(&self) -> u32 {
        self.stone_count
    }

    /// Color the searcher moves for
    pub fn color(&self) -> Stone {
        self.color
    }

    pub fn line_scores(&self) -> &LineScores {
        &self.lines
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Place `color` at `pos`, keeping hash, count and line scores in step.
    /// On error nothing changes.
    pub fn make_move(&mut self, pos: Pos, color: Stone) -> Result<(), EngineError> {
        self.board.try_place(pos, color)?;
        self.hash = self.zobrist.toggle(self.hash, pos, color);
        self.stone_count += 1;
        self.lines.update(&self.board, pos);
        Ok(())
    }

    /// Take back a `color` stone at `pos`. On error nothing changes.
    pub fn undo_move(&mut self, pos: Pos, color: Stone) -> Result<(), EngineError> {
        if !color.is_player() || self.board.get(pos) != color {
            return Err(EngineError::StoneMismatch { pos, expected: color });
        }
        self.board.remove_stone(pos);
        self.hash = self.zobrist.toggle(self.hash, pos, color);
        self.stone_count -= 1;
        self.lines.update(&self.board, pos);
        Ok(())
    }

    /// Static evaluation from `color`'s point of view.
    #[inline]
    pub fn evaluate(&self, color: Stone) -> i64 {
        evaluate(&self.lines, color)
    }

    /// Poll the deadline. Once passed it stays passed.
    #[inline]
    fn is_time_up(&mut self) -> bool {
        if !self.timed_out && Instant::now() >= self.deadline {
            self.timed_out = true;
        }
        self.timed_out
    }

    /// Forcing move for the searcher's side, if the position has one.
    pub fn find_tactic(&self) -> Option<(Pos, TacticKind)> {
        find_immediate_move(&self.board, self.color, self.stone_count, self.limits.renju)
    }

    /// Ordered candidates for `color` at the current position.
    pub fn candidates(&self, color: Stone, preferred: Option<Pos>) -> Vec<Pos> {
        generate_candidates(
            &self.board,
            color,
            self.stone_count,
            self.limits.max_candidates,
            preferred,
            self.limits.renju,
        )
    }

    /// Iterative deepening from depth 1 up to the configured maximum.
    ///
    /// Each iteration is seeded with the previous best move. Only completed
    /// iterations count: one interrupted by the deadline is discarded. The
    /// deadline is the one fixed at construction.
    pub fn search(&mut self) -> SearchResult {
        self.stats = SearchStats::default();

        let mut best: Option<(Pos, i64)> = None;
        let mut completed = 0;

        for depth in 1..=self.limits.max_depth {
            let pass = self.search_root(depth, best.map(|(pos, _)| pos));
            if self.timed_out {
                debug!(depth, nodes = self.stats.nodes, "iteration aborted on deadline");
                break;
            }
            let Some((pos, score)) = pass else {
                break;
            };
            debug!(depth, %pos, score, nodes = self.stats.nodes, "iteration complete");
            best = Some((pos, score));
            completed = depth;
        }

        SearchResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, score)| score),
            depth: completed,
            timed_out: self.timed_out,
            stats: self.stats,
        }
    }

    /// One full-window pass at the root.
    fn search_root(&mut self, depth: u8, preferred: Option<Pos>) -> Option<(Pos, i64)> {
        let color = self.color;
        let mut alpha = -INF;
        let beta = INF;
        let mut best: Option<(Pos, i64)> = None;

        for pos in self.candidates(color, preferred) {
            if self.is_time_up() {
                break;
            }
            let Some(score) = self.search_child(pos, color, depth, alpha, beta) else {
                continue;
            };
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
            alpha = alpha.max(score);
        }
        best
    }

    /// Play `pos`, search the reply, take it back. Returns the score from
    /// `color`'s side, or `None` if the move could not be made.
    fn search_child(&mut self, pos: Pos, color: Stone, depth: u8, alpha: i64, beta: i64) -> Option<i64> {
        if let Err(err) = self.make_move(pos, color) {
            error!(%pos, %err, "candidate rejected");
            return None;
        }
        let score = -self.alpha_beta(color.opponent(), depth - 1, -beta, -alpha);
        if let Err(err) = self.undo_move(pos, color) {
            error!(%pos, %err, "failed to take back move");
        }
        Some(score)
    }

    /// Negamax alpha-beta. The score is from `color`'s point of view.
    pub fn alpha_beta(&mut self, color: Stone, depth: u8, mut alpha: i64, mut beta: i64) -> i64 {
        if self.is_time_up() {
            return self.evaluate(color);
        }
        self.stats.nodes += 1;

        if let Some(winner) = winner_with(&self.board, self.limits.renju) {
            return if winner == color {
                PatternScore::FIVE
            } else {
                -PatternScore::FIVE
            };
        }
        if depth == 0 {
            return self.evaluate(color);
        }

        let key = self.zobrist.position_key(self.hash, color);
        let entry = self.tt.probe(key);
        if let Some(entry) = entry {
            match entry.apply(depth, alpha, beta) {
                Probe::Cutoff(score) => {
                    self.stats.tt_cutoffs += 1;
                    return score;
                }
                Probe::Window { alpha: a, beta: b } => {
                    alpha = a;
                    beta = b;
                }
            }
        }
        let alpha_orig = alpha;

        let candidates = self.candidates(color, entry.map(|e| e.best_move));
        let mut best_score = -INF;
        let mut best_move = None;

        for pos in candidates {
            if self.is_time_up() {
                break;
            }
            let Some(score) = self.search_child(pos, color, depth, alpha, beta) else {
                continue;
            };
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        let Some(best_move) = best_move else {
            return self.evaluate(color);
        };

        if !self.timed_out {
            let entry_type = EntryType::classify(best_score, alpha_orig, beta);
            trace!(depth, score = best_score, ?entry_type, "tt store");
            self.tt.store(key, depth, best_score, entry_type, best_move);
        }
        best_score
    }
}
