//! Main AI engine
//!
//! One request runs through these stages, stopping at the first that
//! produces a move:
//!
//! 1. **Opening**: an empty board is answered with the center point
//! 2. **Tactic**: a forcing move (win, block, open four, double threat)
//! 3. **Alpha-Beta**: time-bounded iterative deepening
//! 4. **Fallback**: the center, or the best ordered candidate if the center
//!    is not playable, when no iteration finished in time
//!
//! # Example
//!
//! ```
//! use renju::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let engine = AIEngine::new(Difficulty::Easy);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // Black just moved; the engine answers for White
//! let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();
//! assert!(board.is_empty(result.best_move));
//! println!("{} via {:?} in {}ms", result.best_move, result.search_type, result.time_ms);
//! ```

use std::fmt;
use std::time::Instant;

use tracing::info;

use crate::board::{Board, Pos, Stone, BOARD_SIZE, CENTER, TOTAL_CELLS};
use crate::config::{Difficulty, SearchLimits};
use crate::error::EngineError;
use crate::rules::is_forbidden;
use crate::search::{generate_candidates, is_foul_for, SearchResult, Searcher, TacticKind};

/// Which stage produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board, center point
    Opening,
    /// Forcing move from the tactic scan
    Tactic(TacticKind),
    /// Deepest completed alpha-beta iteration
    AlphaBeta,
    /// No iteration finished in time
    Fallback,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::Opening => f.write_str("opening"),
            SearchType::Tactic(kind) => write!(f, "tactic ({kind})"),
            SearchType::AlphaBeta => f.write_str("alpha-beta"),
            SearchType::Fallback => f.write_str("fallback"),
        }
    }
}

/// Result of a move request with search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Score from the engine's side; 0 unless the search produced the move
    pub score: i64,
    pub search_type: SearchType,
    /// Deepest completed iteration
    pub depth: u8,
    /// Nodes evaluated
    pub nodes: u64,
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn instant(pos: Pos, search_type: SearchType, start: Instant) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type,
            depth: 0,
            nodes: 0,
            time_ms: start.elapsed().as_millis() as u64,
        }
    }

    #[inline]
    fn from_search(pos: Pos, search_type: SearchType, result: &SearchResult, start: Instant) -> Self {
        Self {
            best_move: pos,
            score: result.score,
            search_type,
            depth: result.depth,
            nodes: result.stats.nodes,
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Renju AI engine. Holds only its limits; every request builds a fresh
/// search context, so nothing carries over between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AIEngine {
    limits: SearchLimits,
}

impl AIEngine {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_limits(difficulty.limits())
    }

    #[must_use]
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Switch to the limits of `difficulty`, keeping the Renju setting.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        let renju = self.limits.renju;
        self.limits = difficulty.limits().with_renju(renju);
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Best move for the side that did not just move.
    pub fn get_move(&self, board: &Board, last_mover: Stone) -> Result<Pos, EngineError> {
        self.get_move_with_stats(board, last_mover).map(|r| r.best_move)
    }

    /// Best move with statistics about how it was found.
    ///
    /// The time budget covers the whole request, tactic scan included.
    /// Fails with `InvalidColor` if `last_mover` is not a player, and with
    /// `GameOver` if the engine has no legal cell left to play.
    pub fn get_move_with_stats(&self, board: &Board, last_mover: Stone) -> Result<MoveResult, EngineError> {
        let start = Instant::now();
        let deadline = start + self.limits.time_limit;
        let mut searcher = Searcher::with_deadline(board, last_mover, self.limits, deadline)?;

        if searcher.stone_count() == 0 {
            let result = MoveResult::instant(CENTER, SearchType::Opening, start);
            log_result(&result);
            return Ok(result);
        }

        if let Some((pos, kind)) = searcher.find_tactic() {
            let result = MoveResult::instant(pos, SearchType::Tactic(kind), start);
            log_result(&result);
            return Ok(result);
        }

        let search = searcher.search();
        let result = match search.best_move {
            Some(pos) => MoveResult::from_search(pos, SearchType::AlphaBeta, &search, start),
            None => {
                let color = searcher.color();
                let center_open = board.is_empty(CENTER)
                    && !is_foul_for(board, CENTER, color, self.limits.renju);
                let pos = if center_open {
                    CENTER
                } else {
                    generate_candidates(
                        board,
                        color,
                        searcher.stone_count(),
                        TOTAL_CELLS,
                        None,
                        self.limits.renju,
                    )
                    .first()
                    .copied()
                    .ok_or(EngineError::GameOver)?
                };
                MoveResult::from_search(pos, SearchType::Fallback, &search, start)
            }
        };
        log_result(&result);
        Ok(result)
    }
}

fn log_result(result: &MoveResult) {
    info!(
        nodes = result.nodes,
        time_ms = result.time_ms,
        score = result.score,
        depth = result.depth,
        found_by = %result.search_type,
        "engine played {}",
        result.best_move
    );
}

/// Would a Black stone at (row, col) be forbidden? Off-board and occupied
/// cells are reported as forbidden.
pub fn is_forbidden_move(row: i32, col: i32, board: &Board) -> bool {
    match Pos::try_new(row, col) {
        Ok(pos) => is_forbidden(board, pos),
        Err(_) => true,
    }
}

/// One-shot request over a signed grid (-1 black, 1 white, 0 empty).
/// `last_mover` uses the same encoding; `level` is clamped into 0..=2.
pub fn request_move(
    grid: &[[i8; BOARD_SIZE]; BOARD_SIZE],
    last_mover: i8,
    level: u8,
) -> Result<Pos, EngineError> {
    let last_mover = Stone::try_from(last_mover)?;
    let board = Board::from_signs(grid)?;
    AIEngine::new(Difficulty::from_level(level)).get_move(&board, last_mover)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in stones {
            board.place_stone(Pos::new(r, c), s);
        }
        board
    }

    #[test]
    fn test_empty_board_plays_center() {
        let engine = AIEngine::new(Difficulty::Hard);
        let result = engine.get_move_with_stats(&Board::new(), Stone::White).unwrap();
        assert_eq!(result.best_move, Pos::new(7, 7));
        assert_eq!(result.search_type, SearchType::Opening);
    }

    #[test]
    fn test_invalid_mover_fails_fast() {
        let engine = AIEngine::default();
        assert_eq!(
            engine.get_move(&Board::new(), Stone::Empty),
            Err(EngineError::InvalidColor(0))
        );
    }

    #[test]
    fn test_reply_next_to_single_stone() {
        let engine = AIEngine::new(Difficulty::from_level(0));
        let board = board_with(&[(7, 7, Stone::Black)]);
        let start = Instant::now();
        let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();
        assert!(start.elapsed() < Duration::from_millis(2000), "took {:?}", start.elapsed());

        let pos = result.best_move;
        assert!(board.is_empty(pos));
        assert!(
            (pos.row as i32 - 7).abs() <= 1 && (pos.col as i32 - 7).abs() <= 1,
            "{} is not adjacent to the center",
            pos
        );
    }

    #[test]
    fn test_blocks_open_four() {
        let engine = AIEngine::new(Difficulty::Medium);
        let board = board_with(&[
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (7, 7, Stone::Black),
            (7, 8, Stone::Black),
            (6, 6, Stone::White),
            (8, 8, Stone::White),
            (6, 8, Stone::White),
        ]);
        let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();
        assert!(
            result.best_move == Pos::new(7, 4) || result.best_move == Pos::new(7, 9),
            "expected a block, got {}",
            result.best_move
        );
        assert_eq!(result.search_type, SearchType::Tactic(TacticKind::BlockWin));
    }

    #[test]
    fn test_takes_own_win_over_block() {
        let engine = AIEngine::new(Difficulty::Easy);
        let board = board_with(&[
            (2, 2, Stone::White),
            (2, 3, Stone::White),
            (2, 4, Stone::White),
            (2, 5, Stone::White),
            (2, 1, Stone::Black),
            (9, 2, Stone::Black),
            (9, 3, Stone::Black),
            (9, 4, Stone::Black),
            (9, 5, Stone::Black),
        ]);
        let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();
        assert_eq!(result.best_move, Pos::new(2, 6));
        assert_eq!(result.search_type, SearchType::Tactic(TacticKind::Win));
    }

    #[test]
    fn test_zero_budget_falls_back() {
        let limits = Difficulty::Hard.limits().with_time_limit(Duration::ZERO);
        let engine = AIEngine::with_limits(limits);

        let board = board_with(&[(3, 3, Stone::Black)]);
        let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();
        assert_eq!(result.search_type, SearchType::Fallback);
        assert_eq!(result.best_move, CENTER);

        // Center taken: still an empty cell
        let board = board_with(&[(7, 7, Stone::Black), (8, 8, Stone::White), (6, 9, Stone::Black)]);
        let result = engine.get_move_with_stats(&board, Stone::Black).unwrap();
        assert_eq!(result.search_type, SearchType::Fallback);
        assert!(board.is_empty(result.best_move));
    }

    #[test]
    fn test_is_forbidden_move() {
        let board = board_with(&[
            (7, 6, Stone::Black),
            (7, 8, Stone::Black),
            (6, 7, Stone::Black),
            (8, 7, Stone::Black),
        ]);
        assert!(is_forbidden_move(7, 7, &board));
        assert!(!is_forbidden_move(0, 0, &board));
        assert!(is_forbidden_move(7, 6, &board));
        assert!(is_forbidden_move(-1, 3, &board));
        assert!(is_forbidden_move(3, 15, &board));
    }

    #[test]
    fn test_engine_never_plays_foul_as_black() {
        // White just moved; Black's double-three cell must be avoided
        let board = board_with(&[
            (7, 6, Stone::Black),
            (7, 8, Stone::Black),
            (6, 7, Stone::Black),
            (8, 7, Stone::Black),
            (0, 0, Stone::White),
            (0, 14, Stone::White),
            (14, 0, Stone::White),
            (14, 14, Stone::White),
        ]);
        let engine = AIEngine::new(Difficulty::Easy);
        let pos = engine.get_move(&board, Stone::White).unwrap();
        assert_ne!(pos, Pos::new(7, 7));
        assert!(!is_forbidden(&board, pos));
    }

    #[test]
    fn test_request_move_validates_color() {
        let grid = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        assert_eq!(request_move(&grid, 0, 1), Err(EngineError::InvalidColor(0)));
        assert_eq!(request_move(&grid, 5, 1), Err(EngineError::InvalidColor(5)));
        assert_eq!(request_move(&grid, 1, 9), Ok(CENTER));
    }

    #[test]
    fn test_set_difficulty_keeps_rules() {
        let mut engine = AIEngine::with_limits(Difficulty::Easy.limits().with_renju(false));
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.limits().max_depth, 7);
        assert!(!engine.limits().renju);
    }
}
