//! Renju AI engine
//!
//! A five-in-a-row engine for the 15x15 board with Renju restrictions:
//! - Five in a row wins; for Black it must be exactly five
//! - Black may not play overlines, double-fours or double-threes
//!   (a move that completes an exact five is exempt from the last two)
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection and Black's forbidden moves
//! - [`eval`]: Line pattern scoring and threat detection
//! - [`search`]: Candidate ordering, forcing moves, alpha-beta
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: Move history, turn order and results
//!
//! # Quick Start
//!
//! ```
//! use renju::{AIEngine, Difficulty, Game, GameResult};
//!
//! let mut game = Game::default();
//! game.play_at(7, 7).unwrap();
//!
//! // The engine answers as White
//! let engine = AIEngine::new(Difficulty::Easy);
//! let reply = game.play_engine(&engine).unwrap();
//! println!("AI plays at {}", reply.best_move);
//! assert_eq!(game.result(), GameResult::Ongoing);
//! ```
//!
//! # Search Priority
//!
//! 1. Center point on an empty board
//! 2. Forcing moves: win, block a five, open four, block an open four,
//!    block a double threat, make a double threat
//! 3. Alpha-Beta search with iterative deepening under a time limit

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, CENTER};
pub use config::{Difficulty, SearchLimits};
pub use engine::{is_forbidden_move, request_move, AIEngine, MoveResult, SearchType};
pub use error::EngineError;
pub use game::{Game, GameResult, MoveRecord};
pub use rules::Foul;
