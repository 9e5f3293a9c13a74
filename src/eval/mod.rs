//! Evaluation module for Renju positions
//!
//! - Line shape scoring (fives, fours, threes, twos)
//! - Incremental per-line score cache
//! - Tactical threat detection for candidate moves

pub mod heuristic;
pub mod lines;
pub mod patterns;
pub mod threat;

pub use heuristic::{evaluate, evaluate_board, evaluate_lines, net_score};
pub use lines::{LineKind, LineScores};
pub use patterns::{score_line, PatternScore};
pub use threat::{is_double_threat, threat_count, ThreatCount};
