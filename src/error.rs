//! Error type shared by the board, rules, search and game layers

use thiserror::Error;

use crate::board::{Pos, Stone};
use crate::rules::Foul;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A player color was required but something else was given
    #[error("invalid color {0}: expected -1 (black) or 1 (white)")]
    InvalidColor(i8),

    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    /// Undo of a stone that is not on the board
    #[error("no {expected:?} stone at {pos}")]
    StoneMismatch { pos: Pos, expected: Stone },

    #[error("forbidden move for black: {0}")]
    Forbidden(Foul),

    #[error("the game is already over")]
    GameOver,

    #[error("unknown difficulty {0:?}: expected easy, medium, hard or 0-2")]
    InvalidDifficulty(String),
}
