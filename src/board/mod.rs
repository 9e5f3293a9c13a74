//! Board representation for Renju

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::EngineError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Center point, the opening move and the search fallback
pub const CENTER: Pos = Pos { row: 7, col: 7 };

/// Line directions as (dr, dc): horizontal, diagonal, vertical, anti-diagonal
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 1), (1, 0), (1, -1)];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Signed encoding: Black = -1, White = +1, Empty = 0
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Stone::Black => -1,
            Stone::White => 1,
            Stone::Empty => 0,
        }
    }

    /// Array slot for per-color tables (Black = 0, White = 1)
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Stone::White => 1,
            _ => 0,
        }
    }

    /// True for Black and White
    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

impl TryFrom<i8> for Stone {
    type Error = EngineError;

    /// Decode a player color. Only -1 and +1 are accepted.
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Stone::Black),
            1 => Ok(Stone::White),
            other => Err(EngineError::InvalidColor(other)),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Bounds-checked constructor for coordinates coming from outside the engine.
    pub fn try_new(row: i32, col: i32) -> Result<Self, EngineError> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step `n` cells along a direction, `None` when that leaves the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, n: i32) -> Option<Pos> {
        let r = self.row as i32 + dr * n;
        let c = self.col as i32 + dc * n;
        if Self::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Manhattan distance to the center point
    #[inline]
    pub fn center_distance(self) -> i32 {
        (self.row as i32 - CENTER.row as i32).abs() + (self.col as i32 - CENTER.col as i32).abs()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
