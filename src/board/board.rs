//! Board structure

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};
use crate::error::EngineError;

/// 15x15 game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Build a board from a signed grid (Black = -1, White = +1, Empty = 0).
    pub fn from_signs(grid: &[[i8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, EngineError> {
        let mut board = Self::new();
        for (r, row) in grid.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                let stone = Stone::try_from(cell)?;
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        Ok(board)
    }

    /// Signed grid view of the board, the inverse of `from_signs`.
    pub fn to_signs(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.get(Pos::new(r as u8, c as u8)).sign();
            }
        }
        grid
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` off the board.
    #[inline]
    pub fn get_checked(&self, row: i32, col: i32) -> Option<Stone> {
        if Pos::is_valid(row, col) {
            Some(self.get(Pos::new(row as u8, col as u8)))
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without any legality checks.
    /// Use `try_place` when the cell may be occupied.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Place a stone on an empty cell. On error the board is unchanged.
    pub fn try_place(&mut self, pos: Pos, stone: Stone) -> Result<(), EngineError> {
        if !stone.is_player() {
            return Err(EngineError::InvalidColor(stone.sign()));
        }
        if !self.is_empty(pos) {
            return Err(EngineError::Occupied(pos));
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == BOARD_SIZE * BOARD_SIZE
    }

    /// True if any stone lies within `dist` cells (Chebyshev) of `pos`.
    pub fn has_neighbor(&self, pos: Pos, dist: i32) -> bool {
        let r0 = (pos.row as i32 - dist).max(0);
        let r1 = (pos.row as i32 + dist).min(BOARD_SIZE as i32 - 1);
        let c0 = (pos.col as i32 - dist).max(0);
        let c1 = (pos.col as i32 + dist).min(BOARD_SIZE as i32 - 1);
        for r in r0..=r1 {
            for c in c0..=c1 {
                if !self.is_empty(Pos::new(r as u8, c as u8)) {
                    return true;
                }
            }
        }
        false
    }
}

impl fmt::Display for Board {
    /// Text diagram: `X` black, `O` white, `.` empty, with row/column labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{:3}", c)?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{:2} ", r)?;
            for c in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
