//! Zobrist hashing for position identification
//!
//! Every (cell, color) pair owns a random 64-bit key; a position's hash is
//! the XOR of the keys of its stones. Placing and removing a stone are the
//! same XOR, so the hash is maintained incrementally during search.
//!
//! # Example
//!
//! ```
//! use renju::board::{Board, Pos, Stone};
//! use renju::search::ZobristTable;
//!
//! let zt = ZobristTable::global();
//! let mut board = Board::new();
//! let empty = zt.hash(&board);
//!
//! let pos = Pos::new(7, 7);
//! board.place_stone(pos, Stone::Black);
//! assert_eq!(zt.toggle(empty, pos, Stone::Black), zt.hash(&board));
//! ```

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};

static GLOBAL: OnceLock<ZobristTable> = OnceLock::new();

/// Random keys for every (cell, color) pair plus one per side to move.
#[derive(Debug, Clone)]
pub struct ZobristTable {
    /// `[color][cell]`, black first
    stones: [[u64; TOTAL_CELLS]; 2],
    /// Mixed into cache keys so the same stones with a different mover differ
    side: [u64; 2],
}

impl ZobristTable {
    /// Fill a table from the given generator.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        let mut stones = [[0u64; TOTAL_CELLS]; 2];
        for color in stones.iter_mut() {
            for key in color.iter_mut() {
                *key = rng.random();
            }
        }
        let side = [rng.random(), rng.random()];
        Self { stones, side }
    }

    /// Reproducible table, for tests and debugging.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Process-wide table, randomly seeded on first use.
    pub fn global() -> &'static ZobristTable {
        GLOBAL.get_or_init(|| Self::from_rng(&mut rand::rng()))
    }

    /// Key of a single stone. Empty cells have no key.
    #[inline]
    #[must_use]
    pub fn stone_key(&self, pos: Pos, stone: Stone) -> u64 {
        match stone {
            Stone::Empty => 0,
            _ => self.stones[stone.index()][pos.to_index()],
        }
    }

    /// Key for the side to move.
    #[inline]
    #[must_use]
    pub fn side_key(&self, side: Stone) -> u64 {
        match side {
            Stone::Empty => 0,
            _ => self.side[side.index()],
        }
    }

    /// Full hash of the stones on `board`.
    #[must_use]
    pub fn hash(&self, board: &Board) -> u64 {
        let black = board
            .black
            .iter_ones()
            .fold(0, |h, pos| h ^ self.stone_key(pos, Stone::Black));
        board
            .white
            .iter_ones()
            .fold(black, |h, pos| h ^ self.stone_key(pos, Stone::White))
    }

    /// Hash after adding or removing `stone` at `pos`.
    #[inline]
    #[must_use]
    pub fn toggle(&self, hash: u64, pos: Pos, stone: Stone) -> u64 {
        hash ^ self.stone_key(pos, stone)
    }

    /// Cache key for a board hash with `side` to move.
    #[inline]
    #[must_use]
    pub fn position_key(&self, hash: u64, side: Stone) -> u64 {
        hash ^ self.side_key(side)
    }
}
