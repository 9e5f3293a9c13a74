//! Per-color occupancy bits

use super::Pos;

/// One bit per cell, indexed row-major. The 225 cells fit in 4 words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    words: [u64; 4],
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { words: [0; 4] }
    }

    #[inline]
    fn locate(pos: Pos) -> (usize, u64) {
        let idx = pos.to_index();
        (idx / 64, 1 << (idx % 64))
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let (word, mask) = Self::locate(pos);
        self.words[word] |= mask;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let (word, mask) = Self::locate(pos);
        self.words[word] &= !mask;
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let (word, mask) = Self::locate(pos);
        self.words[word] & mask != 0
    }

    /// Number of occupied cells
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Occupied cells in row-major order
    pub fn iter_ones(&self) -> impl Iterator<Item = Pos> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(Pos::from_index(w * 64 + bit))
            })
        })
    }
}
