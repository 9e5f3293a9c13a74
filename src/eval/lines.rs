//! Per-line score cache
//!
//! Every row, column, diagonal and anti-diagonal has its heuristic score
//! cached per color. The total evaluation for a color is the sum of its four
//! arrays. Placing or removing a stone only changes the four lines through
//! that cell, so `update` rescores exactly those.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

use super::patterns::{score_line, BLOCKED, EMPTY, OWN};

/// Number of diagonals in one direction (2n - 1)
pub const DIAGONAL_COUNT: usize = BOARD_SIZE * 2 - 1;

/// Lines shorter than a five can never score.
const MIN_LINE_LEN: usize = 5;

/// Longest encoded line: one full row plus an edge marker on each end
pub const MAX_LINE_BUF: usize = BOARD_SIZE + 2;

/// The four line families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row,
    Column,
    /// Cells with constant `row + col`
    Diagonal,
    /// Cells with constant `row - col`
    AntiDiagonal,
}

impl LineKind {
    pub const ALL: [LineKind; 4] = [
        LineKind::Row,
        LineKind::Column,
        LineKind::Diagonal,
        LineKind::AntiDiagonal,
    ];

    /// How many lines of this kind the board has
    pub fn count(self) -> usize {
        match self {
            LineKind::Row | LineKind::Column => BOARD_SIZE,
            LineKind::Diagonal | LineKind::AntiDiagonal => DIAGONAL_COUNT,
        }
    }

    /// Index of the line of this kind that passes through `pos`
    pub fn index_of(self, pos: Pos) -> usize {
        let (r, c) = (pos.row as usize, pos.col as usize);
        match self {
            LineKind::Row => r,
            LineKind::Column => c,
            LineKind::Diagonal => r + c,
            LineKind::AntiDiagonal => r + BOARD_SIZE - 1 - c,
        }
    }

    /// First cell of line `index` and the step that walks along it
    fn origin(self, index: usize) -> (Pos, (i32, i32)) {
        let k = index as i32;
        let last = BOARD_SIZE as i32 - 1;
        let (r, c, step) = match self {
            LineKind::Row => (k, 0, (0, 1)),
            LineKind::Column => (0, k, (1, 0)),
            LineKind::Diagonal => {
                let r = (k - last).max(0);
                (r, k - r, (1, -1))
            }
            LineKind::AntiDiagonal => {
                let d = k - last;
                let r = d.max(0);
                (r, r - d, (1, 1))
            }
        };
        (Pos::new(r as u8, c as u8), step)
    }

    /// Cells of line `index`, walking away from the top edge (or left edge for rows)
    pub fn cells(self, index: usize) -> impl Iterator<Item = Pos> {
        let (start, (dr, dc)) = self.origin(index);
        std::iter::successors(Some(start), move |p| p.offset(dr, dc, 1))
    }
}

/// Encode line `index` of `kind` for `color` into `buf`, bracketed by edge
/// markers. Returns the filled prefix.
pub fn encode_line<'a>(
    board: &Board,
    kind: LineKind,
    index: usize,
    color: Stone,
    buf: &'a mut [u8; MAX_LINE_BUF],
) -> &'a [u8] {
    let mut len = 0;
    buf[len] = BLOCKED;
    len += 1;
    for pos in kind.cells(index) {
        let cell = board.get(pos);
        buf[len] = if cell == color {
            OWN
        } else if cell == Stone::Empty {
            EMPTY
        } else {
            BLOCKED
        };
        len += 1;
    }
    buf[len] = BLOCKED;
    len += 1;
    &buf[..len]
}

/// Score of a single line for `color`, 0 for lines too short to hold a five.
pub fn line_score(board: &Board, kind: LineKind, index: usize, color: Stone) -> i64 {
    let mut buf = [BLOCKED; MAX_LINE_BUF];
    let line = encode_line(board, kind, index, color, &mut buf);
    // Two bytes are the edge markers
    if line.len() - 2 < MIN_LINE_LEN {
        0
    } else {
        score_line(line)
    }
}

/// Cached line scores, indexed `[color][line]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScores {
    rows: [[i64; BOARD_SIZE]; 2],
    cols: [[i64; BOARD_SIZE]; 2],
    diagonals: [[i64; DIAGONAL_COUNT]; 2],
    anti_diagonals: [[i64; DIAGONAL_COUNT]; 2],
}

impl LineScores {
    /// Score every line of the board from scratch.
    pub fn new(board: &Board) -> Self {
        let mut scores = Self {
            rows: [[0; BOARD_SIZE]; 2],
            cols: [[0; BOARD_SIZE]; 2],
            diagonals: [[0; DIAGONAL_COUNT]; 2],
            anti_diagonals: [[0; DIAGONAL_COUNT]; 2],
        };
        scores.rebuild(board);
        scores
    }

    pub fn rebuild(&mut self, board: &Board) {
        for color in [Stone::Black, Stone::White] {
            for kind in LineKind::ALL {
                for index in 0..kind.count() {
                    self.slots_mut(kind, color)[index] = line_score(board, kind, index, color);
                }
            }
        }
    }

    /// Rescore the four lines through `pos` for both colors.
    pub fn update(&mut self, board: &Board, pos: Pos) {
        for color in [Stone::Black, Stone::White] {
            for kind in LineKind::ALL {
                let index = kind.index_of(pos);
                self.slots_mut(kind, color)[index] = line_score(board, kind, index, color);
            }
        }
    }

    /// Cached scores of one line family for `color`
    pub fn slots(&self, kind: LineKind, color: Stone) -> &[i64] {
        let i = color.index();
        match kind {
            LineKind::Row => &self.rows[i],
            LineKind::Column => &self.cols[i],
            LineKind::Diagonal => &self.diagonals[i],
            LineKind::AntiDiagonal => &self.anti_diagonals[i],
        }
    }

    fn slots_mut(&mut self, kind: LineKind, color: Stone) -> &mut [i64] {
        let i = color.index();
        match kind {
            LineKind::Row => &mut self.rows[i],
            LineKind::Column => &mut self.cols[i],
            LineKind::Diagonal => &mut self.diagonals[i],
            LineKind::AntiDiagonal => &mut self.anti_diagonals[i],
        }
    }

    /// Total heuristic score for `color`: the sum of all four arrays.
    pub fn total(&self, color: Stone) -> i64 {
        LineKind::ALL
            .iter()
            .map(|&kind| self.slots(kind, color).iter().sum::<i64>())
            .sum()
    }
}
