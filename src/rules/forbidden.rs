//! Renju restrictions on Black
//!
//! A Black move is a foul when it makes an overline (six or more in a row),
//! or, unless it also completes an exact five, when it makes a double four
//! or a double three. Shapes are read through the same 9-cell windows the
//! threat detector uses, so "double four" here means two directions that
//! each show a four-with-one-gap span through the move.

use std::fmt;

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::eval::threat::{build_window, has_four, has_open_three};

use super::win::count_consecutive;

/// Why a Black move is forbidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foul {
    /// Six or more in an unbroken run
    Overline,
    /// Fours in two or more directions
    DoubleFour,
    /// Open threes in two or more directions
    DoubleThree,
}

impl fmt::Display for Foul {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Foul::Overline => "overline",
            Foul::DoubleFour => "double-four",
            Foul::DoubleThree => "double-three",
        };
        f.write_str(name)
    }
}

/// Classify a Black move at `pos`. The stone is placed hypothetically; the
/// board is not modified.
///
/// Returns `None` for an occupied cell; use [`is_forbidden`] for the
/// predicate that also rejects those.
pub fn check_foul(board: &Board, pos: Pos) -> Option<Foul> {
    if !board.is_empty(pos) {
        return None;
    }

    let mut exact_five = false;
    let mut overline = false;
    for &(dr, dc) in &DIRECTIONS {
        match count_consecutive(board, pos, dr, dc, Stone::Black) {
            5 => exact_five = true,
            n if n > 5 => overline = true,
            _ => {}
        }
    }
    if overline {
        return Some(Foul::Overline);
    }
    if exact_five {
        return None;
    }

    let mut fours = 0;
    let mut threes = 0;
    for &(dr, dc) in &DIRECTIONS {
        let window = build_window(board, pos, dr, dc, Stone::Black);
        if has_four(&window) {
            fours += 1;
        }
        if has_open_three(&window) {
            threes += 1;
        }
    }

    if fours >= 2 {
        Some(Foul::DoubleFour)
    } else if threes >= 2 {
        Some(Foul::DoubleThree)
    } else {
        None
    }
}

/// Would a Black stone at `pos` be illegal? Occupied cells count as illegal.
#[inline]
pub fn is_forbidden(board: &Board, pos: Pos) -> bool {
    !board.is_empty(pos) || check_foul(board, pos).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8, Stone)]) -> Board {
        let mut board = Board::new();
        for &(r, c, s) in stones {
            board.place_stone(Pos::new(r, c), s);
        }
        board
    }

    fn black(cells: &[(u8, u8)]) -> Board {
        let stones: Vec<_> = cells.iter().map(|&(r, c)| (r, c, Stone::Black)).collect();
        board_with(&stones)
    }

    #[test]
    fn test_empty_board_center_is_legal() {
        let board = Board::new();
        assert_eq!(check_foul(&board, Pos::new(7, 7)), None);
        assert!(!is_forbidden(&board, Pos::new(7, 7)));
    }

    #[test]
    fn test_single_open_three_is_legal() {
        let board = black(&[(7, 7), (7, 8)]);
        assert_eq!(check_foul(&board, Pos::new(7, 9)), None);
    }

    #[test]
    fn test_double_three() {
        // Cross: the center completes a row three and a column three
        let board = black(&[(7, 6), (7, 8), (6, 7), (8, 7)]);
        assert_eq!(check_foul(&board, Pos::new(7, 7)), Some(Foul::DoubleThree));
        assert!(is_forbidden(&board, Pos::new(7, 7)));
    }

    #[test]
    fn test_double_three_with_gap() {
        // (7,6) only makes the gapped row three; (7,7) adds a diagonal three
        let board = black(&[(7, 8), (7, 9), (6, 6), (5, 5)]);
        assert_eq!(check_foul(&board, Pos::new(7, 6)), None);
        assert_eq!(check_foul(&board, Pos::new(7, 7)), Some(Foul::DoubleThree));
    }

    #[test]
    fn test_blocked_three_does_not_count() {
        let board = board_with(&[
            (7, 5, Stone::White),
            (7, 6, Stone::Black),
            (7, 8, Stone::Black),
            (6, 7, Stone::Black),
            (8, 7, Stone::Black),
        ]);
        assert_eq!(check_foul(&board, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_overline() {
        let board = black(&[(7, 2), (7, 3), (7, 4), (7, 6), (7, 7)]);
        assert_eq!(check_foul(&board, Pos::new(7, 5)), Some(Foul::Overline));
    }

    #[test]
    fn test_overline_beats_five_elsewhere() {
        // (7,7) makes five in the column and six in the row
        let board = black(&[
            (7, 2), (7, 3), (7, 4), (7, 5), (7, 6),
            (3, 7), (4, 7), (5, 7), (6, 7),
        ]);
        assert_eq!(check_foul(&board, Pos::new(7, 7)), Some(Foul::Overline));
    }

    #[test]
    fn test_exact_five_overrides_double_three() {
        // Row five plus two open threes through (7,7)
        let board = black(&[
            (7, 3), (7, 4), (7, 5), (7, 6),
            (6, 7), (8, 7),
            (6, 6), (8, 8),
        ]);
        assert_eq!(check_foul(&board, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_double_four() {
        // Row and column fours through (7,7), neither an open four
        let board = board_with(&[
            (7, 3, Stone::White),
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            (3, 7, Stone::White),
            (4, 7, Stone::Black),
            (5, 7, Stone::Black),
            (6, 7, Stone::Black),
        ]);
        assert_eq!(check_foul(&board, Pos::new(7, 7)), Some(Foul::DoubleFour));
    }

    #[test]
    fn test_occupied_cell() {
        let board = black(&[(7, 7)]);
        assert_eq!(check_foul(&board, Pos::new(7, 7)), None);
        assert!(is_forbidden(&board, Pos::new(7, 7)));
    }

    #[test]
    fn test_foul_display() {
        assert_eq!(Foul::Overline.to_string(), "overline");
        assert_eq!(Foul::DoubleFour.to_string(), "double-four");
        assert_eq!(Foul::DoubleThree.to_string(), "double-three");
    }
}
