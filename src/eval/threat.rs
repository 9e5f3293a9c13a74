//! Tactical threat detection for a single candidate cell
//!
//! For each direction a 9-cell window (4 cells either side) is cut around the
//! candidate, with the candidate itself treated as an own stone. The board is
//! never written: the window builder never reads the center cell.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::patterns::{
    contains_with_center, BLOCKED, EMPTY, OPEN_FOUR_SHAPE, OPEN_THREE_SHAPES, OWN,
};

/// Cells examined on each side of the candidate
pub const WINDOW_RADIUS: i32 = 4;
/// Full window length
pub const WINDOW_LEN: usize = WINDOW_RADIUS as usize * 2 + 1;
/// Index of the candidate inside the window
pub const WINDOW_CENTER: usize = WINDOW_RADIUS as usize;

/// Shape tally for one candidate move, summed over the four directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreatCount {
    pub open_four: u8,
    pub four: u8,
    pub open_three: u8,
}

/// A move is a double threat when the opponent cannot answer everything it
/// creates with one stone.
#[inline]
pub fn is_double_threat(tc: &ThreatCount) -> bool {
    tc.open_four >= 1
        || tc.four >= 2
        || (tc.four >= 1 && tc.open_three >= 1)
        || tc.open_three >= 2
}

/// Encode the window through `pos` along `(dr, dc)` for `color`, with `pos`
/// itself counted as an own stone. Off-board cells read as blocked.
pub fn build_window(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> [u8; WINDOW_LEN] {
    let mut window = [BLOCKED; WINDOW_LEN];
    for i in -WINDOW_RADIUS..=WINDOW_RADIUS {
        let slot = (i + WINDOW_RADIUS) as usize;
        if i == 0 {
            window[slot] = OWN;
            continue;
        }
        window[slot] = match board.get_checked(pos.row as i32 + dr * i, pos.col as i32 + dc * i) {
            Some(cell) if cell == color => OWN,
            Some(Stone::Empty) => EMPTY,
            _ => BLOCKED,
        };
    }
    window
}

/// Some five-cell span through the center holds exactly four own stones and
/// one empty cell (solid or split four).
pub fn has_four(window: &[u8; WINDOW_LEN]) -> bool {
    (0..=WINDOW_LEN - 5)
        .filter(|&start| start <= WINDOW_CENTER && WINDOW_CENTER < start + 5)
        .any(|start| {
            let span = &window[start..start + 5];
            let stones = span.iter().filter(|&&b| b == OWN).count();
            let empties = span.iter().filter(|&&b| b == EMPTY).count();
            stones == 4 && empties == 1
        })
}

/// `_OOOO_` through the center
pub fn has_open_four(window: &[u8; WINDOW_LEN]) -> bool {
    contains_with_center(window, OPEN_FOUR_SHAPE, WINDOW_CENTER)
}

/// Any open-three shape through the center
pub fn has_open_three(window: &[u8; WINDOW_LEN]) -> bool {
    OPEN_THREE_SHAPES
        .iter()
        .any(|shape| contains_with_center(window, shape, WINDOW_CENTER))
}

/// Tally the shapes `color` would create by playing at `pos`.
pub fn threat_count(board: &Board, pos: Pos, color: Stone) -> ThreatCount {
    let mut tc = ThreatCount::default();
    for &(dr, dc) in &DIRECTIONS {
        let window = build_window(board, pos, dr, dc, color);
        if has_open_four(&window) {
            tc.open_four += 1;
        }
        if has_four(&window) {
            tc.four += 1;
        }
        if has_open_three(&window) {
            tc.open_three += 1;
        }
    }
    tc
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

    #[test]
    fn test_window_edges_are_blocked() {
        let board = Board::new();
        let window = build_window(&board, Pos::new(0, 2), 0, 1, Stone::Black);
        assert_eq!(&window, b"220010000");
    }

    #[test]
    fn test_open_three_single_count() {
        // Completing (7,7),(7,8),(7,9) with both flanks empty
        let board = board_with(&[(7, 7, Stone::Black), (7, 8, Stone::Black)]);
        let tc = threat_count(&board, Pos::new(7, 9), Stone::Black);
        assert_eq!(tc, ThreatCount { open_four: 0, four: 0, open_three: 1 });
        assert!(!is_double_threat(&tc));
    }

    #[test]
    fn test_gapped_three_detected() {
        // _O_OO_ after playing (7,6)
        let board = board_with(&[(7, 8, Stone::White), (7, 9, Stone::White)]);
        let tc = threat_count(&board, Pos::new(7, 6), Stone::White);
        assert_eq!(tc.open_three, 1);
    }

    #[test]
    fn test_open_four_counts_as_four_too() {
        let board = board_with(&[
            (7, 5, Stone::White),
            (7, 6, Stone::White),
            (7, 7, Stone::White),
        ]);
        let tc = threat_count(&board, Pos::new(7, 8), Stone::White);
        assert_eq!(tc.open_four, 1);
        assert_eq!(tc.four, 1);
        assert!(is_double_threat(&tc));
    }

    #[test]
    fn test_split_four() {
        // Playing (7,4) makes XBB_BB, a four with a gap
        let board = board_with(&[
            (7, 5, Stone::Black),
            (7, 7, Stone::Black),
            (7, 8, Stone::Black),
            (7, 3, Stone::White),
        ]);
        let tc = threat_count(&board, Pos::new(7, 4), Stone::Black);
        assert_eq!(tc.four, 1);
        assert_eq!(tc.open_four, 0);
    }

    #[test]
    fn test_blocked_three_is_not_open() {
        let board = board_with(&[
            (7, 6, Stone::White),
            (7, 7, Stone::Black),
            (7, 8, Stone::Black),
        ]);
        let tc = threat_count(&board, Pos::new(7, 9), Stone::Black);
        assert_eq!(tc.open_three, 0);
    }

    #[test]
    fn test_double_threat_rules() {
        let cases = [
            (ThreatCount { open_four: 1, four: 0, open_three: 0 }, true),
            (ThreatCount { open_four: 0, four: 2, open_three: 0 }, true),
            (ThreatCount { open_four: 0, four: 1, open_three: 1 }, true),
            (ThreatCount { open_four: 0, four: 0, open_three: 2 }, true),
            (ThreatCount { open_four: 0, four: 1, open_three: 0 }, false),
            (ThreatCount { open_four: 0, four: 0, open_three: 1 }, false),
            (ThreatCount::default(), false),
        ];
        for (tc, expected) in cases {
            assert_eq!(is_double_threat(&tc), expected, "{:?}", tc);
        }
    }

    #[test]
    fn test_board_untouched() {
        let board = board_with(&[(7, 7, Stone::Black)]);
        let before = board;
        let _ = threat_count(&board, Pos::new(7, 8), Stone::Black);
        assert_eq!(board, before);
        assert!(board.is_empty(Pos::new(7, 8)));
    }
}
